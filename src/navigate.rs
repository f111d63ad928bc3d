//! Outbound navigation to tool websites.

use log::{info, warn};

use crate::error::{Error, Result};

/// Opens external URLs.
pub trait Navigator {
    /// Open `url` in an external browser. Fire-and-forget: success only
    /// means the request was handed off.
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Navigator backed by the platform's default URL handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open(&mut self, url: &str) -> Result<()> {
        info!("Opening {}", url);
        open::that_detached(url).map_err(|e| {
            warn!("Failed to open {}: {}", url, e);
            Error::Navigation(format!("{}: {}", url, e))
        })
    }
}

/// Navigator that records URLs instead of opening them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    opened: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first
    pub fn opened(&self) -> &[String] {
        &self.opened
    }
}

impl Navigator for RecordingNavigator {
    fn open(&mut self, url: &str) -> Result<()> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_navigator() {
        let mut nav = RecordingNavigator::new();
        assert!(nav.opened().is_empty());

        nav.open("https://a.example").unwrap();
        nav.open("https://b.example").unwrap();
        assert_eq!(nav.opened(), &["https://a.example", "https://b.example"]);
    }
}

//! Catalog data loading.
//!
//! The default catalog is compiled into the binary; an alternative file with
//! the same schema can be supplied instead.

use std::fs;
use std::path::Path;

use log::info;

use crate::domain::Tool;
use crate::error::{Error, Result};

const BUNDLED_TOOLS: &str = include_str!("../../data/tools.json");

/// The catalog shipped with the binary.
pub fn bundled_tools() -> Result<Vec<Tool>> {
    parse_tools(BUNDLED_TOOLS, "bundled catalog")
}

/// Load a catalog from a JSON file.
pub fn load_tools(path: impl AsRef<Path>) -> Result<Vec<Tool>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let tools = parse_tools(&content, &path.display().to_string())?;
    info!("Loaded {} tools from {}", tools.len(), path.display());
    Ok(tools)
}

fn parse_tools(content: &str, source: &str) -> Result<Vec<Tool>> {
    serde_json::from_str(content).map_err(|e| Error::Catalog(format!("{}: {}", source, e)))
}

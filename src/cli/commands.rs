//! CLI command definitions using clap.
//!
//! - list: print the filtered catalog
//! - categories: print the category set
//! - show: print one tool
//! - bookmark / bookmarks: toggle and list bookmarks
//! - open: open a tool's website
//! - theme: print or toggle the saved theme

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tooldir - browse, search and bookmark AI tools from the terminal
#[derive(Parser, Debug)]
#[command(name = "tooldir")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools, featured first
    List {
        /// Case-insensitive search over name, description and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Only tools in this category ("All" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Only bookmarked tools
        #[arg(short, long)]
        bookmarks: bool,
    },

    /// List the categories present in the catalog
    Categories,

    /// Show one tool
    Show {
        /// Tool ID
        id: u32,
    },

    /// Add or remove a bookmark
    Bookmark {
        /// Tool ID to toggle
        id: u32,
    },

    /// List bookmarked tools
    Bookmarks,

    /// Open a tool's website
    Open {
        /// Tool ID
        id: u32,
    },

    /// Show the saved theme
    Theme {
        /// Switch between light and dark
        #[arg(short, long)]
        toggle: bool,
    },
}

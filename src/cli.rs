//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for vermap using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive package grid with live search (default)
//! - **list**: Print the status line and preview cards for a query
//! - **show**: Print every version record of one package
//! - **config**: Inspect or create the configuration file
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use vermap::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["vermap", "--catalog", "catalog.json", "list", "re"]);
//! assert!(matches!(cli.get_command(), Commands::List { .. }));
//! ```

use crate::search::MatchPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "vermap")]
#[command(about = "Browse a catalog of package version mappings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog document to read (overrides config)
    #[arg(short = 'c', long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// How queries match package names (overrides config)
    #[arg(short = 'm', long = "match", value_enum, value_name = "POLICY", global = true)]
    pub match_policy: Option<MatchPolicy>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive package browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial search query
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Print matching packages with their first two version records
    #[command(visible_alias = "l")]
    List {
        /// Search query (all packages when omitted)
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// Print every version record of a package
    #[command(visible_alias = "s")]
    Show {
        /// Package name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the configuration file location
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Browse { query: None })
    }
}

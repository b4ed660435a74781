//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Character gallery: a server-rendered "Load More" card grid
#[derive(Parser, Debug)]
#[command(name = "character-gallery")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the page-1 endpoint
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the gallery web server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Load the gallery headlessly and print the accumulated characters
    Browse {
        /// Number of "Load More" actions after the initial load
        #[arg(long, default_value = "0")]
        pages: usize,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Validate configuration and print the effective settings
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON view snapshot
    Json,
    /// One line per character
    Pretty,
}

//! CLI module
//!
//! Command-line interface for the gallery.
//!
//! # Commands
//!
//! - `serve` - Start the web server
//! - `browse` - Load pages headlessly and print the characters
//! - `validate` - Check configuration

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{format_view, Runner};
pub use server::{router, serve, AppState, ServerConfig};

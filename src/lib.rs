//! # Character Gallery
//!
//! A server-rendered card grid over a paginated public character API,
//! with a "Load More" control that fetches and accumulates further pages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use character_gallery::gallery::{initial_load, load_more, HttpPageSource};
//! use character_gallery::http::HttpClient;
//! use character_gallery::api::DEFAULT_ENDPOINT;
//!
//! #[tokio::main]
//! async fn main() -> character_gallery::Result<()> {
//!     let source = HttpPageSource::new(HttpClient::new()?);
//!     let mut view = initial_load(&source, DEFAULT_ENDPOINT).await?;
//!     load_more(&mut view, &source).await?;
//!     println!("{} characters", view.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  cli: serve (axum)  ·  browse  ·  validate               │
//! └───────────────┬───────────────────────────┬──────────────┘
//!                 │                           │
//! ┌───────────────┴──────────┐   ┌────────────┴─────────────┐
//! │ gallery                  │   │ render                   │
//! │ initial_load · load_more │   │ ViewState → card grid    │
//! │ ViewStore                │   │ (askama)                 │
//! └───────┬──────────┬───────┘   └──────────────────────────┘
//!         │          │
//! ┌───────┴──────┐ ┌─┴─────────────────────────────────────┐
//! │ pagination   │ │ api (decode boundary) ← http (reqwest) │
//! │ advance      │ │ retry · backoff · rate limit           │
//! │ merge        │ └────────────────────────────────────────┘
//! └──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the gallery
pub mod error;

/// Common types
pub mod types;

/// HTTP client with retry and rate limiting
pub mod http;

/// API response shapes and decoding
pub mod api;

/// Pagination state and transitions
pub mod pagination;

/// Fetch-and-merge flow and live views
pub mod gallery;

/// HTML rendering
pub mod render;

/// Configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use api::{CharacterRecord, PageResponse, DEFAULT_ENDPOINT};
pub use pagination::{PageInfo, ResultList, ViewState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

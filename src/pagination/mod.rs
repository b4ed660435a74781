//! Pagination module
//!
//! # Overview
//!
//! Tracks where a gallery view is in the API's page sequence and which
//! records it has accumulated. Everything here is synchronous; fetching
//! lives in [`crate::gallery`].

mod state;
mod types;

pub use state::ViewState;
pub use types::{Advance, MergeOutcome, PageInfo, ResultList};

#[cfg(test)]
mod tests;

//! Character API module
//!
//! Typed response shapes and the decode boundary that validates them.

mod decode;
mod types;

pub use decode::{decode_page, decode_page_value};
pub use types::{ApiInfo, CharacterRecord, NamedRef, PageResponse};

/// Page 1 of the public character API
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character/";

#[cfg(test)]
pub(crate) mod fixtures;

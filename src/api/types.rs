//! Response shapes of the character API
//!
//! ```text
//! { "info": { "count", "pages", "next", "prev" },
//!   "results": [ { "id", "name", "image", "gender", "species",
//!                  "location": { "name", "url" } | null,
//!                  "origin":   { "name", "url" } | null, ... } ] }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pagination metadata as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Total number of items across all pages
    pub count: u64,
    /// Total number of pages
    pub pages: u64,
    /// URL of the following page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the preceding page, absent on the first page
    #[serde(default)]
    pub prev: Option<String>,
}

/// A named link to another resource (location, origin)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// One character of the result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Stable identity key
    pub id: u64,
    pub name: String,
    pub image: String,
    pub gender: String,
    pub species: String,
    #[serde(default)]
    pub location: Option<NamedRef>,
    #[serde(default)]
    pub origin: Option<NamedRef>,
    /// Alive, Dead or unknown
    #[serde(default)]
    pub status: Option<String>,
    /// Subspecies; usually empty
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl CharacterRecord {
    /// Name of the last known location, if any
    pub fn location_name(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.name.as_str())
    }

    /// Name of the origin, if any
    pub fn origin_name(&self) -> Option<&str> {
        self.origin.as_ref().map(|o| o.name.as_str())
    }
}

/// A decoded page: metadata plus this page's records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    pub info: ApiInfo,
    pub results: Vec<CharacterRecord>,
}

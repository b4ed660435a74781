//! Pagination state types
//!
//! [`PageInfo`] is the API's `info` block plus the endpoint that produced
//! the loaded page. [`ResultList`] holds every record shown so far.

use crate::api::{ApiInfo, CharacterRecord};
use serde::Serialize;

/// Pagination metadata of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub count: u64,
    pub pages: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
    /// Endpoint of the currently requested page
    pub current: String,
}

impl PageInfo {
    /// Combine fetched metadata with the URL it came from
    pub fn from_api(current: impl Into<String>, info: ApiInfo) -> Self {
        Self {
            count: info.count,
            pages: info.pages,
            next: info.next,
            prev: info.prev,
            current: current.into(),
        }
    }

    /// Whether a following page exists
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Ordered records in arrival order; duplicates are kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultList(Vec<CharacterRecord>);

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page of records after the existing ones
    pub fn extend(&mut self, records: Vec<CharacterRecord>) {
        self.0.extend(records);
    }

    /// Discard everything and start over from `records`
    pub fn replace(&mut self, records: Vec<CharacterRecord>) {
        self.0 = records;
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharacterRecord> {
        self.0.iter()
    }

    /// Record ids in display order
    pub fn ids(&self) -> Vec<u64> {
        self.0.iter().map(|r| r.id).collect()
    }
}

impl From<Vec<CharacterRecord>> for ResultList {
    fn from(records: Vec<CharacterRecord>) -> Self {
        Self(records)
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a CharacterRecord;
    type IntoIter = std::slice::Iter<'a, CharacterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of a "Load More" transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// `current` now points at this URL
    Moved(String),
    /// No `next` link; nothing changed
    Exhausted,
}

impl Advance {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// How a fetched page was folded into the result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MergeOutcome {
    /// Page had a `prev` link; records were appended
    Appended { added: usize, total: usize },
    /// Page had no `prev` link; list was reset to this page
    Replaced { count: usize },
}

impl MergeOutcome {
    /// Number of records in the list after the merge
    pub fn total(&self) -> usize {
        match self {
            Self::Appended { total, .. } => *total,
            Self::Replaced { count } => *count,
        }
    }
}

//! View state and its transitions
//!
//! A view owns one [`PageInfo`] and one [`ResultList`]. They change in
//! exactly three places:
//!
//! 1. [`ViewState::advance`] moves `current` to `next` (user "Load More").
//! 2. [`ViewState::take_pending_fetch`] hands out the URL to fetch, once per
//!    distinct `current`, never for the default endpoint.
//! 3. [`ViewState::merge`] folds a fetched page in: a page without `prev`
//!    replaces the list, any other page is appended.

use super::types::{Advance, MergeOutcome, PageInfo, ResultList};
use crate::api::PageResponse;
use serde::Serialize;
use tracing::debug;

/// Owned state of one rendered gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub page: PageInfo,
    pub results: ResultList,
    #[serde(skip)]
    default_endpoint: String,
    /// Last `current` value the fetch trigger has seen
    #[serde(skip)]
    observed: String,
}

impl ViewState {
    /// Seed a view with the server-side page-1 payload
    pub fn from_initial(default_endpoint: impl Into<String>, initial: PageResponse) -> Self {
        let default_endpoint = default_endpoint.into();
        Self {
            page: PageInfo::from_api(default_endpoint.clone(), initial.info),
            results: ResultList::from(initial.results),
            observed: default_endpoint.clone(),
            default_endpoint,
        }
    }

    pub fn default_endpoint(&self) -> &str {
        &self.default_endpoint
    }

    pub fn current(&self) -> &str {
        &self.page.current
    }

    pub fn has_more(&self) -> bool {
        self.page.has_next()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Point `current` at the `next` link, leaving everything else alone
    pub fn advance(&mut self) -> Advance {
        match self.page.next.clone() {
            Some(next) => {
                debug!(from = %self.page.current, to = %next, "advancing page");
                self.page.current.clone_from(&next);
                Advance::Moved(next)
            }
            None => {
                debug!(current = %self.page.current, "no next page");
                Advance::Exhausted
            }
        }
    }

    /// URL to fetch if `current` changed since the last call
    ///
    /// Returns `None` when `current` was already handed out or is the
    /// default endpoint, which the initial load already covered.
    pub fn take_pending_fetch(&mut self) -> Option<String> {
        if self.page.current == self.observed {
            return None;
        }
        self.observed.clone_from(&self.page.current);
        if self.page.current == self.default_endpoint {
            return None;
        }
        Some(self.page.current.clone())
    }

    /// Fold a fetched page into the view
    pub fn merge(&mut self, fetched_url: impl Into<String>, fetched: PageResponse) -> MergeOutcome {
        let PageResponse { info, results } = fetched;
        let replace = info.prev.is_none();

        self.page = PageInfo::from_api(fetched_url, info);
        self.observed.clone_from(&self.page.current);

        if replace {
            self.results.replace(results);
            MergeOutcome::Replaced {
                count: self.results.len(),
            }
        } else {
            let added = results.len();
            self.results.extend(results);
            MergeOutcome::Appended {
                added,
                total: self.results.len(),
            }
        }
    }
}

//! Gallery module
//!
//! Drives a [`ViewState`] against a [`PageSource`]:
//!
//! - [`initial_load`] fetches page 1 once, before the first render.
//! - [`load_more`] is the "Load More" action: advance, then fetch and merge
//!   if `current` changed to something new.
//! - [`load_more_shared`] does the same for a view shared between requests,
//!   without holding the view lock across the network call.
//!
//! Fetch and decode errors propagate to the caller and leave the list
//! untouched. `current` keeps its advanced value, so repeating the action
//! after a failure does not fetch again.

mod source;
mod store;

pub use source::{HttpPageSource, PageSource};
pub use store::{SharedView, ViewId, ViewStore, ViewTimes};

use crate::error::Result;
use crate::pagination::{Advance, MergeOutcome, ViewState};
use tracing::{debug, info};

/// What a "Load More" action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadMore {
    /// There is no next page; nothing was fetched
    Exhausted,
    /// `current` was already fetched (or is the default endpoint)
    Unchanged,
    /// A page was fetched and merged
    Merged(MergeOutcome),
}

/// Fetch page 1 and build the view the first render uses
pub async fn initial_load<S>(source: &S, default_endpoint: &str) -> Result<ViewState>
where
    S: PageSource + ?Sized,
{
    let page = source.fetch_page(default_endpoint).await?;
    info!(
        endpoint = default_endpoint,
        records = page.results.len(),
        total = page.info.count,
        "initial page loaded"
    );
    Ok(ViewState::from_initial(default_endpoint, page))
}

/// Run "Load More" on a view owned by the caller
pub async fn load_more<S>(view: &mut ViewState, source: &S) -> Result<LoadMore>
where
    S: PageSource + ?Sized,
{
    let Some(url) = prepare(view) else {
        return Ok(unfetched(view));
    };
    let page = source.fetch_page(&url).await?;
    Ok(finish(view, url, page))
}

/// Run "Load More" on a view shared between requests
///
/// The lock is released while the page is in flight. Overlapping actions
/// on one view are not ordered: whichever response arrives last wins.
pub async fn load_more_shared<S>(view: &SharedView, source: &S) -> Result<LoadMore>
where
    S: PageSource + ?Sized,
{
    let url = {
        let mut state = view.lock().await;
        match prepare(&mut state) {
            Some(url) => url,
            None => return Ok(unfetched(&state)),
        }
    };

    let page = source.fetch_page(&url).await?;

    let mut state = view.lock().await;
    Ok(finish(&mut state, url, page))
}

fn prepare(view: &mut ViewState) -> Option<String> {
    match view.advance() {
        Advance::Exhausted => None,
        Advance::Moved(_) => view.take_pending_fetch(),
    }
}

fn unfetched(view: &ViewState) -> LoadMore {
    if view.has_more() {
        debug!(current = view.current(), "current already fetched");
        LoadMore::Unchanged
    } else {
        LoadMore::Exhausted
    }
}

fn finish(view: &mut ViewState, url: String, page: crate::api::PageResponse) -> LoadMore {
    let outcome = view.merge(url, page);
    info!(current = view.current(), total = outcome.total(), ?outcome, "page merged");
    LoadMore::Merged(outcome)
}

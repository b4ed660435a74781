//! Tests for pagination module

use super::*;
use crate::api::fixtures::{page, record};
use crate::api::ApiInfo;
use pretty_assertions::assert_eq;

const DEFAULT: &str = "https://rickandmortyapi.com/api/character/";
const P1: &str = "https://rickandmortyapi.com/api/character/?page=1";
const P2: &str = "https://rickandmortyapi.com/api/character/?page=2";
const P3: &str = "https://rickandmortyapi.com/api/character/?page=3";

fn initial_view() -> ViewState {
    ViewState::from_initial(DEFAULT, page(&[1], Some(P2), None))
}

// ============================================================================
// PageInfo / ResultList Tests
// ============================================================================

#[test]
fn test_page_info_from_api() {
    let info = ApiInfo {
        count: 20,
        pages: 2,
        next: Some(P2.to_string()),
        prev: None,
    };
    let page_info = PageInfo::from_api(DEFAULT, info);

    assert_eq!(page_info.current, DEFAULT);
    assert_eq!(page_info.count, 20);
    assert_eq!(page_info.pages, 2);
    assert!(page_info.has_next());
    assert_eq!(page_info.prev, None);
}

#[test]
fn test_result_list_extend_and_replace() {
    let mut list = ResultList::new();
    assert!(list.is_empty());

    list.extend(vec![record(1), record(2)]);
    list.extend(vec![record(2)]);
    assert_eq!(list.ids(), vec![1, 2, 2]);

    list.replace(vec![record(9)]);
    assert_eq!(list.ids(), vec![9]);
    assert_eq!(list.iter().count(), 1);
}

#[test]
fn test_merge_outcome_total() {
    assert_eq!(MergeOutcome::Appended { added: 2, total: 5 }.total(), 5);
    assert_eq!(MergeOutcome::Replaced { count: 3 }.total(), 3);
}

// ============================================================================
// Initial Load
// ============================================================================

#[test]
fn test_initial_view_uses_server_payload() {
    let view = initial_view();

    assert_eq!(view.len(), 1);
    assert_eq!(view.results.ids(), vec![1]);
    assert_eq!(view.current(), DEFAULT);
    assert_eq!(view.default_endpoint(), DEFAULT);
    assert_eq!(view.page.next.as_deref(), Some(P2));
    assert!(view.has_more());
}

#[test]
fn test_initial_view_never_triggers_fetch() {
    let mut view = initial_view();
    assert_eq!(view.take_pending_fetch(), None);
    assert_eq!(view.take_pending_fetch(), None);
}

// ============================================================================
// Advance
// ============================================================================

#[test]
fn test_advance_moves_current_only() {
    let mut view = initial_view();
    let before = view.clone();

    assert_eq!(view.advance(), Advance::Moved(P2.to_string()));
    assert_eq!(view.current(), P2);
    assert_eq!(view.page.next, before.page.next);
    assert_eq!(view.page.count, before.page.count);
    assert_eq!(view.results, before.results);
}

#[test]
fn test_advance_without_next_is_noop() {
    let mut view = ViewState::from_initial(DEFAULT, page(&[1, 2], None, None));
    let before = view.clone();

    let advance = view.advance();
    assert!(advance.is_exhausted());
    assert_eq!(view, before);
    assert_eq!(view.take_pending_fetch(), None);
}

// ============================================================================
// Fetch Trigger
// ============================================================================

#[test]
fn test_pending_fetch_fires_once_per_value() {
    let mut view = initial_view();
    view.advance();

    assert_eq!(view.take_pending_fetch().as_deref(), Some(P2));
    assert_eq!(view.take_pending_fetch(), None);

    // Advancing again to the same `next` does not re-trigger
    view.advance();
    assert_eq!(view.take_pending_fetch(), None);
}

#[test]
fn test_pending_fetch_skips_default_endpoint() {
    let mut view = ViewState::from_initial(DEFAULT, page(&[1], Some(P2), None));
    view.advance();
    view.take_pending_fetch();
    view.merge(P2, page(&[2], Some(DEFAULT), Some(P1)));

    // `next` points back at the default endpoint: no fetch is issued
    view.advance();
    assert_eq!(view.current(), DEFAULT);
    assert_eq!(view.take_pending_fetch(), None);
}

// ============================================================================
// Merge
// ============================================================================

#[test]
fn test_merge_appends_when_prev_present() {
    let mut view = initial_view();
    view.advance();
    let url = view.take_pending_fetch().unwrap();

    let outcome = view.merge(url, page(&[2], Some(P3), Some(P1)));

    assert_eq!(outcome, MergeOutcome::Appended { added: 1, total: 2 });
    assert_eq!(view.results.ids(), vec![1, 2]);
    assert_eq!(view.current(), P2);
    assert_eq!(view.page.next.as_deref(), Some(P3));
    assert_eq!(view.page.prev.as_deref(), Some(P1));
}

#[test]
fn test_merge_replaces_when_prev_absent() {
    let mut view = initial_view();
    view.advance();
    let url = view.take_pending_fetch().unwrap();

    let outcome = view.merge(url, page(&[9], Some(P2), None));

    assert_eq!(outcome, MergeOutcome::Replaced { count: 1 });
    assert_eq!(view.results.ids(), vec![9]);
}

#[test]
fn test_replace_ignores_prior_accumulation() {
    let mut view = initial_view();
    view.merge(P2, page(&[2, 3], Some(P3), Some(P1)));
    view.merge(P3, page(&[4, 5], None, Some(P2)));
    assert_eq!(view.len(), 5);

    view.merge(P1, page(&[7, 8], Some(P2), None));
    assert_eq!(view.results.ids(), vec![7, 8]);
}

#[test]
fn test_append_keeps_duplicates_and_order() {
    let mut view = ViewState::from_initial(DEFAULT, page(&[3, 1], Some(P2), None));
    view.merge(P2, page(&[1, 2], Some(P3), Some(P1)));

    assert_eq!(view.results.ids(), vec![3, 1, 1, 2]);
}

#[test]
fn test_merge_pins_current_to_fetched_url() {
    let mut view = initial_view();
    view.advance();
    view.take_pending_fetch();

    // A late response for another URL still pins `current` to its own URL
    view.merge(P3, page(&[3], None, Some(P2)));
    assert_eq!(view.current(), P3);
    assert!(!view.has_more());
    assert_eq!(view.take_pending_fetch(), None);
}

#[test]
fn test_result_list_never_shrinks_on_append() {
    let mut view = initial_view();
    let mut last_len = view.len();
    for (n, url) in [P2, P3].into_iter().enumerate() {
        let id = n as u64 + 10;
        view.merge(url, page(&[id], Some(P3), Some(P1)));
        assert!(view.len() > last_len);
        last_len = view.len();
    }
}

#[test]
fn test_view_state_serializes_page_and_results() {
    let view = initial_view();
    let value = serde_json::to_value(&view).unwrap();

    assert_eq!(value["page"]["current"], DEFAULT);
    assert_eq!(value["results"].as_array().unwrap().len(), 1);
    assert!(value.get("observed").is_none());
}

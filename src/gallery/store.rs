//! Live views of the server
//!
//! Each browser tab that opens the gallery gets its own [`ViewState`],
//! addressed by a numeric id. Views live in memory only and are dropped on
//! close, after sitting idle longer than the TTL, or when the store is full
//! and they are the least recently used.

use crate::pagination::ViewState;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

/// Identifier of a live view
pub type ViewId = u64;

/// A view shared between concurrent requests
pub type SharedView = Arc<Mutex<ViewState>>;

#[derive(Debug)]
struct Entry {
    view: SharedView,
    created_at: DateTime<Utc>,
    last_seen: DateTime<Utc>,
}

/// Timestamps of a live view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTimes {
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

/// In-memory registry of live views
#[derive(Debug)]
pub struct ViewStore {
    views: RwLock<HashMap<ViewId, Entry>>,
    next_id: AtomicU64,
    ttl: Duration,
    max_views: usize,
}

impl ViewStore {
    /// Create a store; `max_views` is clamped to at least one
    pub fn new(ttl: Duration, max_views: usize) -> Self {
        Self {
            views: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            ttl,
            max_views: max_views.max(1),
        }
    }

    /// Register a freshly loaded view
    pub async fn insert(&self, view: ViewState) -> ViewId {
        self.insert_at(view, Utc::now()).await
    }

    pub(crate) async fn insert_at(&self, view: ViewState, now: DateTime<Utc>) -> ViewId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut views = self.views.write().await;

        let expired = evict_expired(&mut views, self.ttl, now);
        if expired > 0 {
            info!(expired, "evicted idle views");
        }
        while views.len() >= self.max_views {
            let Some(oldest) = views
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id)
            else {
                break;
            };
            views.remove(&oldest);
            debug!(view = oldest, "evicted least recently used view");
        }

        views.insert(
            id,
            Entry {
                view: Arc::new(Mutex::new(view)),
                created_at: now,
                last_seen: now,
            },
        );
        id
    }

    /// Look up a view and mark it as seen
    pub async fn get(&self, id: ViewId) -> Option<SharedView> {
        self.get_at(id, Utc::now()).await
    }

    pub(crate) async fn get_at(&self, id: ViewId, now: DateTime<Utc>) -> Option<SharedView> {
        let mut views = self.views.write().await;
        if views.get(&id).is_some_and(|e| is_expired(e, self.ttl, now)) {
            views.remove(&id);
            debug!(view = id, "view expired");
            return None;
        }
        views.get_mut(&id).map(|entry| {
            entry.last_seen = now;
            Arc::clone(&entry.view)
        })
    }

    /// Timestamps of a view, without touching it
    pub async fn times(&self, id: ViewId) -> Option<ViewTimes> {
        self.views.read().await.get(&id).map(|e| ViewTimes {
            created_at: e.created_at,
            last_seen: e.last_seen,
        })
    }

    /// Drop a view; returns whether it existed
    pub async fn remove(&self, id: ViewId) -> bool {
        self.views.write().await.remove(&id).is_some()
    }

    /// Drop every view idle for longer than the TTL
    pub async fn evict_expired(&self) -> usize {
        let mut views = self.views.write().await;
        evict_expired(&mut views, self.ttl, Utc::now())
    }

    pub async fn len(&self) -> usize {
        self.views.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.views.read().await.is_empty()
    }
}

fn is_expired(entry: &Entry, ttl: Duration, now: DateTime<Utc>) -> bool {
    (now - entry.last_seen)
        .to_std()
        .is_ok_and(|idle| idle > ttl)
}

fn evict_expired(views: &mut HashMap<ViewId, Entry>, ttl: Duration, now: DateTime<Utc>) -> usize {
    let before = views.len();
    views.retain(|_, entry| !is_expired(entry, ttl, now));
    before - views.len()
}

//! In-memory tag store shared by the banchan-api integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use banchan_core::{Error, QuerySpec, Result, Tag, TagConnection, TagStore};

/// How the mock store misbehaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    None,
    Acquire,
    Fetch,
}

#[derive(Debug)]
struct Shared {
    rows: Vec<Tag>,
    failure: Failure,
    executed: Mutex<Vec<QuerySpec>>,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

/// Tag store backed by a fixed row set.
///
/// Evaluates a spec the way the Postgres store does: OR of substring
/// matches on name, ordered by id, then offset and limit.
#[derive(Debug, Clone)]
pub struct MockStore {
    shared: Arc<Shared>,
}

impl MockStore {
    pub fn new(rows: Vec<Tag>) -> Self {
        Self::with_failure(rows, Failure::None)
    }

    pub fn with_failure(rows: Vec<Tag>, failure: Failure) -> Self {
        Self {
            shared: Arc::new(Shared {
                rows,
                failure,
                executed: Mutex::new(Vec::new()),
                acquired: AtomicUsize::new(0),
                released: AtomicUsize::new(0),
            }),
        }
    }

    pub fn unavailable() -> Self {
        Self::with_failure(Vec::new(), Failure::Acquire)
    }

    /// Specs passed to `fetch_tags`, in call order.
    pub fn executed(&self) -> Vec<QuerySpec> {
        self.shared.executed.lock().unwrap().clone()
    }

    pub fn acquired(&self) -> usize {
        self.shared.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.shared.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TagStore for MockStore {
    async fn acquire(&self) -> Result<Box<dyn TagConnection>> {
        if self.shared.failure == Failure::Acquire {
            return Err(Error::StoreConnection("connection refused".to_string()));
        }
        self.shared.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockConnection {
            shared: Arc::clone(&self.shared),
        }))
    }
}

struct MockConnection {
    shared: Arc<Shared>,
}

#[async_trait]
impl TagConnection for MockConnection {
    async fn fetch_tags(&mut self, spec: &QuerySpec) -> Result<Vec<Tag>> {
        self.shared.executed.lock().unwrap().push(spec.clone());
        if self.shared.failure == Failure::Fetch {
            return Err(Error::StoreQuery("relation \"tag\" does not exist".to_string()));
        }

        let terms: Vec<&str> = spec.match_terms().collect();
        let mut rows: Vec<Tag> = self
            .shared
            .rows
            .iter()
            .filter(|tag| terms.is_empty() || terms.iter().any(|t| tag.name.contains(t)))
            .cloned()
            .collect();
        rows.sort_by_key(|tag| tag.id);

        Ok(rows
            .into_iter()
            .skip(spec.offset() as usize)
            .take(spec.limit() as usize)
            .collect())
    }

    async fn release(self: Box<Self>) {}
}

impl Drop for MockConnection {
    fn drop(&mut self) {
        self.shared.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Four colour tags with ids 1..=4.
pub fn colour_tags() -> Vec<Tag> {
    vec![
        Tag::new(1, "red"),
        Tag::new(2, "green"),
        Tag::new(3, "dark red"),
        Tag::new(4, "blue"),
    ]
}

/// `count` tags named `tag-001`, `tag-002`, ...
pub fn numbered_tags(count: i64) -> Vec<Tag> {
    (1..=count)
        .map(|id| Tag::new(id, format!("tag-{:03}", id)))
        .collect()
}

//! Core traits for banchan store abstractions.
//!
//! The search handler only sees these traits, so a live database is never
//! required to exercise request handling.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Tag;
use crate::search::QuerySpec;

// =============================================================================
// TAG STORE TRAITS
// =============================================================================

/// Source of request-scoped tag store connections.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Open a connection for one request.
    ///
    /// Fails with `Error::StoreConnection` when the store is unreachable.
    async fn acquire(&self) -> Result<Box<dyn TagConnection>>;
}

/// A connection held for the duration of a single request.
///
/// Dropping the connection also releases it; [`TagConnection::release`]
/// lets the caller release it explicitly and log the event.
#[async_trait]
pub trait TagConnection: Send {
    /// Execute `spec` against the tag relation, returning rows in spec order.
    async fn fetch_tags(&mut self, spec: &QuerySpec) -> Result<Vec<Tag>>;

    /// Give the connection back to its owner.
    async fn release(self: Box<Self>);
}

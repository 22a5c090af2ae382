//! PostgreSQL tag store.
//!
//! Renders a [`QuerySpec`] into parameterized SQL and runs it on a pooled
//! connection that lives for exactly one request.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, error, trace};

use banchan_core::defaults::TAG_TABLE;
use banchan_core::{Error, QueryMod, QuerySpec, Result, Tag, TagConnection, TagStore};

/// Render `spec` as a SELECT over the tag table.
///
/// `MatchAny` descriptors become `WHERE name LIKE $n` for the first and
/// `OR name LIKE $n` for the rest, bound to `%term%`. The term is bound as
/// given, so `%` and `_` inside it act as LIKE wildcards. Without any
/// `MatchAny` the query has no WHERE clause. SQL clause order is fixed
/// (filter, order, limit, offset) whatever the descriptor order; the last
/// `Limit`/`Offset` wins.
pub fn render_query(spec: &QuerySpec) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT id, name FROM {}", TAG_TABLE));

    let mut order_by = Vec::new();
    let mut limit = None;
    let mut offset = None;
    let mut first_match = true;

    for query_mod in spec.mods() {
        match query_mod {
            QueryMod::MatchAny { field, substring } => {
                builder.push(if first_match { " WHERE " } else { " OR " });
                builder.push(field.column());
                builder.push(" LIKE ");
                builder.push_bind(substring.like_pattern());
                first_match = false;
            }
            QueryMod::OrderBy { field, direction } => {
                order_by.push(format!("{} {}", field.column(), direction.as_sql()));
            }
            QueryMod::Limit(n) => limit = Some(*n),
            QueryMod::Offset(n) => offset = Some(*n),
        }
    }

    if !order_by.is_empty() {
        builder.push(" ORDER BY ");
        builder.push(order_by.join(", "));
    }
    if let Some(n) = limit {
        builder.push(" LIMIT ");
        builder.push_bind(n);
    }
    if let Some(n) = offset {
        builder.push(" OFFSET ");
        builder.push_bind(n);
    }

    builder
}

/// PostgreSQL implementation of [`TagStore`].
#[derive(Clone)]
pub struct PgTagStore {
    pool: PgPool,
}

impl PgTagStore {
    /// Create a new PgTagStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagStore for PgTagStore {
    async fn acquire(&self) -> Result<Box<dyn TagConnection>> {
        let conn = self.pool.acquire().await.map_err(|e| {
            error!(
                subsystem = "db",
                component = "tag_store",
                op = "acquire",
                error = %e,
                "Failed to acquire database connection"
            );
            Error::StoreConnection(e.to_string())
        })?;

        trace!(
            subsystem = "db",
            component = "tag_store",
            op = "acquire",
            pool_size = self.pool.size(),
            pool_idle = self.pool.num_idle(),
            "Acquired connection"
        );

        Ok(Box::new(PgTagConnection { conn }))
    }
}

/// A pooled connection scoped to one search request.
pub struct PgTagConnection {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl TagConnection for PgTagConnection {
    async fn fetch_tags(&mut self, spec: &QuerySpec) -> Result<Vec<Tag>> {
        let start = Instant::now();
        let mut builder = render_query(spec);

        debug!(
            subsystem = "db",
            component = "tag_store",
            op = "fetch_tags",
            sql = builder.sql(),
            "Executing tag query"
        );

        let tags = builder
            .build_query_as::<Tag>()
            .fetch_all(&mut *self.conn)
            .await
            .map_err(Error::from)?;

        debug!(
            subsystem = "db",
            component = "tag_store",
            op = "fetch_tags",
            result_count = tags.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Tag query complete"
        );

        Ok(tags)
    }

    async fn release(self: Box<Self>) {
        trace!(
            subsystem = "db",
            component = "tag_store",
            op = "release",
            "Returning connection to pool"
        );
        drop(self.conn);
    }
}

//! # banchan-db
//!
//! PostgreSQL database layer for banchan tag search.
//!
//! This crate provides:
//! - Connection pool management
//! - Rendering of [`QuerySpec`](banchan_core::QuerySpec) into parameterized SQL
//! - A [`TagStore`](banchan_core::TagStore) handing out request-scoped connections
//!
//! ## Example
//!
//! ```rust,ignore
//! use banchan_db::Database;
//! use banchan_core::{build_query, normalize_keywords, PageRequest, TagStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/banchan").await?;
//!
//!     let spec = build_query(&normalize_keywords("red blue"), PageRequest::new(1)?);
//!     let mut conn = db.tags.acquire().await?;
//!     let tags = conn.fetch_tags(&spec).await;
//!     conn.release().await;
//!
//!     println!("Found {} tags", tags?.len());
//!     Ok(())
//! }
//! ```
pub mod pool;
pub mod tags;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use banchan_core::*;

pub use pool::{create_lazy_pool, create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};
pub use tags::{render_query, PgTagConnection, PgTagStore};

/// Database context holding the pool and the tag store.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Tag store handing out per-request connections.
    pub tags: PgTagStore,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            tags: PgTagStore::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Create without connecting; connections open on first use.
    pub fn connect_lazy(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_lazy_pool(url, config)?;
        Ok(Self::new(pool))
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}

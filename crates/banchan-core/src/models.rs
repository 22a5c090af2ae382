//! Core data models for banchan tag search.

use serde::{Deserialize, Serialize};

/// A searchable tag, matched by substring on `name`.
///
/// Rows are owned by the store; the search path only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

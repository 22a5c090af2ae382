//! # banchan-core
//!
//! Core types, traits, and query descriptors for banchan tag search.
//!
//! This crate holds everything the search path needs that does not perform
//! I/O: the error taxonomy, the `Tag` model, keyword normalization,
//! pagination, and the `QuerySpec` consumed by store adapters.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod search;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use search::*;
pub use traits::*;

//! Centralized default constants for banchan tag search.
//!
//! Crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// PAGINATION
// =============================================================================

/// Fixed number of tags per search page.
pub const PAGE_SIZE: i64 = 20;

/// First valid page index (pages are 1-based).
pub const FIRST_PAGE: i64 = 1;

// =============================================================================
// STORE SCHEMA
// =============================================================================

/// Table holding searchable tags.
pub const TAG_TABLE: &str = "tag";

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

/// Message attached to a successful search.
pub const MESSAGE_OK: &str = "OK";

/// Message returned when path parameters are rejected.
pub const MESSAGE_PARAMETER_ERROR: &str = "Parameter Error";

/// Message returned for any store failure.
pub const MESSAGE_DB_CONNECTION_ERROR: &str = "DB Connection Error";

// =============================================================================
// SERVER
// =============================================================================

/// Default bind host for the HTTP adapter.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default bind port for the HTTP adapter.
pub const SERVER_PORT: u16 = 3000;

/// Default database URL when `DATABASE_URL` is unset.
pub const DATABASE_URL: &str = "postgres://localhost/banchan";

//! Structured logging field name constants for banchan.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation can query by the same names across subsystems.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Store failures, serialization failures |
//! | WARN  | Rejected request input |
//! | INFO  | Lifecycle events (startup, shutdown), completed searches |
//! | DEBUG | Built queries, pool decisions |
//! | TRACE | Per-token detail |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "api", "db"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "validator", "handler", "tag_store", "pool"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "search_tags", "acquire", "fetch_tags", "release"
pub const OPERATION: &str = "op";

// ─── Request fields ────────────────────────────────────────────────────────

/// Raw keyword path parameter as received.
pub const KEYWORD: &str = "keyword";

/// 1-based page index.
pub const PAGE: &str = "page";

/// Number of normalized search tokens.
pub const TOKEN_COUNT: &str = "token_count";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of tags returned by a search.
pub const RESULT_COUNT: &str = "result_count";

/// HTTP-style status code of the shaped response.
pub const STATUS_CODE: &str = "status_code";

// ─── Database fields ───────────────────────────────────────────────────────

/// Number of active connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

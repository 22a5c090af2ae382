//! Tag search request handler.
//!
//! Runs validation, query building, the store round-trip and response
//! shaping for a single request. The handler keeps no state between calls;
//! the store is passed in by the caller.

use std::time::Instant;

use tracing::{debug, error, info};

use banchan_core::{build_query, Result, Tag, TagStore};

use crate::gateway::{GatewayRequest, GatewayResponse};
use crate::response::{shape_error, shape_success};
use crate::validate::validate_search;

/// Answer a tag search request.
///
/// Never fails: every error is logged and shaped into a response.
pub async fn search_tags(store: &dyn TagStore, request: &GatewayRequest) -> GatewayResponse {
    let start = Instant::now();

    let response = match run_search(store, request).await {
        Ok(tags) => shape_success(&tags),
        Err(e) => shape_error(&e),
    };

    info!(
        subsystem = "api",
        component = "handler",
        op = "search_tags",
        status_code = response.status_code,
        duration_ms = start.elapsed().as_millis() as u64,
        "Search request complete"
    );

    response
}

async fn run_search(store: &dyn TagStore, request: &GatewayRequest) -> Result<Vec<Tag>> {
    let search = validate_search(&request.path_parameters)?;
    let spec = build_query(&search.tokens, search.page);

    debug!(
        subsystem = "api",
        component = "handler",
        op = "build_query",
        keyword = %search.keyword,
        page = search.page.page(),
        token_count = search.tokens.len(),
        limit = spec.limit(),
        offset = spec.offset(),
        matches_all = spec.matches_all(),
        "Built tag query"
    );

    let mut conn = store.acquire().await.inspect_err(|e| {
        error!(
            subsystem = "api",
            component = "handler",
            op = "acquire",
            error = %e,
            "Tag store unavailable"
        );
    })?;

    let result = conn.fetch_tags(&spec).await;
    conn.release().await;

    let tags = result.inspect_err(|e| {
        error!(
            subsystem = "api",
            component = "handler",
            op = "fetch_tags",
            error = %e,
            "Tag query failed"
        );
    })?;

    info!(
        subsystem = "api",
        component = "handler",
        op = "fetch_tags",
        result_count = tags.len(),
        "Tag query returned"
    );

    Ok(tags)
}

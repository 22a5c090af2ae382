//! Path parameter validation for tag search requests.
//!
//! Rejects malformed input before any query is built or any store
//! connection is opened.

use std::collections::HashMap;

use tracing::warn;

use banchan_core::{normalize_keywords, Error, PageRequest, Result, SearchToken};

use crate::gateway::{KEYWORD_PARAM, PAGE_PARAM};

/// A search request whose parameters passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSearch {
    /// Keyword after path unescaping.
    pub keyword: String,
    /// Normalized search tokens in input order.
    pub tokens: Vec<SearchToken>,
    pub page: PageRequest,
}

/// Validate the `keyword` and `id` path parameters.
///
/// A missing `keyword` is treated as empty and therefore matches every tag.
/// Every rejection is logged before the error is returned.
pub fn validate_search(path_parameters: &HashMap<String, String>) -> Result<ValidatedSearch> {
    let raw_keyword = path_parameters
        .get(KEYWORD_PARAM)
        .map(String::as_str)
        .unwrap_or("");

    let keyword = path_unescape(raw_keyword).inspect_err(|e| {
        warn!(
            subsystem = "api",
            component = "validator",
            keyword = raw_keyword,
            error = %e,
            "Rejected keyword parameter"
        );
    })?;

    let raw_page = path_parameters.get(PAGE_PARAM).map(String::as_str);
    let page = parse_page(raw_page).inspect_err(|e| {
        warn!(
            subsystem = "api",
            component = "validator",
            page = raw_page.unwrap_or("(missing)"),
            error = %e,
            "Rejected page parameter"
        );
    })?;

    let tokens = normalize_keywords(&keyword);

    Ok(ValidatedSearch {
        keyword,
        tokens,
        page,
    })
}

/// Decode a percent-escaped path segment.
///
/// Every `%` must start a two-digit hex escape and the decoded bytes must be
/// UTF-8. `+` is not a space in paths and is kept as is.
pub fn path_unescape(raw: &str) -> Result<String> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => {
                    let end = (i + 3).min(bytes.len());
                    return Err(Error::Parameter(format!(
                        "invalid URL escape {:?}",
                        String::from_utf8_lossy(&bytes[i..end])
                    )));
                }
            }
        } else {
            i += 1;
        }
    }

    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::Parameter(format!("keyword is not valid UTF-8: {}", e)))
}

/// Parse the page index: a decimal integer, optionally signed, at least 1.
pub fn parse_page(raw: Option<&str>) -> Result<PageRequest> {
    let raw = raw.ok_or_else(|| Error::Parameter("missing page parameter".to_string()))?;
    let page: i64 = raw
        .parse()
        .map_err(|e| Error::Parameter(format!("invalid page {:?}: {}", raw, e)))?;
    PageRequest::new(page)
}

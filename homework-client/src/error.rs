//! Failure classification for HTTP calls

use std::error::Error as _;

/// Maximum number of response-body characters kept in a failure
const BODY_PREVIEW_CHARS: usize = 200;

/// Describes a transport error without its URL
///
/// URLs are dropped because the Bot API embeds the token in the path and the
/// status endpoint embeds a `from_date` that changes every cycle. The source
/// chain is appended so "connection refused" style causes survive.
pub fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Shortens a response body for inclusion in logs and failures
pub fn preview(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

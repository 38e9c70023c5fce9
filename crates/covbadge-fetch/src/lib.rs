//! Badge retrieval over HTTP.
//!
//! One blocking GET per run. Retries, timeouts, and redirect handling are
//! left to the client defaults.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Failure modes for a badge fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The badge service answered with a non-success status.
    #[error("{code}: {reason}")]
    Status { code: u16, reason: String },

    /// The request never completed (DNS, connect, or read failure).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Fetch a badge image and return the response body as text.
///
/// Statuses above 299 are failures; the body is not read in that case.
pub fn fetch_badge(url: &str) -> Result<String, FetchError> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if status.as_u16() > 299 {
        return Err(FetchError::Status {
            code: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
        });
    }
    Ok(response.text()?)
}

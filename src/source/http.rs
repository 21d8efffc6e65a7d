//! Remote dataset fetching over HTTP.

use crate::model::{SourceError, UserRecord};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP request timeout for the one-shot dataset fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch the roster dataset from a JSON endpoint.
///
/// One blocking GET, decoded straight into records. No authentication and
/// no pagination on the wire: the entire dataset arrives at once.
///
/// # Errors
///
/// Returns `SourceError::Http` for network or body-decode failures and
/// `SourceError::Status` for non-success responses.
pub fn fetch_remote(url: &str) -> Result<Vec<UserRecord>, SourceError> {
    debug!(url, "Fetching roster dataset");

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

    let response = client
        .get(url)
        .header(
            reqwest::header::USER_AGENT,
            concat!("roster/", env!("CARGO_PKG_VERSION")),
        )
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            code: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.json()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_remote_unreachable_host_is_http_error() {
        // Reserved TLD per RFC 2606; never resolves.
        let result = fetch_remote("http://roster.invalid/members.json");
        assert!(matches!(result, Err(SourceError::Http(_))));
    }
}

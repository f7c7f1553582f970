//! Content fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving HTML content from
//! HTTP/HTTPS URLs, local files, and standard input, plus a best-effort
//! `robots.txt` lookup.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{Result, SeoLensError};

/// Browser-like User-Agent sent with every page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Page request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// `robots.txt` requests get a shorter budget than the page itself.
pub const ROBOTS_TIMEOUT_SECS: u64 = 5;

/// Returned by [`fetch_robots`] whenever the file cannot be retrieved.
pub const ROBOTS_UNAVAILABLE: &str = "Not found or inaccessible";

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: DEFAULT_TIMEOUT_SECS, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// Fetches HTML content from a URL.
///
/// Performs a single HTTP GET with the configured User-Agent and timeout.
/// Redirects are followed; any final status outside 2xx is an error. There
/// is no retry.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| SeoLensError::InvalidUrl(e.to_string()))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SeoLensError::HttpError)?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "fetching page");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .send()
        .await
        .map_err(|e| map_reqwest_error(e, config.timeout))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SeoLensError::HttpStatus { status: status.as_u16(), url: response.url().to_string() });
    }

    let content = response.text().await.map_err(|e| map_reqwest_error(e, config.timeout))?;
    tracing::debug!(bytes = content.len(), "page fetched");

    Ok(content)
}

/// Fetches `/robots.txt` for the host serving `url`.
///
/// Never fails: any problem (bad URL, network error, non-2xx status) yields
/// [`ROBOTS_UNAVAILABLE`]. Uses the configured User-Agent with a fixed
/// [`ROBOTS_TIMEOUT_SECS`] timeout.
pub async fn fetch_robots(url: &str, config: &FetchConfig) -> String {
    let Some(robots_url) = Url::parse(url).ok().and_then(|u| u.join("/robots.txt").ok()) else {
        return ROBOTS_UNAVAILABLE.to_string();
    };

    let robots_config = FetchConfig { timeout: ROBOTS_TIMEOUT_SECS, user_agent: config.user_agent.clone() };
    match fetch_url(robots_url.as_str(), &robots_config).await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(url = %robots_url, error = %e, "robots.txt unavailable");
            ROBOTS_UNAVAILABLE.to_string()
        }
    }
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(SeoLensError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SeoLensError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(SeoLensError::from)?;

    Ok(buffer)
}

fn map_reqwest_error(err: reqwest::Error, timeout: u64) -> SeoLensError {
    if err.is_timeout() {
        SeoLensError::Timeout { timeout }
    } else {
        SeoLensError::HttpError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 10);
        assert_eq!(config.user_agent, "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36");
    }

    #[tokio::test]
    async fn test_fetch_url_invalid() {
        let result = fetch_url("not-a-url", &FetchConfig::default()).await;
        assert!(matches!(result, Err(SeoLensError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_robots_invalid_url() {
        let robots = fetch_robots("not-a-url", &FetchConfig::default()).await;
        assert_eq!(robots, ROBOTS_UNAVAILABLE);
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(SeoLensError::FileNotFound(_))));
    }
}

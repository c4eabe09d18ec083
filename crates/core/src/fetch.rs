//! Content fetching from URLs and local files.
//!
//! This module retrieves raw HTML for the article extractor, either over
//! HTTP/HTTPS or from a file already on disk.

use std::fs;
use std::path::Path;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
use url::Url;

use crate::{LexometerError, Result};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; Lexometer/0.1)".to_string() }
    }
}

/// Checks that `url` parses and carries an HTTP(S) scheme.
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|e| LexometerError::InvalidUrl(format!("{url}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(LexometerError::InvalidUrl(format!("unsupported scheme `{other}` in {url}"))),
    }
}

/// Fetches HTML content from a URL.
///
/// Performs a single HTTP GET (redirects followed, no retries) and returns
/// the response body as text.
///
/// Non-2xx responses fail with [`LexometerError::HttpStatus`] instead of
/// handing the error page to the extractor. Such a page would otherwise only
/// surface later as [`LexometerError::ContentNotFound`], hiding the status.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = validate_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(LexometerError::HttpError)?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "sending GET");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                LexometerError::Timeout { timeout: config.timeout }
            } else {
                LexometerError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LexometerError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let content = response.text().await?;
    tracing::debug!(url, bytes = content.len(), "response received");

    Ok(content)
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        Err(LexometerError::FileNotFound(path.to_path_buf()))
    } else {
        fs::read_to_string(path).map_err(LexometerError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("Lexometer"));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(LexometerError::InvalidUrl(_))));
    }

    #[cfg(feature = "fetch")]
    #[tokio::test]
    async fn test_fetch_url_error_status_is_not_parsed() {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found")
                .unwrap();
        });

        let url = format!("http://{addr}/missing");
        let result = fetch_url(&url, &FetchConfig::default()).await;

        assert!(matches!(result, Err(LexometerError::HttpStatus { status: 404, .. })));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(LexometerError::FileNotFound(_))));
    }

    #[test]
    fn test_url_validation() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url(" https://example.com/a ").is_ok());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("ftp://example.com/file").is_err());
    }
}

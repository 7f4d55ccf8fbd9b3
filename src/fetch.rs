//! Plain HTTP checks.
//!
//! Used to validate links and redirects without going through the browser
//! session. Unlike the lookup helpers these propagate every failure to the
//! caller unmodified; there is no retry and no custom timeout here.

// ============================================================================
// Imports
// ============================================================================

use tracing::debug;

use crate::error::Result;

// ============================================================================
// Helpers
// ============================================================================

/// Fetches `url` and returns the response status code.
///
/// Redirects are followed, so the status belongs to the final hop.
///
/// # Errors
///
/// [`crate::Error::Http`] on any transport failure.
pub async fn fetch_status(url: &str) -> Result<u16> {
    let response = reqwest::get(url).await?;
    let status = response.status().as_u16();

    debug!(url, status, "Fetched status");
    Ok(status)
}

/// Fetches `url` and returns the final URL after redirects.
///
/// # Errors
///
/// [`crate::Error::Http`] on any transport failure.
pub async fn fetch_url(url: &str) -> Result<String> {
    let response = reqwest::get(url).await?;
    let final_url = response.url().as_str().to_string();

    debug!(url, %final_url, "Fetched URL");
    Ok(final_url)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response, then closes.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
        });

        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn test_fetch_status_ok() {
        let url = serve_once("HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n").await;
        assert_eq!(fetch_status(&url).await.unwrap(), 200);
    }

    #[tokio::test]
    async fn test_fetch_status_not_found() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\n\r\n").await;
        assert_eq!(fetch_status(&url).await.unwrap(), 404);
    }

    #[tokio::test]
    async fn test_fetch_url_without_redirect_is_identity() {
        let url = serve_once("HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n").await;
        assert_eq!(fetch_url(&url).await.unwrap(), url);
    }

    #[tokio::test]
    async fn test_failure_propagates() {
        // Nothing listens on this port; the error reaches the caller.
        let err = fetch_status("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, crate::Error::Http(_)));
    }
}

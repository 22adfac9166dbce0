//! HTTP client abstraction and wire types
//!
//! The trait keeps the probing and roster logic testable off the browser;
//! the gloo-net implementation behind the `hydrate` feature is the only code
//! that touches the real network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// HTTP response from a GET request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Success-class (2xx) check
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One roster entry as returned by the users endpoint
///
/// Extra fields the endpoint includes (full name, timestamps) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

/// Abstraction over the HTTP transport for dependency injection
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request to the given URL or origin-relative path
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Browser transport backed by the page's fetch API
///
/// Credentials (session cookies) ride along with the browser's defaults; no
/// auth headers are added here.
#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct GlooHttpClient {
    timeout_ms: Option<u32>,
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
impl GlooHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound each request to `timeout_ms`. A request that outlives the bound
    /// is reported as a transport error; the default is no bound, matching
    /// the browser's own fetch behavior.
    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self {
            timeout_ms: Some(timeout_ms),
        }
    }

    fn absolute(url: &str) -> Result<String> {
        use crate::error::ConsoleError;

        if url.starts_with("http") {
            return Ok(url.to_string());
        }
        let window = web_sys::window().ok_or_else(|| ConsoleError::Http("no window".into()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|e| ConsoleError::Http(format!("{:?}", e)))?;
        Ok(format!("{}{}", origin, url))
    }

    async fn get_inner(&self, url: &str) -> Result<HttpResponse> {
        use crate::error::ConsoleError;

        let url = Self::absolute(url)?;
        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ConsoleError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ConsoleError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        use crate::error::ConsoleError;
        use futures::FutureExt;

        let Some(timeout_ms) = self.timeout_ms else {
            return self.get_inner(url).await;
        };

        let request = self.get_inner(url).fuse();
        let timeout = gloo_timers::future::TimeoutFuture::new(timeout_ms).fuse();
        futures::pin_mut!(request, timeout);
        futures::select! {
            response = request => response,
            _ = timeout => Err(ConsoleError::Http(format!(
                "GET {} timed out after {}ms",
                url, timeout_ms
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_class_covers_2xx_only() {
        for status in [200, 201, 204, 299] {
            let response = HttpResponse {
                status,
                body: String::new(),
            };
            assert!(response.is_success(), "{status}");
        }
        for status in [199, 301, 401, 404, 500, 503] {
            let response = HttpResponse {
                status,
                body: String::new(),
            };
            assert!(!response.is_success(), "{status}");
        }
    }

    #[test]
    fn user_record_parses_wire_shape_and_ignores_extras() {
        let body = r#"{
            "id": 1,
            "username": "admin",
            "email": "admin@cloudforge.com",
            "full_name": "Administrator",
            "is_active": true,
            "created_at": "2026-01-05T10:00:00",
            "updated_at": "2026-01-05T10:00:00"
        }"#;

        let user: UserRecord = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "admin");
        assert_eq!(user.email, "admin@cloudforge.com");
        assert!(user.is_active);
    }
}

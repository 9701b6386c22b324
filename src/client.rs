//! HTTP transport for the GitLab REST API v4.
//!
//! Every call is a single request: no retries, no rate-limit handling, no
//! cursor following. A non-2xx status fails the call.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Method, Url, header};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::utils::constants::{API_ROOT, DEFAULT_PAGE_SIZE};

const MIN_REVEALED_TOKEN_LEN: usize = 8;

/// Settings the core needs from the command line.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the GitLab instance, e.g. `https://gitlab.com`.
    pub base_url: String,

    /// Personal access token, sent as a bearer token.
    pub token: String,

    /// Page size used by list queries when no override is given.
    pub page_size: u32,

    /// Request timeout. `None` waits as long as the server does.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: None,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Token with everything but its first and last two characters hidden.
    /// Tokens shorter than eight characters are hidden entirely.
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() < MIN_REVEALED_TOKEN_LEN {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{head}...{tail}")
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("GitLab URL is empty".to_string()));
        }
        let url = Url::parse(self.base_url.trim())
            .map_err(|e| Error::Config(format!("GitLab URL `{}` is invalid: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "GitLab URL `{}` must use http or https",
                self.base_url
            )));
        }
        if self.token.trim().is_empty() {
            return Err(Error::Config("access token is empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(Error::Config("page size must be positive".to_string()));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(Error::Config("timeout must be positive".to_string()));
        }
        Ok(())
    }
}

/// Authenticated access to API paths relative to `/api/v4`.
///
/// `path` includes its query string, e.g. `/projects/7/milestones?per_page=100`.
pub trait Transport {
    fn get(&self, path: &str) -> impl Future<Output = Result<Value>> + Send;

    fn put(&self, path: &str) -> impl Future<Output = Result<Value>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| Error::Config("access token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_ROOT, path)
    }

    async fn send(&self, method: Method, path: &str) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "request");

        let network = |source| Error::Network {
            path: path.to_string(),
            source,
        };
        let response = self
            .client
            .request(method, &url)
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %url, "request failed");
            return Err(Error::Transport {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response.bytes().await.map_err(network)?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode {
            path: path.to_string(),
            source,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::GET, path).await
    }

    async fn put(&self, path: &str) -> Result<Value> {
        self.send(Method::PUT, path).await
    }
}

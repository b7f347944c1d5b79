//! Remote semantic search.
//!
//! The remote side of a search is a trait so the engine can be exercised with
//! fakes; the real implementation talks HTTP to a semantic emoji search
//! endpoint. Remote lookups are best-effort: the engine decides what a
//! failure means for the session.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

/// Endpoint queried when no override is configured.
pub const DEFAULT_API_URL: &str = "https://emoji.getdango.com";

const SEARCH_PATH: &str = "/api/emoji";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Errors that can occur when querying the remote search endpoint.
#[derive(Debug)]
pub enum RemoteError {
    /// Transport-level failure: DNS, refused connection, timeout.
    Network(String),
    /// The endpoint answered with a non-success status code.
    Api { status: u16, message: String },
    /// The response body was not the expected JSON shape.
    Parse(String),
    /// The session is offline and the request was never sent.
    Offline,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Network(msg) => write!(f, "network error: {msg}"),
            RemoteError::Api { status, message } => {
                write!(f, "API error (status {status}): {message}")
            }
            RemoteError::Parse(msg) => write!(f, "parse error: {msg}"),
            RemoteError::Offline => write!(f, "offline"),
        }
    }
}

impl std::error::Error for RemoteError {}

/// A source of emoji suggestions for a free-text query.
///
/// Implementations must be cheap to share across tasks; the engine holds one
/// behind an `Arc` and calls it from spawned fetches.
#[async_trait]
pub trait RemoteSearch: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    /// Returns suggested emoji characters for `query`, best first.
    async fn search(&self, query: &str) -> Result<Vec<String>, RemoteError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    text: String,
}

/// HTTP client for the hosted semantic search endpoint.
pub struct HttpRemoteSearch {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRemoteSearch {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RemoteSearch for HttpRemoteSearch {
    fn name(&self) -> &str {
        "http"
    }

    async fn search(&self, query: &str) -> Result<Vec<String>, RemoteError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        debug!("Remote search request: {url}?q={query}");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Remote search error: status {} - {}", status.as_u16(), message);
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| RemoteError::Parse(e.to_string()))?;

        debug!("Remote search returned {} results", parsed.results.len());
        Ok(parsed.results.into_iter().map(|r| r.text).collect())
    }
}

/// Resolves the endpoint's host once to decide whether the session starts
/// online. A failed or slow lookup marks the session offline; it is never
/// retried.
pub async fn probe_connectivity(base_url: &str) -> bool {
    let url = match reqwest::Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("Connectivity probe skipped, bad endpoint {base_url:?}: {e}");
            return false;
        }
    };
    let Some(host) = url.host_str().map(str::to_string) else {
        warn!("Connectivity probe skipped, no host in {base_url:?}");
        return false;
    };
    let port = url.port_or_known_default().unwrap_or(443);

    match tokio::time::timeout(PROBE_TIMEOUT, tokio::net::lookup_host((host.as_str(), port))).await
    {
        Ok(Ok(mut addrs)) => {
            let online = addrs.next().is_some();
            debug!("Connectivity probe for {host}: online={online}");
            online
        }
        Ok(Err(e)) => {
            info!("Connectivity probe failed for {host}: {e}");
            false
        }
        Err(_) => {
            info!("Connectivity probe timed out for {host}");
            false
        }
    }
}

//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the analyzer, including:
//! - The `PageFetch` seam the crawler and the mobile probe call into
//! - Building HTTP clients with proper user agent strings and timeouts
//! - Timing each request up to the arrival of response headers
//! - Error classification (timeout, connection, request, body)

use crate::config::Config;
use reqwest::{redirect::Policy, Client};
use std::time::{Duration, Instant};
use thiserror::Error;
use url::Url;

/// Transport-level failure of a single fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("HTTP request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// A raw HTTP response, before any HTML parsing
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// Final URL after redirects
    pub final_url: Url,

    /// HTTP status code
    pub status: u16,

    /// Time from sending the request until the response headers arrived
    pub elapsed: Option<Duration>,

    /// Response body decoded as text
    pub body: String,
}

/// Fetches a URL and returns its raw response
///
/// Implementations perform exactly one attempt per call; the crawler never
/// retries. Any status code counts as a response: deciding what to do with
/// non-200 answers is up to the caller.
#[allow(async_fn_in_trait)]
pub trait PageFetch {
    /// Fetches a single URL
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError>;
}

/// `PageFetch` implementation backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from the analyzer configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl PageFetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        fetch_url(&self.client, url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The analyzer configuration (user agent and request timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use ai_compliance::config::Config;
/// use ai_compliance::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let timeout = config.crawler.request_timeout();

    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// The elapsed time is measured until the response headers are received, so
/// slow body transfers do not count against page speed.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchResponse)` - The server answered (with any status code)
/// * `Err(FetchError)` - The request or body transfer failed
pub async fn fetch_url(client: &Client, url: &Url) -> Result<FetchResponse, FetchError> {
    let started = Instant::now();

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let elapsed = started.elapsed();
    let status = response.status().as_u16();
    let final_url = response.url().clone();

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    Ok(FetchResponse {
        final_url,
        status,
        elapsed: Some(elapsed),
        body,
    })
}

/// Maps a `reqwest` send error onto a `FetchError`
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            source: error,
        }
    }
}

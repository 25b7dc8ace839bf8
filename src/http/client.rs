// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use reqwest::Client;

use super::request::Request;
use super::response::Response;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};
use crate::network::{Interceptor, InterceptorChain};

/// The network capability at the end of the pipeline
///
/// Executes a request exactly once per call. Implementations may fail; the
/// error is handed back up through every interceptor stage unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response>;
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Default timeout
    pub timeout: Duration,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Default headers
    pub default_headers: HeaderMap,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
            default_headers: HeaderMap::new(),
            proxy: None,
        }
    }
}

/// reqwest-backed transport
struct NetworkTransport {
    client: Client,
}

#[async_trait]
impl Transport for NetworkTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        let start = Instant::now();

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        let final_url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();
        let body: Bytes = response.bytes().await?;
        let response_time = start.elapsed().as_millis() as u64;

        Ok(Response::new(status, headers, body, final_url, response_time))
    }
}

/// HTTP client with an interceptor pipeline
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    interceptors: InterceptorChain,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .default_headers(config.default_headers.clone());

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        Ok(Self {
            transport: Arc::new(NetworkTransport { client }),
            interceptors: InterceptorChain::new(),
            config,
        })
    }

    /// Create a client that hands requests to a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            interceptors: InterceptorChain::new(),
            config: HttpClientConfig::default(),
        }
    }

    /// Append an interceptor stage; stages run in the order they were added
    pub fn with_interceptor<I: Interceptor + 'static>(mut self, interceptor: I) -> Self {
        self.interceptors.add(interceptor);
        self
    }

    /// Append a shared interceptor stage
    pub fn with_shared_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.add_shared(interceptor);
        self
    }

    /// Execute a GET request
    pub async fn get(&self, url: impl AsRef<str>) -> Result<Response> {
        self.execute(Request::get(url)?).await
    }

    /// Execute a POST request
    pub async fn post(&self, url: impl AsRef<str>, body: impl Into<Bytes>) -> Result<Response> {
        self.execute(Request::post(url)?.body(body)).await
    }

    /// Execute a request through every interceptor stage, then the transport
    pub async fn execute(&self, request: Request) -> Result<Response> {
        self.interceptors
            .execute(request, self.transport.clone())
            .await
    }

    /// Execute multiple requests concurrently
    pub async fn execute_all(&self, requests: Vec<Request>) -> Vec<Result<Response>> {
        let futures: Vec<_> = requests.into_iter().map(|r| self.execute(r)).collect();
        futures::future::join_all(futures).await
    }

    /// Number of interceptor stages
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new().unwrap();
        assert_eq!(client.config().user_agent, DEFAULT_USER_AGENT);
        assert_eq!(client.interceptor_count(), 0);
    }
}

// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Logging stage for the call pipeline

use std::sync::Arc;

use async_trait::async_trait;
use tracing::Instrument;

use super::builder::{Builder, LoggingConfig};
use super::delegate::{RequestDelegate, ResponseDelegate};
use super::level::LogLevel;
use super::logger::{is_enabled, BuiltInLogger, Logger};
use super::redact::{redact_headers, HeaderExclusion};
use crate::error::Result;
use crate::http::Response;
use crate::network::{Chain, Interceptor};

/// Guidance emitted after a failed call, before the border
pub const FAILURE_HINT: &str =
    "--- the error is passed on to the caller unchanged, watch your own log tag or sink for more information ---";

/// Interceptor that logs each call it sees and otherwise stays out of the way
///
/// Configuration is fixed at construction. Whether anything is logged at all
/// is also governed by the process-wide switch in [`super::set_enabled`].
///
/// # Example
///
/// ```rust,no_run
/// use httplog::{HttpClient, HttpLoggingInterceptor, LogLevel};
///
/// # async fn run() -> httplog::Result<()> {
/// httplog::set_enabled(true);
///
/// let logging = HttpLoggingInterceptor::builder()
///     .set_log_level(LogLevel::Headers)
///     .set_skip_urls(["/health"])?
///     .set_exclusive_headers(["authorization"], ["set-cookie"])?
///     .build();
///
/// let client = HttpClient::new()?.with_interceptor(logging);
/// client.get("https://example.com/").await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpLoggingInterceptor {
    level: LogLevel,
    logger: Arc<dyn Logger>,
    skip_urls: Vec<String>,
    exclude_request_headers: HeaderExclusion,
    exclude_response_headers: HeaderExclusion,
    request_delegate: RequestDelegate,
    response_delegate: ResponseDelegate,
}

impl HttpLoggingInterceptor {
    pub(crate) fn new(
        level: LogLevel,
        logger: Arc<dyn Logger>,
        skip_urls: Vec<String>,
        exclude_request_headers: HeaderExclusion,
        exclude_response_headers: HeaderExclusion,
    ) -> Self {
        let log_body = level.logs_body();
        let log_headers = level.logs_headers();

        Self {
            request_delegate: RequestDelegate::new(logger.clone(), log_body, log_headers),
            response_delegate: ResponseDelegate::new(logger.clone(), log_body, log_headers),
            level,
            logger,
            skip_urls,
            exclude_request_headers,
            exclude_response_headers,
        }
    }

    /// Body level, built-in logger, no exclusions
    pub fn create_default() -> Self {
        Self::new(
            LogLevel::Body,
            Arc::new(BuiltInLogger::new()),
            Vec::new(),
            HeaderExclusion::new(),
            HeaderExclusion::new(),
        )
    }

    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Build from a config record, checking every field; `logger` defaults to the built-in one
    pub fn from_config(config: &LoggingConfig, logger: Option<Arc<dyn Logger>>) -> Result<Self> {
        let mut builder = config.to_builder()?;
        if let Some(logger) = logger {
            builder = builder.set_logger(logger);
        }
        Ok(builder.build())
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn skip_urls(&self) -> &[String] {
        &self.skip_urls
    }

    pub fn excluded_request_headers(&self) -> &HeaderExclusion {
        &self.exclude_request_headers
    }

    pub fn excluded_response_headers(&self) -> &HeaderExclusion {
        &self.exclude_response_headers
    }

    /// Whether `url` contains any skip pattern
    pub fn is_skipped(&self, url: &str) -> bool {
        self.skip_urls.iter().any(|pattern| url.contains(pattern.as_str()))
    }
}

impl Default for HttpLoggingInterceptor {
    fn default() -> Self {
        Self::create_default()
    }
}

#[async_trait]
impl Interceptor for HttpLoggingInterceptor {
    async fn intercept(&self, chain: Chain) -> Result<Response> {
        if !is_enabled() || self.level == LogLevel::None {
            return chain.forward().await;
        }
        if self.is_skipped(chain.request().url_str()) {
            return chain.forward().await;
        }

        let request = chain.request().clone();
        let span = tracing::debug_span!(
            "http_log",
            method = %request.method,
            url = %request.url
        );

        async move {
            let shown = redact_headers(&request.headers, &self.exclude_request_headers);
            self.request_delegate.print_log(&request, &shown);

            let response = match chain.forward().await {
                Ok(response) => response,
                Err(e) => {
                    self.logger.log(&format!("<-- HTTP FAILED: {}", e));
                    self.logger.log(FAILURE_HINT);
                    self.logger.log_bottom_border();
                    return Err(e);
                }
            };

            let shown = redact_headers(&response.headers, &self.exclude_response_headers);
            self.response_delegate.print_log(&request, &response, &shown);

            Ok(response)
        }
        .instrument(span)
        .await
    }
}

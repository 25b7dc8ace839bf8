// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # httplog - HTTP call logging interceptor
//!
//! A pipeline stage that writes human-readable log lines for every request an
//! [`HttpClient`] sends and every response it receives. Requests and
//! responses pass through untouched.
//!
//! ## Features
//!
//! - Levels: none, basic summary lines, headers, text bodies
//! - Header redaction per direction, applied to the logged copy only
//! - URL skip list (substring match)
//! - Failures are logged and handed back to the caller unchanged
//! - Pluggable [`Logger`] sinks, `tracing` by default
//! - Process-wide on/off switch and log tag
//!
//! ## Example
//!
//! ```rust,no_run
//! use httplog::{HttpClient, HttpLoggingInterceptor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     httplog::set_enabled(true);
//!
//!     let client = HttpClient::new()?
//!         .with_interceptor(HttpLoggingInterceptor::create_default());
//!
//!     let response = client.get("https://example.com").await?;
//!     println!("{}", response.status);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod logging;
pub mod network;

// Re-exports for convenience

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, Request, Response, Transport};

// Pipeline
pub use network::{Chain, Interceptor, InterceptorChain};

// Logging
pub use logging::{
    is_enabled, log_tag, redact_headers, set_enabled, set_log_tag, Builder, BuiltInLogger,
    HeaderExclusion, HttpLoggingInterceptor, LogLevel, Logger, LoggingConfig, MemoryLogger,
};

/// httplog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client layer
//!
//! Provides the request/response types the pipeline operates on, the
//! [`Transport`] seam that performs the actual network call, and a
//! reqwest-backed [`HttpClient`] that runs interceptor stages in front of it.

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig, Transport};
pub use request::Request;
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("httplog/", env!("CARGO_PKG_VERSION"));

/// Header names read by the request and response types
pub mod headers {
    pub const CONTENT_TYPE: &str = "content-type";
}

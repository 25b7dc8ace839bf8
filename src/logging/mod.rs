// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP call logging
//!
//! [`HttpLoggingInterceptor`] decides whether and what to log for a call;
//! the delegates format the lines and a [`Logger`] emits them.

mod builder;
mod delegate;
mod interceptor;
mod level;
mod logger;
mod redact;

pub use builder::{Builder, LoggingConfig};
pub use delegate::{RequestDelegate, ResponseDelegate};
pub use interceptor::{HttpLoggingInterceptor, FAILURE_HINT};
pub use level::LogLevel;
pub use logger::{
    is_enabled, log_tag, set_enabled, set_log_tag, BuiltInLogger, Logger, MemoryLogger,
    BOTTOM_BORDER, DEFAULT_LOG_TAG,
};
pub use redact::{redact_headers, HeaderExclusion};

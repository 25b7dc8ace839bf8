// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Call pipeline
//!
//! Outgoing requests pass through an ordered list of interceptor stages before
//! reaching the transport.

mod pipeline;

pub use pipeline::{Chain, Interceptor, InterceptorChain};

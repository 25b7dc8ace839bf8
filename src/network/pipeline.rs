// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interceptor trait and the chain that drives it

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::http::{Request, Response, Transport};

/// A single stage in the client's request pipeline
///
/// A stage receives the [`Chain`] for the current call, may inspect the
/// request, and hands it on with [`Chain::proceed`]. Stages compose in either
/// order.
///
/// # Example
///
/// ```rust,no_run
/// use httplog::network::{Chain, Interceptor};
/// use httplog::http::Response;
/// use async_trait::async_trait;
///
/// struct Tagger;
///
/// #[async_trait]
/// impl Interceptor for Tagger {
///     async fn intercept(&self, chain: Chain) -> httplog::Result<Response> {
///         let request = chain.request().clone().header("x-tag", "1")?;
///         chain.proceed(request).await
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync {
    async fn intercept(&self, chain: Chain) -> Result<Response>;
}

type Stages = Arc<Vec<Arc<dyn Interceptor>>>;

/// Call context handed to a stage
///
/// `proceed` consumes the chain, so a stage can run the rest of the pipeline
/// at most once.
pub struct Chain {
    request: Request,
    stages: Stages,
    index: usize,
    transport: Arc<dyn Transport>,
}

impl Chain {
    /// A chain with no further stages; `proceed` goes straight to `transport`
    pub fn new(request: Request, transport: Arc<dyn Transport>) -> Self {
        Self {
            request,
            stages: Arc::new(Vec::new()),
            index: 0,
            transport,
        }
    }

    /// The request as it arrived at this stage
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Run the remaining stages and the transport with `request`
    pub async fn proceed(self, request: Request) -> Result<Response> {
        dispatch(self.stages, self.index, self.transport, request).await
    }

    /// Run the remaining stages with the request exactly as received
    pub async fn forward(self) -> Result<Response> {
        dispatch(self.stages, self.index, self.transport, self.request).await
    }
}

async fn dispatch(
    stages: Stages,
    index: usize,
    transport: Arc<dyn Transport>,
    request: Request,
) -> Result<Response> {
    match stages.get(index).cloned() {
        Some(stage) => {
            let chain = Chain {
                request,
                stages,
                index: index + 1,
                transport,
            };
            stage.intercept(chain).await
        }
        None => transport.execute(request).await,
    }
}

/// Ordered list of interceptor stages
#[derive(Clone, Default)]
pub struct InterceptorChain {
    stages: Stages,
}

impl InterceptorChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interceptor
    pub fn add<I: Interceptor + 'static>(&mut self, interceptor: I) {
        self.add_shared(Arc::new(interceptor));
    }

    /// Append an interceptor that is shared with other pipelines
    pub fn add_shared(&mut self, interceptor: Arc<dyn Interceptor>) {
        Arc::make_mut(&mut self.stages).push(interceptor);
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run `request` through every stage, then `transport`
    pub async fn execute(&self, request: Request, transport: Arc<dyn Transport>) -> Result<Response> {
        dispatch(self.stages.clone(), 0, transport, request).await
    }
}

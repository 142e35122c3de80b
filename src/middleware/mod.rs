//! Middleware layer.
//!
//! A middleware stage inspects a request before its handler runs and either
//! forwards (`Ok(())`) or terminates the pipeline with an [`ApiError`]. Stages
//! run in the order they were added; the first `Err` wins and nothing after it
//! executes.
//!
//! Two places hold stages:
//!
//! - [`Router::wrap`](crate::Router::wrap) for stages that see every request,
//!   matched or not (the request logger).
//! - A per-route [`Chain`] passed to [`Router::on_with`](crate::Router::on_with)
//!   for stages that guard a single route (auth, body validation).
//!
//! Built-in stages:
//! - [`log_request`]: one `info` event per request with method and path
//! - [`authenticate`]: shared-secret header check
//! - [`validate_product`]: `name` / `price` presence and type check

mod auth;
mod logger;
mod validate;

use std::sync::Arc;

use crate::error::ApiError;
use crate::request::Request;

pub use auth::authenticate;
pub use logger::log_request;
pub use validate::validate_product;

/// One interceptor in a [`Chain`].
///
/// Satisfied by any `fn(&Request, &S) -> Result<(), ApiError>`.
pub trait Middleware<S>: Send + Sync + 'static {
    fn handle(&self, req: &Request, state: &S) -> Result<(), ApiError>;
}

impl<F, S> Middleware<S> for F
where
    F: Fn(&Request, &S) -> Result<(), ApiError> + Send + Sync + 'static,
{
    fn handle(&self, req: &Request, state: &S) -> Result<(), ApiError> {
        self(req, state)
    }
}

/// An ordered, short-circuiting list of middleware stages.
///
/// ```rust
/// use catalog::middleware::{authenticate, validate_product, Chain};
/// use catalog::AppState;
///
/// let guarded: Chain<AppState> = Chain::new()
///     .then(authenticate)
///     .then(validate_product);
/// assert_eq!(guarded.len(), 2);
/// ```
pub struct Chain<S> {
    stages: Vec<Arc<dyn Middleware<S>>>,
}

impl<S: 'static> Chain<S> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage. Returns `self` for chaining.
    pub fn then(mut self, stage: impl Middleware<S>) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage in order, stopping at the first failure.
    pub fn run(&self, req: &Request, state: &S) -> Result<(), ApiError> {
        self.stages.iter().try_for_each(|stage| stage.handle(req, state))
    }
}

impl<S: 'static> Clone for Chain<S> {
    fn clone(&self) -> Self {
        Self { stages: self.stages.clone() }
    }
}

impl<S: 'static> Default for Chain<S> {
    fn default() -> Self { Self::new() }
}

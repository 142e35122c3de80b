//! Error types.
//!
//! Two families live here and never mix:
//!
//! - [`ApiError`] is a request-pipeline failure. Every middleware stage and
//!   handler returns `Result<_, ApiError>`; the first `Err` short-circuits the
//!   pipeline and is rendered once by the envelope formatter.
//! - [`Error`] is an infrastructure failure: binding a port, accepting a
//!   connection, or reading configuration at startup.

use thiserror::Error;

use crate::status::Status;

/// Message rendered for an [`ApiError::Internal`] that carries none.
pub const GENERIC_MESSAGE: &str = "Internal Server Error";

/// A typed failure raised anywhere in the request pipeline.
///
/// The `Display` output is the client-visible message.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// 404: unknown product id or unmatched route.
    #[error("{0}")]
    NotFound(String),

    /// 400: malformed body, missing field, or bad query parameter.
    #[error("{0}")]
    Validation(String),

    /// 401: missing or wrong shared secret.
    #[error("{0}")]
    Unauthorized(String),

    /// 500: anything unclassified.
    #[error("{}", .0.as_deref().unwrap_or(GENERIC_MESSAGE))]
    Internal(Option<String>),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(Some(message.into()))
    }

    /// The catch-all raised when no route matches.
    pub fn route_not_found() -> Self {
        Self::not_found("Route not found")
    }

    /// Not-found failure naming the product id that was asked for.
    pub fn product_not_found(id: &str) -> Self {
        Self::NotFound(format!("Product with id {id} not found"))
    }

    pub fn status(&self) -> Status {
        match self {
            Self::NotFound(_)     => Status::NotFound,
            Self::Validation(_)   => Status::BadRequest,
            Self::Unauthorized(_) => Status::Unauthorized,
            Self::Internal(_)     => Status::InternalServerError,
        }
    }
}

/// Infrastructure error returned by [`Server::serve`](crate::Server::serve)
/// and [`Config::from_env`](crate::config::Config::from_env).
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),
}

//! Response / error formatter.
//!
//! The single terminal stage of the pipeline. Success payloads become
//!
//! ```json
//! {"status": "success", "count": 2, "total": 2, "page": 1, "data": [...]}
//! ```
//!
//! with only the fields a route sets, and every [`ApiError`] becomes
//!
//! ```json
//! {"status": "error", "message": "Product with id 9 not found"}
//! ```
//!
//! with the error's status code. Failures are logged here and nowhere else.

use serde::Serialize;

use crate::error::ApiError;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// A successful result plus the envelope metadata the route reports.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    #[serde(skip)]
    code: Status,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> Success<T> {
    fn with(code: Status, data: Option<T>) -> Self {
        Self {
            code,
            status: "success",
            message: None,
            count: None,
            total: None,
            page: None,
            data,
        }
    }

    /// `200 OK` carrying `data`.
    pub fn ok(data: T) -> Self {
        Self::with(Status::Ok, Some(data))
    }

    /// `201 Created` carrying `data`.
    pub fn created(data: T) -> Self {
        Self::with(Status::Created, Some(data))
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }
}

impl Success<()> {
    /// `200 OK` with a fixed message and no `data`.
    pub fn message(message: &'static str) -> Self {
        let mut success = Self::with(Status::Ok, None);
        success.message = Some(message);
        success
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => Response::builder().status(self.code).json(body),
            Err(e) => {
                tracing::error!(error = %e, "failed to encode response");
                ApiError::internal("Failed to encode response").into_response()
            }
        }
    }
}

#[derive(Serialize)]
struct Failure<'a> {
    status: &'static str,
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status();
        let status = u16::from(code);

        let message = self.to_string();
        if code.is_server_error() {
            tracing::error!(status, error = %message, "request failed");
        } else {
            tracing::warn!(status, error = %message, "request rejected");
        }

        let body = Failure { status: "error", message: &message };
        match serde_json::to_vec(&body) {
            Ok(bytes) => Response::builder().status(code).json(bytes),
            Err(_) => Response::status(code),
        }
    }
}

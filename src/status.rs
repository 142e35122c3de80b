//! HTTP status codes as a typed enum.
//!
//! Only the codes the catalog actually emits. Use [`Status`] anywhere a status
//! is accepted: `Response::status()`, `Response::builder().status()`, or
//! [`ApiError::status`](crate::ApiError::status).
//!
//! ```rust
//! use catalog::{Response, Status};
//!
//! Response::builder()
//!     .status(Status::Created)
//!     .json(br#"{"status":"success"}"#.to_vec());
//! ```

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                  // 200
    Created,             // 201

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,          // 400
    Unauthorized,        // 401
    NotFound,            // 404

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError, // 500
}

impl Status {
    pub fn is_server_error(self) -> bool {
        u16::from(self) >= 500
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::Created             => 201,
            Status::BadRequest          => 400,
            Status::Unauthorized        => 401,
            Status::NotFound            => 404,
            Status::InternalServerError => 500,
        }
    }
}

//! Request logging stage.

use crate::error::ApiError;
use crate::request::Request;
use crate::state::AppState;

/// Emits one `info` event per request and always forwards.
///
/// The subscriber's fmt layer stamps the event with the time, so the record
/// carries timestamp, method, and path.
pub fn log_request(req: &Request, _state: &AppState) -> Result<(), ApiError> {
    tracing::info!(method = %req.method(), path = %req.path(), "request");
    Ok(())
}

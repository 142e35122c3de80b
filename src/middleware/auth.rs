//! Shared-secret authentication stage.

use crate::error::ApiError;
use crate::request::Request;
use crate::state::AppState;

/// Rejects the request with 401 unless the configured header carries the
/// configured secret.
pub fn authenticate(req: &Request, state: &AppState) -> Result<(), ApiError> {
    match req.header(&state.auth.header) {
        Some(key) if key == state.auth.secret => Ok(()),
        Some(_) => {
            tracing::debug!(header = %state.auth.header, "api key mismatch");
            Err(ApiError::unauthorized("Unauthorized: invalid API key"))
        }
        None => Err(ApiError::unauthorized("Unauthorized: missing API key")),
    }
}

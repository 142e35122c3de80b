//! Product body validation stage.
//!
//! Checks presence and JSON type only. The handler still deserializes the
//! body into a typed payload afterwards, which rejects mistyped optional
//! fields.

use serde_json::Value;

use crate::error::ApiError;
use crate::request::Request;
use crate::state::AppState;

/// Requires `name` to be a non-empty string and `price` to be a number.
///
/// `name` is checked first; the first violation is the one reported.
pub fn validate_product(req: &Request, _state: &AppState) -> Result<(), ApiError> {
    let body: Value = req.json()?;

    match body.get("name") {
        Some(Value::String(name)) if !name.is_empty() => {}
        _ => return Err(ApiError::validation("Name is required and must be a string")),
    }

    match body.get("price") {
        Some(Value::Number(_)) => Ok(()),
        _ => Err(ApiError::validation("Price is required and must be a number")),
    }
}

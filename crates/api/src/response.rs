//! Shared response envelope types for API handlers.
//!
//! Reads answer with `{ "data": ... }`; writes add a human-readable
//! `message` next to the affected row.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "message": "..." }` envelope for create/update/delete.
///
/// `data` is always the row snapshot produced by the operation.
#[derive(Debug, Serialize)]
pub struct ActionResponse<T: Serialize> {
    pub data: T,
    pub message: &'static str,
}

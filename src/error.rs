//! Crate error types
//!
//! The relay distinguishes client input errors (rejected uploads) from
//! server-side I/O failures. A viewer disconnecting mid-stream is not an
//! error at all; stream producers treat transport closure as normal
//! session end.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Convenience alias for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;

/// Error type for relay operations
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Upload arrived with an empty body; nothing was stored
    #[error("empty upload payload")]
    EmptyPayload,

    /// Failed to bind the listener or serve connections
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            // Body text matches what upload devices already expect.
            RelayError::EmptyPayload => (StatusCode::BAD_REQUEST, "No data").into_response(),
            RelayError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

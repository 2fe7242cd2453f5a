use serde::Deserialize;
use thiserror::Error;

use crate::http::{HttpError, Response};

/// Failure of a single resource API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body of a 2xx response could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    /// A newer request superseded this one before it finished.
    #[error("request was superseded")]
    Superseded,
}

pub type ApiResult<T> = Result<T, ApiError>;

// Error bodies look like `{"message": "..."}` or `{"error": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Builds a `Status` error, preferring the server's own message.
    pub fn from_response(response: &Response) -> Self {
        let message = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.message.or(body.error))
            .or_else(|| {
                response
                    .text()
                    .ok()
                    .map(|text| text.trim().to_owned())
                    .filter(|text| !text.is_empty())
            })
            .unwrap_or_else(|| "request failed".to_owned());

        Self::Status {
            status: response.status,
            message,
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.message)
    }
}

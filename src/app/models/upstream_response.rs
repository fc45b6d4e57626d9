use reqwest::StatusCode;

use crate::app::errors::DefaultApiError;

use super::api_error::ApiError;

/// Outcome of a single round trip to an upstream vendor.
#[derive(Debug)]
pub enum UpstreamResponse<T> {
    Success(T),
    UpstreamError { status: StatusCode, body: String },
    TransportError(String),
}

impl<T> UpstreamResponse<T> {
    /// Upstream errors keep their status and body untouched, transport
    /// errors collapse into a 500 carrying the underlying message.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::UpstreamError { status, body } => Err(ApiError {
                code: status,
                message: body,
            }),
            Self::TransportError(message) => {
                Err(DefaultApiError::InternalServerErrorWithMessage(message).value())
            }
        }
    }
}

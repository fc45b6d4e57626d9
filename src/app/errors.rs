use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    InternalServerErrorWithMessage(String),
    MissingApiKey,
    TooManyRequests,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
            Self::InternalServerErrorWithMessage(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.to_string(),
            },
            Self::MissingApiKey => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Server configuration error: API key is missing".to_string(),
            },
            Self::TooManyRequests => ApiError {
                code: StatusCode::TOO_MANY_REQUESTS,
                message: "Too many requests. Please wait before trying again.".to_string(),
            },
        }
    }
}

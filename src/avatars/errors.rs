use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AvatarsApiError {
    PromptRequired,
    ImageUrlRequired,
}

impl AvatarsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PromptRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Prompt is required".to_string(),
            },
            Self::ImageUrlRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Image URL is required".to_string(),
            },
        }
    }
}

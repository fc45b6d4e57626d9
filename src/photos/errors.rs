use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PhotosApiError {
    NoImageSelected,
}

impl PhotosApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::NoImageSelected => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "No image selected".to_string(),
            },
        }
    }
}

use bytes::Bytes;
use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

/// Downloads `url` in full. Any non-success status is an error, nothing is
/// returned until the whole body has arrived.
pub async fn get_bytes(client: &reqwest::Client, url: &str) -> Result<Bytes, ApiError> {
    let res = match client.get(url).send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e, "get_bytes failed to reach url");
            return Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: ["Failed to fetch image: ", &e.to_string()].concat(),
            });
        }
    };

    if !res.status().is_success() {
        tracing::error!(status = %res.status(), "get_bytes received non-success status");
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Failed to fetch image".to_string(),
        });
    }

    match res.bytes().await {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            tracing::error!(%e, "get_bytes failed to read body");
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to get bytes from response.".to_string(),
            })
        }
    }
}

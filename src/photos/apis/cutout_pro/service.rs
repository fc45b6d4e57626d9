use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use tracing::Level;

use crate::app::models::{
    api_error::ApiError, upstream_config::UpstreamConfig, upstream_response::UpstreamResponse,
};

use super::config::{API_KEY_HEADER, CARTOON_SELFIE_PATH, FILE_FIELD_NAME, FILE_NAME};

/// Sends `image` to the cartoonization vendor. `cartoon_type` goes out
/// untouched as a query parameter.
pub async fn cartoon_selfie(
    image: Bytes,
    cartoon_type: &str,
    config: &UpstreamConfig,
    client: &reqwest::Client,
) -> Result<UpstreamResponse<Bytes>, ApiError> {
    let api_key = config.api_key()?;

    let form = Form::new().part(
        FILE_FIELD_NAME,
        Part::stream(image).file_name(FILE_NAME),
    );

    let result = client
        .post(config.endpoint(CARTOON_SELFIE_PATH))
        .query(&[("cartoonType", cartoon_type)])
        .header(API_KEY_HEADER, api_key)
        .multipart(form)
        .send()
        .await;

    let res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::event!(Level::ERROR, %e);
            return Ok(UpstreamResponse::TransportError(e.to_string()));
        }
    };

    let status = res.status();
    let bytes = match res.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::event!(Level::ERROR, %e);
            return Ok(UpstreamResponse::TransportError(e.to_string()));
        }
    };

    if !status.is_success() {
        let body = String::from_utf8_lossy(&bytes).into_owned();
        tracing::error!(%status, %body, "cutout.pro response error");
        return Ok(UpstreamResponse::UpstreamError { status, body });
    }

    tracing::debug!(len = bytes.len(), "cutout.pro response received");
    Ok(UpstreamResponse::Success(bytes))
}

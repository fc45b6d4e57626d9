use reqwest::header;
use serde_json::json;
use tracing::Level;

use crate::app::models::{
    api_error::ApiError, upstream_config::UpstreamConfig, upstream_response::UpstreamResponse,
};

use super::{
    config::{IMAGES_GENERATIONS_PATH, IMAGE_COUNT, IMAGE_SIZE},
    structs::openai_generate_images_response::OpenAiGenerateImagesResponse,
};

/// Asks the generation vendor for `IMAGE_COUNT` images of `prompt`.
///
/// The credential is checked before anything goes on the wire.
pub async fn generate_images(
    prompt: &str,
    config: &UpstreamConfig,
    client: &reqwest::Client,
) -> Result<UpstreamResponse<OpenAiGenerateImagesResponse>, ApiError> {
    let api_key = config.api_key()?;

    let result = client
        .post(config.endpoint(IMAGES_GENERATIONS_PATH))
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .bearer_auth(api_key)
        .body(
            json!({
                "prompt": prompt,
                "n": IMAGE_COUNT,
                "size": IMAGE_SIZE,
            })
            .to_string(),
        )
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
    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::event!(Level::ERROR, %e);
            return Ok(UpstreamResponse::TransportError(e.to_string()));
        }
    };

    if !status.is_success() {
        tracing::error!(%status, %text, "openai response error");
        return Ok(UpstreamResponse::UpstreamError { status, body: text });
    }

    match serde_json::from_str(&text) {
        Ok(openai_response) => Ok(UpstreamResponse::Success(openai_response)),
        Err(e) => {
            tracing::event!(Level::ERROR, %e, %text);
            Ok(UpstreamResponse::TransportError(e.to_string()))
        }
    }
}

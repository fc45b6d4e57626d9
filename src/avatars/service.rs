use bytes::Bytes;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::reqwest::get_bytes},
    AppState,
};

use super::{
    apis::openai,
    dtos::{download_avatar_dto::DownloadAvatarDto, generate_avatar_dto::GenerateAvatarDto},
    models::generation_result::GenerationResult,
    util::normalize::normalize_avatar,
};

pub async fn generate_avatar(
    dto: &GenerateAvatarDto,
    state: &AppState,
) -> Result<GenerationResult, ApiError> {
    let dto = dto.sanitized();
    tracing::info!(prompt = %dto.prompt, style = %dto.style, "generating avatar");

    let response =
        openai::service::generate_images(&dto.upstream_prompt(), &state.envy.openai(), &state.http)
            .await?;

    let result = GenerationResult::from(response.into_result()?);
    tracing::debug!(count = result.data.len(), "generated avatars");

    Ok(result)
}

pub async fn download_avatar(dto: &DownloadAvatarDto, state: &AppState) -> Result<Bytes, ApiError> {
    tracing::info!(url = %dto.image_url, "downloading avatar");

    let source = get_bytes(&state.http, &dto.image_url).await?;

    match tokio::task::spawn_blocking(move || normalize_avatar(&source)).await {
        Ok(result) => result.map(Bytes::from),
        Err(e) => {
            tracing::error!(%e, "normalize task failed");
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Instant,
};

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use crate::{
    app::{
        errors::DefaultApiError,
        models::{api_error::ApiError, json_from_request::JsonFromRequest},
    },
    AppState,
};

use super::{
    dtos::{download_avatar_dto::DownloadAvatarDto, generate_avatar_dto::GenerateAvatarDto},
    errors::AvatarsApiError,
    models::generation_result::GenerationResult,
    service,
};

pub async fn generate_avatar(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    JsonFromRequest(dto): JsonFromRequest<GenerateAvatarDto>,
) -> Result<Json<GenerationResult>, ApiError> {
    if dto.validate().is_err() {
        return Err(AvatarsApiError::PromptRequired.value());
    }

    let ip = connect_info
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if !state.throttle.try_acquire(ip, Instant::now()).await {
        tracing::warn!(%ip, "generate_avatar throttled");
        return Err(DefaultApiError::TooManyRequests.value());
    }

    match service::generate_avatar(&dto, &state).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => Err(e),
    }
}

pub async fn download_avatar(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<DownloadAvatarDto>,
) -> Result<Response, ApiError> {
    if dto.validate().is_err() {
        return Err(AvatarsApiError::ImageUrlRequired.value());
    }

    let avatar = service::download_avatar(&dto, &state).await?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("image/png")),
            (
                header::CONTENT_DISPOSITION,
                HeaderValue::from_static("attachment; filename=avatar.png"),
            ),
            (header::CONTENT_LENGTH, HeaderValue::from(avatar.len())),
        ],
        avatar,
    )
        .into_response())
}

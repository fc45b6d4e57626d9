use axum::extract::Multipart;
use bytes::Bytes;

use crate::{
    app::{
        models::api_error::ApiError,
        util::multipart::multipart::{get_files_properties, take_field},
    },
    AppState,
};

use super::{
    apis::cutout_pro::{self, config::FILE_FIELD_NAME},
    dtos::convert_photo_query_dto::ConvertPhotoQueryDto,
    errors::PhotosApiError,
};

pub async fn convert_photo(
    dto: &ConvertPhotoQueryDto,
    multipart: Multipart,
    state: &AppState,
) -> Result<Bytes, ApiError> {
    let files_properties = get_files_properties(multipart).await?;

    let Some(file) = take_field(files_properties, FILE_FIELD_NAME) else {
        return Err(PhotosApiError::NoImageSelected.value());
    };

    tracing::info!(
        cartoon_type = %dto.cartoon_type(),
        file_name = %file.file_name,
        mime_type = %file.mime_type,
        len = file.data.len(),
        "converting photo"
    );

    cutout_pro::service::cartoon_selfie(
        file.data,
        dto.cartoon_type(),
        &state.envy.cutout_pro(),
        &state.http,
    )
    .await?
    .into_result()
}

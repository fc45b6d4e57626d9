use axum::{
    extract::{multipart::MultipartRejection, Multipart, Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::{app::models::api_error::ApiError, AppState};

use super::{dtos::convert_photo_query_dto::ConvertPhotoQueryDto, errors::PhotosApiError, service};

pub async fn convert_photo(
    State(state): State<AppState>,
    Query(dto): Query<ConvertPhotoQueryDto>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(e) => {
            tracing::warn!(%e, "convert_photo without a multipart body");
            return Err(PhotosApiError::NoImageSelected.value());
        }
    };

    match service::convert_photo(&dto, multipart, &state).await {
        Ok(png) => Ok(([(header::CONTENT_TYPE, mime::IMAGE_PNG.as_ref())], png).into_response()),
        Err(e) => Err(e),
    }
}

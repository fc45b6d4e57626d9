use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde_json::json;

use crate::{
    avatars::{dtos::generate_avatar_dto::GenerateAvatarDto, models::generation_result::GenerationResult},
    photos::apis::cutout_pro::config::FILE_FIELD_NAME,
};

use super::{errors::ClientError, models::photo_file::PhotoFile};

/// HTTP client for the avatar backend.
#[derive(Debug, Clone)]
pub struct AvatarClient {
    base_url: String,
    http: reqwest::Client,
}

impl AvatarClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn generate_avatar(
        &self,
        dto: &GenerateAvatarDto,
    ) -> Result<GenerationResult, ClientError> {
        let res = self
            .http
            .post(self.url("/generate-avatar"))
            .json(dto)
            .send()
            .await?;

        Ok(error_for_status(res).await?.json().await?)
    }

    pub async fn convert_photo(
        &self,
        photo: &PhotoFile,
        cartoon_type: &str,
    ) -> Result<Bytes, ClientError> {
        let mut part = Part::stream(photo.data.clone()).file_name(photo.file_name.to_string());
        part = part.mime_str(&photo.mime_type)?;

        let res = self
            .http
            .post(self.url("/convert-photo"))
            .query(&[("cartoonType", cartoon_type)])
            .multipart(Form::new().part(FILE_FIELD_NAME, part))
            .send()
            .await?;

        Ok(error_for_status(res).await?.bytes().await?)
    }

    pub async fn download_avatar(&self, image_url: &str) -> Result<Bytes, ClientError> {
        let res = self
            .http
            .post(self.url("/download-avatar"))
            .json(&json!({ "imageUrl": image_url }))
            .send()
            .await?;

        Ok(error_for_status(res).await?.bytes().await?)
    }

    fn url(&self, path: &str) -> String {
        [&self.base_url, path].concat()
    }
}

async fn error_for_status(res: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

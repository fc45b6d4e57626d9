use axum::extract::Multipart;

use crate::app::models::api_error::ApiError;

use super::models::file_properties::FileProperties;

pub async fn get_files_properties(mut multipart: Multipart) -> Result<Vec<FileProperties>, ApiError> {
    let mut vec = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(%e, "failed to read multipart field");
                return Err(ApiError {
                    code: e.status(),
                    message: e.body_text(),
                });
            }
        };

        let field_name = field.name().unwrap_or("file").to_string();
        let file_name = field.file_name().unwrap_or("file-name").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(%e, field_name = %field_name, "failed to read multipart field body");
                return Err(ApiError {
                    code: e.status(),
                    message: e.body_text(),
                });
            }
        };

        vec.push(FileProperties {
            field_name,
            file_name,
            mime_type,
            data,
        });
    }

    Ok(vec)
}

/// First non-empty part sent under `field_name`.
pub fn take_field(files: Vec<FileProperties>, field_name: &str) -> Option<FileProperties> {
    files
        .into_iter()
        .find(|file| file.field_name == field_name && !file.data.is_empty())
}

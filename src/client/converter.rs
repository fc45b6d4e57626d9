use bytes::Bytes;

use crate::photos::enums::cartoon_type::CartoonType;

use super::{api::AvatarClient, errors::ClientError, models::photo_file::PhotoFile};

pub const INVALID_FORMAT_MESSAGE: &str = "Please select a valid image format.";
pub const NO_IMAGE_MESSAGE: &str = "No image detected.";
pub const UPLOAD_FAILED_MESSAGE: &str = "Error uploading photo";

/// Photo-to-avatar screen.
#[derive(Debug, Clone, Default)]
pub struct ConverterScreen {
    selected_file: Option<PhotoFile>,
    avatar: Option<Bytes>,
    error: Option<String>,
    loading: bool,
    selected_type: CartoonType,
}

impl ConverterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cartoon_types() -> &'static [CartoonType] {
        &CartoonType::ALL
    }

    pub fn selected_file(&self) -> Option<&PhotoFile> {
        self.selected_file.as_ref()
    }

    pub fn preview(&self) -> Option<&Bytes> {
        self.selected_file.as_ref().map(|file| &file.data)
    }

    pub fn avatar(&self) -> Option<&Bytes> {
        self.avatar.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_convert(&self) -> bool {
        !self.loading
    }

    pub fn selected_type(&self) -> CartoonType {
        self.selected_type
    }

    pub fn select_type(&mut self, cartoon_type: CartoonType) {
        self.selected_type = cartoon_type;
    }

    /// Non-image files are refused and leave the current selection alone.
    pub fn select_file(&mut self, file: PhotoFile) -> bool {
        if !file.is_image() {
            self.error = Some(INVALID_FORMAT_MESSAGE.to_string());
            return false;
        }

        self.selected_file = Some(file);
        self.avatar = None;
        self.error = None;
        true
    }

    /// Enters the loading state and hands back what to upload, or `None`
    /// when a conversion is already running or nothing is selected.
    pub fn begin(&mut self) -> Option<(PhotoFile, &'static str)> {
        if !self.can_convert() {
            return None;
        }

        let Some(file) = self.selected_file.clone() else {
            self.error = Some(NO_IMAGE_MESSAGE.to_string());
            return None;
        };

        self.loading = true;
        self.error = None;
        Some((file, self.selected_type.value()))
    }

    pub fn finish(&mut self, result: Result<Bytes, ClientError>) {
        self.loading = false;

        match result {
            Ok(avatar) => self.avatar = Some(avatar),
            Err(e) => {
                tracing::warn!(%e, "convert_photo failed");
                self.error = Some(UPLOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub async fn convert(&mut self, client: &AvatarClient) {
        let Some((file, cartoon_type)) = self.begin() else {
            return;
        };

        let result = client.convert_photo(&file, cartoon_type).await;
        self.finish(result);
    }
}

use serde::Deserialize;

use crate::photos::enums::cartoon_type::DEFAULT_CARTOON_TYPE;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertPhotoQueryDto {
    pub cartoon_type: Option<String>,
}

impl ConvertPhotoQueryDto {
    pub fn cartoon_type(&self) -> &str {
        match self.cartoon_type.as_deref() {
            Some(cartoon_type) if !cartoon_type.is_empty() => cartoon_type,
            _ => DEFAULT_CARTOON_TYPE,
        }
    }
}

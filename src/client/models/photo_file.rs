use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl PhotoFile {
    pub fn is_image(&self) -> bool {
        self.mime_type
            .parse::<mime::Mime>()
            .map(|mime_type| mime_type.type_() == mime::IMAGE)
            .unwrap_or(false)
    }
}

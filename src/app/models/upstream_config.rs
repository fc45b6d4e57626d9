use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

/// Where a vendor lives and the credential used to call it.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub api_url: String,
    pub api_key: Option<String>,
}

impl UpstreamConfig {
    pub fn new(api_url: &str, api_key: Option<&str>) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
        }
    }

    pub fn api_key(&self) -> Result<&str, ApiError> {
        match &self.api_key {
            Some(key) => Ok(key),
            None => Err(DefaultApiError::MissingApiKey.value()),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        [&self.api_url, path].concat()
    }
}

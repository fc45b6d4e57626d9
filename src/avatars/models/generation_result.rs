use serde::{Deserialize, Serialize};

use crate::avatars::apis::openai::structs::openai_generate_images_response::OpenAiGenerateImagesResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub data: Vec<GeneratedImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
}

impl From<OpenAiGenerateImagesResponse> for GenerationResult {
    fn from(response: OpenAiGenerateImagesResponse) -> Self {
        Self {
            data: response
                .data
                .into_iter()
                .map(|image| GeneratedImage { url: image.url })
                .collect(),
        }
    }
}

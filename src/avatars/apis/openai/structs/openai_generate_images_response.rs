use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OpenAiGenerateImagesResponse {
    #[serde(rename(deserialize = "created"))]
    pub created: Option<u64>,
    #[serde(rename(deserialize = "data"))]
    pub data: Vec<OpenAiImage>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiImage {
    #[serde(rename(deserialize = "url"))]
    pub url: String,
}

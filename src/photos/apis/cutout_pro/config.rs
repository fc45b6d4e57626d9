pub const CARTOON_SELFIE_PATH: &str = "/cartoonSelfie";
pub const API_KEY_HEADER: &str = "APIKEY";
pub const FILE_FIELD_NAME: &str = "file";
pub const FILE_NAME: &str = "image.jpg";

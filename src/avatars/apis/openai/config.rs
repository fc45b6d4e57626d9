pub const IMAGES_GENERATIONS_PATH: &str = "/images/generations";
pub const IMAGE_COUNT: u8 = 4;
pub const IMAGE_SIZE: &str = "512x512";

pub mod download_avatar_dto;
pub mod generate_avatar_dto;

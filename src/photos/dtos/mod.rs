pub mod convert_photo_query_dto;

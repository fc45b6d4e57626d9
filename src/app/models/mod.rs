pub mod api_error;
pub mod json_from_request;
pub mod upstream_config;
pub mod upstream_response;

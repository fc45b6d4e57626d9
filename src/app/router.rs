use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
};

use crate::{avatars, photos, AppState};

use super::controller;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    let static_dir = Path::new(&state.envy.static_dir);
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let upload_limit = state.envy.upload_limit_bytes;

    Router::new()
        .route("/health", get(controller::get_health))
        // avatars
        .route("/generate-avatar", post(avatars::controller::generate_avatar))
        .route("/download-avatar", post(avatars::controller::download_avatar))
        // photos
        .route("/convert-photo", post(photos::controller::convert_photo))
        // single page app
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(upload_limit))
                .layer(DefaultBodyLimit::disable())
                .layer(cors),
        )
        .with_state(state)
}

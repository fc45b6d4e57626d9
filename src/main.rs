use std::{env, net::SocketAddr};

use avatar_api::{
    app::{
        self,
        envy::{Envy, DEFAULT_PORT},
    },
    AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    if envy.openai().api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set, /generate-avatar will fail");
    }
    if envy.cutout_pro().api_key.is_none() {
        tracing::warn!("CUTOUT_PRO_API_KEY is not set, /convert-photo will fail");
    }

    // properties
    let port = envy.port.unwrap_or(DEFAULT_PORT);
    let state = AppState::new(envy);

    if state.throttle.is_enabled() {
        tracing::info!("server-side generation cooldown enabled");
    }

    let app = app::router::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .unwrap();
}

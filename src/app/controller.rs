use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Liveness plus which vendor credentials are present. Never echoes the keys.
pub async fn get_health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "online",
        "app_env": state.envy.app_env,
        "openai": state.envy.openai().api_key.is_some(),
        "cutout_pro": state.envy.cutout_pro().api_key.is_some(),
    }))
}

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::web::AppState;

/// Address clients should use to reach this server (e.g. a tunnel URL).
pub async fn public_url_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "url": state.public_url }))
}

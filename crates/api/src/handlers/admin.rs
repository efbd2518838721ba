use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::{error::ApiResult, routes::AppState};

pub const RESET_MESSAGE: &str = "Data store has been reset to initial state";

/// 重置数据
pub async fn reset_store(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    info!("收到重置数据请求");
    state.service.reset().await?;
    Ok(Json(json!({ "message": RESET_MESSAGE })))
}

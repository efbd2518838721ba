use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use evv_domain::{Schedule, VisitRequest};

use crate::{error::ApiResult, routes::AppState};

/// 开始探访
pub async fn start_visit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<VisitRequest>, JsonRejection>,
) -> ApiResult<Json<Schedule>> {
    let Json(request) = payload?;
    Ok(Json(state.service.start_visit(&id, request).await?))
}

/// 结束探访
pub async fn end_visit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<VisitRequest>, JsonRejection>,
) -> ApiResult<Json<Schedule>> {
    let Json(request) = payload?;
    Ok(Json(state.service.end_visit(&id, request).await?))
}

/// 签到，不携带位置
pub async fn clock_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Schedule>> {
    Ok(Json(state.service.clock_in(&id).await?))
}

pub async fn cancel_clock_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Schedule>> {
    Ok(Json(state.service.cancel_clock_in(&id).await?))
}

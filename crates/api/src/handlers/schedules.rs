use axum::{
    extract::{Path, State},
    Json,
};
use evv_domain::{Schedule, ScheduleEvent};

use crate::{error::ApiResult, routes::AppState};

/// 全部排班，按班次开始时间排序
pub async fn list_schedules(State(state): State<AppState>) -> ApiResult<Json<Vec<Schedule>>> {
    Ok(Json(state.service.list_schedules().await?))
}

pub async fn list_today_schedules(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Schedule>>> {
    Ok(Json(state.service.list_today().await?))
}

pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Schedule>> {
    Ok(Json(state.service.get_schedule(&id).await?))
}

pub async fn get_schedule_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<ScheduleEvent>>> {
    Ok(Json(state.service.schedule_events(&id).await?))
}

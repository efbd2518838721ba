use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use evv_domain::{AddTaskRequest, Schedule, Task, UpdateTaskRequest};

use crate::{
    error::{ApiError, ApiResult},
    routes::AppState,
};

/// 追加任务，返回更新后的排班
pub async fn add_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AddTaskRequest>, JsonRejection>,
) -> ApiResult<Json<Schedule>> {
    let Json(request) = payload?;
    Ok(Json(state.service.add_task(&id, request).await?))
}

/// 更新任务完成情况，返回更新后的任务
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let task_id = parse_task_id(&task_id)?;
    let Json(request) = payload?;
    Ok(Json(state.service.update_task(task_id, request).await?))
}

fn parse_task_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::bad_request("Invalid task ID"))
}

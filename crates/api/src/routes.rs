use axum::{
    routing::{get, post, put},
    Router,
};
use evv_application::ScheduleService;
use std::sync::Arc;

use crate::handlers::{
    admin::reset_store,
    health::health_check,
    not_found,
    root::root_handler,
    schedules::{get_schedule, get_schedule_events, list_schedules, list_today_schedules},
    tasks::{add_task, update_task},
    visits::{cancel_clock_in, clock_in, end_visit, start_visit},
};

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ScheduleService>,
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        // 管理
        .route("/api/reset", post(reset_store))
        // 排班
        .route("/api/schedules", get(list_schedules))
        .route("/api/schedules/today", get(list_today_schedules))
        .route("/api/schedules/{id}", get(get_schedule))
        .route("/api/schedules/{id}/events", get(get_schedule_events))
        // 探访
        .route("/api/schedules/{id}/start", post(start_visit))
        .route("/api/schedules/{id}/end", post(end_visit))
        .route("/api/schedules/{id}/clock-in", get(clock_in))
        .route("/api/schedules/{id}/cancel-clock-in", post(cancel_clock_in))
        // 任务
        .route("/api/schedules/{id}/tasks", post(add_task))
        .route("/api/tasks/{task_id}/update", put(update_task))
        .fallback(not_found)
        .with_state(state)
}

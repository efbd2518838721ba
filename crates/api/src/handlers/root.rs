use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const RUNNING_MESSAGE: &str = "EVV Logger Backend is running!";

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// 根路径处理器 - 返回服务状态和端点列表
pub async fn root_handler() -> Json<ServiceInfo> {
    let endpoints = [
        ("POST /api/reset", "重置为初始数据"),
        ("GET /api/schedules", "排班列表"),
        ("GET /api/schedules/today", "今日排班"),
        ("GET /api/schedules/{id}", "排班详情"),
        ("GET /api/schedules/{id}/events", "排班事件记录"),
        ("POST /api/schedules/{id}/start", "开始探访"),
        ("POST /api/schedules/{id}/end", "结束探访"),
        ("GET /api/schedules/{id}/clock-in", "签到"),
        ("POST /api/schedules/{id}/cancel-clock-in", "取消签到"),
        ("POST /api/schedules/{id}/tasks", "追加任务"),
        ("PUT /api/tasks/{taskId}/update", "更新任务"),
        ("GET /health", "健康检查"),
    ]
    .into_iter()
    .map(|(route, description)| (route.to_string(), description.to_string()))
    .collect();

    Json(ServiceInfo {
        name: "evv-tracker".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: RUNNING_MESSAGE.to_string(),
        endpoints,
        timestamp: chrono::Utc::now(),
    })
}

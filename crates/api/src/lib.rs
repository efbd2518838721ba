//! # EVV API
//!
//! 电子探访核验服务的 REST 接口层，基于 Axum 构建。
//!
//! ## API 端点
//!
//! ### 管理
//! - `POST /api/reset` - 重置为初始数据
//!
//! ### 排班
//! - `GET /api/schedules` - 按班次开始时间排序的排班列表
//! - `GET /api/schedules/today` - 今日排班
//! - `GET /api/schedules/{id}` - 排班详情
//! - `GET /api/schedules/{id}/events` - 排班事件记录
//!
//! ### 探访
//! - `POST /api/schedules/{id}/start` - 开始探访
//! - `POST /api/schedules/{id}/end` - 结束探访
//! - `GET /api/schedules/{id}/clock-in` - 签到
//! - `POST /api/schedules/{id}/cancel-clock-in` - 取消签到
//!
//! ### 任务
//! - `POST /api/schedules/{id}/tasks` - 追加任务
//! - `PUT /api/tasks/{taskId}/update` - 更新任务完成情况
//!
//! ## 错误响应
//!
//! ```json
//! {
//!   "error": {
//!     "message": "排班未找到: 999",
//!     "type": "SCHEDULE_NOT_FOUND",
//!     "code": 404,
//!     "suggestions": ["..."],
//!     "timestamp": "2025-01-15T09:00:00Z"
//!   }
//! }
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

use axum::Router;
use evv_application::ScheduleService;
use evv_config::ApiConfig;
use std::sync::Arc;
use tower::ServiceBuilder;

use middleware::{cors_layer, request_logging, trace_layer};
use routes::{create_routes, AppState};

/// 创建完整的API应用
pub fn create_app(service: Arc<ScheduleService>, api_config: &ApiConfig) -> Router {
    let router = create_routes(AppState { service }).layer(
        ServiceBuilder::new()
            .layer(trace_layer())
            .layer(axum::middleware::from_fn(request_logging)),
    );

    if api_config.cors_enabled {
        router.layer(cors_layer(api_config))
    } else {
        router
    }
}

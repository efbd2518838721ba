use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use evv_domain::EvvError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Evv(#[from] EvvError),

    #[error("请求参数错误: {0}")]
    BadRequest(String),

    #[error("未找到资源")]
    NotFound,
}

impl ApiError {
    pub fn bad_request<S: Into<String>>(msg: S) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, error_type, suggestions) = match &self {
            ApiError::Evv(EvvError::ScheduleNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("排班 ID {} 不存在", id),
                "SCHEDULE_NOT_FOUND",
                vec![
                    "请检查排班ID是否正确".to_string(),
                    "使用 GET /api/schedules 查看所有排班".to_string(),
                ],
            ),
            ApiError::Evv(EvvError::TaskNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("任务 ID {} 不在任何排班中", id),
                "TASK_NOT_FOUND",
                vec!["请检查任务ID是否正确".to_string()],
            ),
            ApiError::Evv(EvvError::AlreadyClockedIn { id }) => (
                StatusCode::CONFLICT,
                format!("排班 {} 已签到", id),
                "ALREADY_CLOCKED_IN",
                vec![format!(
                    "如需重新签到，请先调用 POST /api/schedules/{}/cancel-clock-in",
                    id
                )],
            ),
            ApiError::Evv(EvvError::InvalidInput(msg)) | ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                format!("请求参数错误: {}", msg),
                "BAD_REQUEST",
                vec![
                    "请检查请求格式和参数".to_string(),
                    "确保Content-Type正确设置".to_string(),
                ],
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                "请求的资源不存在".to_string(),
                "NOT_FOUND",
                vec![
                    "请检查请求URL是否正确".to_string(),
                    "访问 GET / 查看可用的API端点".to_string(),
                ],
            ),
            ApiError::Evv(EvvError::Internal(msg)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "系统内部错误".to_string(),
                "INTERNAL_ERROR",
                vec![
                    "系统遇到内部错误，请稍后重试".to_string(),
                    format!("错误详情: {}", msg),
                ],
            ),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type,
                "code": status.as_u16(),
                "suggestions": suggestions,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

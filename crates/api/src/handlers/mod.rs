pub mod admin;
pub mod health;
pub mod root;
pub mod schedules;
pub mod tasks;
pub mod visits;

use crate::error::ApiError;

/// 未匹配任何路由
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

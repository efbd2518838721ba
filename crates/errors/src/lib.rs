use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvvError {
    #[error("排班未找到: {id}")]
    ScheduleNotFound { id: String },
    #[error("任务未找到: {id}")]
    TaskNotFound { id: i64 },
    #[error("排班 {id} 已签到")]
    AlreadyClockedIn { id: String },
    #[error("无效的输入: {0}")]
    InvalidInput(String),
    #[error("内部错误: {0}")]
    Internal(String),
}

pub type EvvResult<T> = Result<T, EvvError>;

/// 面向调用方的错误分类
///
/// 传输层据此选择状态码，客户端据此区分 NotFound / BadRequest / Conflict。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    NotFound,
    BadRequest,
    Conflict,
    Internal,
}

impl EvvError {
    pub fn schedule_not_found<S: Into<String>>(id: S) -> Self {
        Self::ScheduleNotFound { id: id.into() }
    }
    pub fn task_not_found(id: i64) -> Self {
        Self::TaskNotFound { id }
    }
    pub fn already_clocked_in<S: Into<String>>(id: S) -> Self {
        Self::AlreadyClockedIn { id: id.into() }
    }
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvvError::ScheduleNotFound { .. } | EvvError::TaskNotFound { .. } => {
                ErrorCategory::NotFound
            }
            EvvError::AlreadyClockedIn { .. } => ErrorCategory::Conflict,
            EvvError::InvalidInput(_) => ErrorCategory::BadRequest,
            EvvError::Internal(_) => ErrorCategory::Internal,
        }
    }
    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

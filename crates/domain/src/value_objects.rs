use serde::{Deserialize, Serialize};

use crate::entities::Geolocation;

/// 开始/结束探访的请求体
///
/// `timestamp` 由客户端附带但不被采用，服务端时间为准。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub location: Geolocation,
}

impl VisitRequest {
    pub fn at(location: Geolocation) -> Self {
        Self {
            timestamp: None,
            location,
        }
    }
}

/// 更新任务完成情况
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_completed_reason: Option<String>,
}

impl UpdateTaskRequest {
    pub fn completed() -> Self {
        Self {
            completed: true,
            not_completed_reason: None,
        }
    }

    pub fn not_completed(reason: impl Into<String>) -> Self {
        Self {
            completed: false,
            not_completed_reason: Some(reason.into()),
        }
    }
}

/// 向排班追加任务
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTaskRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

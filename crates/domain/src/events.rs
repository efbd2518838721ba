//! 领域事件
//!
//! 每次成功的存储变更都会产生一条事件，供审计查询使用。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Geolocation, ScheduleStatus};

/// 重置事件使用的聚合ID
pub const STORE_AGGREGATE_ID: &str = "store";

/// 领域事件基础trait
pub trait DomainEvent: Send + Sync {
    fn event_id(&self) -> Uuid;
    fn event_type(&self) -> &str;
    fn occurred_at(&self) -> DateTime<Utc>;
    fn aggregate_id(&self) -> String;
}

/// 排班相关事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScheduleEvent {
    VisitStarted {
        id: Uuid,
        schedule_id: String,
        location: Geolocation,
        occurred_at: DateTime<Utc>,
    },
    VisitEnded {
        id: Uuid,
        schedule_id: String,
        location: Geolocation,
        /// 结束前的状态，非 `in_progress` 时说明存在未签到即签退
        previous_status: ScheduleStatus,
        occurred_at: DateTime<Utc>,
    },
    ClockedIn {
        id: Uuid,
        schedule_id: String,
        occurred_at: DateTime<Utc>,
    },
    ClockInCancelled {
        id: Uuid,
        schedule_id: String,
        previous_status: ScheduleStatus,
        occurred_at: DateTime<Utc>,
    },
    TaskUpdated {
        id: Uuid,
        schedule_id: String,
        task_id: i64,
        completed: bool,
        occurred_at: DateTime<Utc>,
    },
    TaskAdded {
        id: Uuid,
        schedule_id: String,
        task_id: i64,
        task_name: String,
        occurred_at: DateTime<Utc>,
    },
    StoreReset {
        id: Uuid,
        schedule_count: usize,
        occurred_at: DateTime<Utc>,
    },
}

impl ScheduleEvent {
    pub fn visit_started(
        schedule_id: impl Into<String>,
        location: Geolocation,
        at: DateTime<Utc>,
    ) -> Self {
        ScheduleEvent::VisitStarted {
            id: Uuid::new_v4(),
            schedule_id: schedule_id.into(),
            location,
            occurred_at: at,
        }
    }

    pub fn visit_ended(
        schedule_id: impl Into<String>,
        location: Geolocation,
        previous_status: ScheduleStatus,
        at: DateTime<Utc>,
    ) -> Self {
        ScheduleEvent::VisitEnded {
            id: Uuid::new_v4(),
            schedule_id: schedule_id.into(),
            location,
            previous_status,
            occurred_at: at,
        }
    }

    pub fn clocked_in(schedule_id: impl Into<String>, at: DateTime<Utc>) -> Self {
        ScheduleEvent::ClockedIn {
            id: Uuid::new_v4(),
            schedule_id: schedule_id.into(),
            occurred_at: at,
        }
    }

    pub fn clock_in_cancelled(
        schedule_id: impl Into<String>,
        previous_status: ScheduleStatus,
        at: DateTime<Utc>,
    ) -> Self {
        ScheduleEvent::ClockInCancelled {
            id: Uuid::new_v4(),
            schedule_id: schedule_id.into(),
            previous_status,
            occurred_at: at,
        }
    }

    pub fn task_updated(
        schedule_id: impl Into<String>,
        task_id: i64,
        completed: bool,
        at: DateTime<Utc>,
    ) -> Self {
        ScheduleEvent::TaskUpdated {
            id: Uuid::new_v4(),
            schedule_id: schedule_id.into(),
            task_id,
            completed,
            occurred_at: at,
        }
    }

    pub fn task_added(
        schedule_id: impl Into<String>,
        task_id: i64,
        task_name: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        ScheduleEvent::TaskAdded {
            id: Uuid::new_v4(),
            schedule_id: schedule_id.into(),
            task_id,
            task_name: task_name.into(),
            occurred_at: at,
        }
    }

    pub fn store_reset(schedule_count: usize, at: DateTime<Utc>) -> Self {
        ScheduleEvent::StoreReset {
            id: Uuid::new_v4(),
            schedule_count,
            occurred_at: at,
        }
    }

    /// 变更前的排班状态，仅签退与取消签到事件携带
    pub fn previous_status(&self) -> Option<ScheduleStatus> {
        match self {
            ScheduleEvent::VisitEnded {
                previous_status, ..
            }
            | ScheduleEvent::ClockInCancelled {
                previous_status, ..
            } => Some(*previous_status),
            _ => None,
        }
    }
}

impl DomainEvent for ScheduleEvent {
    fn event_id(&self) -> Uuid {
        match self {
            ScheduleEvent::VisitStarted { id, .. }
            | ScheduleEvent::VisitEnded { id, .. }
            | ScheduleEvent::ClockedIn { id, .. }
            | ScheduleEvent::ClockInCancelled { id, .. }
            | ScheduleEvent::TaskUpdated { id, .. }
            | ScheduleEvent::TaskAdded { id, .. }
            | ScheduleEvent::StoreReset { id, .. } => *id,
        }
    }

    fn event_type(&self) -> &str {
        match self {
            ScheduleEvent::VisitStarted { .. } => "VisitStarted",
            ScheduleEvent::VisitEnded { .. } => "VisitEnded",
            ScheduleEvent::ClockedIn { .. } => "ClockedIn",
            ScheduleEvent::ClockInCancelled { .. } => "ClockInCancelled",
            ScheduleEvent::TaskUpdated { .. } => "TaskUpdated",
            ScheduleEvent::TaskAdded { .. } => "TaskAdded",
            ScheduleEvent::StoreReset { .. } => "StoreReset",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ScheduleEvent::VisitStarted { occurred_at, .. }
            | ScheduleEvent::VisitEnded { occurred_at, .. }
            | ScheduleEvent::ClockedIn { occurred_at, .. }
            | ScheduleEvent::ClockInCancelled { occurred_at, .. }
            | ScheduleEvent::TaskUpdated { occurred_at, .. }
            | ScheduleEvent::TaskAdded { occurred_at, .. }
            | ScheduleEvent::StoreReset { occurred_at, .. } => *occurred_at,
        }
    }

    fn aggregate_id(&self) -> String {
        match self {
            ScheduleEvent::VisitStarted { schedule_id, .. }
            | ScheduleEvent::VisitEnded { schedule_id, .. }
            | ScheduleEvent::ClockedIn { schedule_id, .. }
            | ScheduleEvent::ClockInCancelled { schedule_id, .. }
            | ScheduleEvent::TaskUpdated { schedule_id, .. }
            | ScheduleEvent::TaskAdded { schedule_id, .. } => schedule_id.clone(),
            ScheduleEvent::StoreReset { .. } => STORE_AGGREGATE_ID.to_string(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 地理坐标
///
/// 仅表示一对经纬度，不做取值范围校验。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl Geolocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// 签到接口不携带位置时写入的占位坐标 `{0, 0}`
    pub fn placeholder() -> Self {
        Self::default()
    }
}

/// 探访任务
///
/// `id` 只在所属排班的任务列表内唯一。`not_completed_reason` 仅在
/// `completed == false` 时有意义，为空时不参与序列化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub not_completed_reason: String,
}

impl Task {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            completed: false,
            not_completed_reason: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientContact {
    pub email: String,
    pub phone: String,
}

/// 服务地点，排班创建后不再变化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub coordinates: Geolocation,
}

/// 排班状态
///
/// 序列化为 `scheduled` / `in_progress` / `completed` / `missed` / `cancelled`。
/// `missed` 与 `cancelled` 只会出现在初始数据中，没有操作会进入这两个状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Scheduled,
    InProgress,
    Completed,
    Missed,
    Cancelled,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "scheduled",
            ScheduleStatus::InProgress => "in_progress",
            ScheduleStatus::Completed => "completed",
            ScheduleStatus::Missed => "missed",
            ScheduleStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 排班（聚合根）
///
/// 一次计划中的护理探访，包含任务列表与签到/签退记录。
///
/// # 字段说明
///
/// - `shift_date`: 日历日期字符串，格式 `YYYY-MM-DD`
/// - `shift_time`: 形如 `"09:00 - 10:00"` 的时间段
/// - `am_or_pm`: 作用于时间段起点的 `AM` / `PM` 标记，仅用于排序
/// - `clock_in_*` / `clock_out_*`: 签到、签退发生前为空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub client_name: String,
    pub service_name: String,
    pub shift_date: String,
    pub shift_time: String,
    pub am_or_pm: String,
    pub status: ScheduleStatus,
    pub tasks: Vec<Task>,
    pub client_contact: ClientContact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_in_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_in_location: Option<Geolocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out_location: Option<Geolocation>,
    pub location: Location,
}

impl Schedule {
    /// 是否处于已签到状态
    pub fn is_clocked_in(&self) -> bool {
        self.clock_in_time.is_some()
    }

    /// 按任务ID查找本排班内第一个匹配的任务
    pub fn find_task(&self, task_id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn find_task_mut(&mut self, task_id: i64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        Schedule {
            id: "1".to_string(),
            client_name: "Melisa Adam".to_string(),
            service_name: "Casa Grande Apartment".to_string(),
            shift_date: "2025-01-15".to_string(),
            shift_time: "09:00 - 10:00".to_string(),
            am_or_pm: "AM".to_string(),
            status: ScheduleStatus::Scheduled,
            tasks: vec![Task::new(1, "Give medication", "Morning pills")],
            client_contact: ClientContact {
                email: "melisa@example.com".to_string(),
                phone: "+44 1232 212 3233".to_string(),
            },
            service_notes: None,
            clock_in_time: None,
            clock_out_time: None,
            clock_in_location: None,
            clock_out_location: None,
            location: Location {
                address: "123 Main St".to_string(),
                coordinates: Geolocation::new(40.712776, -74.005974),
            },
        }
    }

    #[test]
    fn test_schedule_serializes_camel_case_and_skips_absent_fields() {
        let json = serde_json::to_value(sample_schedule()).unwrap();

        assert_eq!(json["clientName"], "Melisa Adam");
        assert_eq!(json["amOrPm"], "AM");
        assert_eq!(json["status"], "scheduled");
        assert!(json.get("clockInTime").is_none());
        assert!(json.get("clockInLocation").is_none());
        assert!(json.get("serviceNotes").is_none());
        assert!(json["tasks"][0].get("notCompletedReason").is_none());
        assert_eq!(json["tasks"][0]["completed"], false);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ScheduleStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let status: ScheduleStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, ScheduleStatus::Cancelled);
        assert_eq!(status.to_string(), "cancelled");
    }

    #[test]
    fn test_find_task_returns_first_match() {
        let mut schedule = sample_schedule();
        schedule.tasks.push(Task::new(1, "Duplicate", "Same id"));

        assert_eq!(schedule.find_task(1).unwrap().name, "Give medication");
        assert!(schedule.find_task(9).is_none());
    }
}

//! # 排班生命周期
//!
//! 排班状态机的全部迁移都定义在这里，调用方负责在存储的互斥区内执行。
//!
//! ```text
//! scheduled   --start_visit-------> in_progress
//! scheduled   --clock_in----------> in_progress
//! in_progress --end_visit---------> completed
//! in_progress --cancel_clock_in---> scheduled
//! ```
//!
//! `start_visit`、`end_visit` 与 `cancel_clock_in` 不检查当前状态，
//! 只有 `clock_in` 带前置条件（当前未签到）。

use chrono::{DateTime, Utc};
use evv_errors::{EvvError, EvvResult};

use crate::entities::{Geolocation, Schedule, ScheduleStatus, Task};

impl Schedule {
    /// 开始探访：无条件覆盖签到时间与位置
    pub fn start_visit(&mut self, location: Geolocation, now: DateTime<Utc>) {
        self.status = ScheduleStatus::InProgress;
        self.clock_in_time = Some(now);
        self.clock_in_location = Some(location);
    }

    /// 结束探访：无条件写入签退时间与位置，签到信息保持不变
    pub fn end_visit(&mut self, location: Geolocation, now: DateTime<Utc>) {
        self.status = ScheduleStatus::Completed;
        self.clock_out_time = Some(now);
        self.clock_out_location = Some(location);
    }

    /// 签到：已签到时返回冲突错误，位置写入占位坐标
    pub fn clock_in(&mut self, now: DateTime<Utc>) -> EvvResult<()> {
        if self.is_clocked_in() {
            return Err(EvvError::already_clocked_in(self.id.clone()));
        }

        self.clock_in_time = Some(now);
        self.clock_in_location = Some(Geolocation::placeholder());
        self.status = ScheduleStatus::InProgress;
        Ok(())
    }

    /// 取消签到：清空签到时间与位置并回到 `scheduled`
    pub fn cancel_clock_in(&mut self) {
        self.clock_in_time = None;
        self.clock_in_location = None;
        self.status = ScheduleStatus::Scheduled;
    }

    /// 追加任务，ID 取 `当前任务数 + 1`
    pub fn add_task(&mut self, name: impl Into<String>, description: impl Into<String>) -> &Task {
        let id = self.next_task_id();
        self.tasks.push(Task::new(id, name, description));
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn next_task_id(&self) -> i64 {
        self.tasks.len() as i64 + 1
    }
}

impl Task {
    /// 更新完成情况
    ///
    /// `completed == true` 时总是清空未完成原因；否则非空原因原样写入，
    /// 未提供或为空时清空。
    pub fn apply_update(&mut self, completed: bool, not_completed_reason: Option<&str>) {
        self.completed = completed;
        self.not_completed_reason = match not_completed_reason {
            Some(reason) if !completed && !reason.is_empty() => reason.to_string(),
            _ => String::new(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ClientContact, Location};
    use chrono::TimeZone;

    fn schedule() -> Schedule {
        Schedule {
            id: "2".to_string(),
            client_name: "John Doe".to_string(),
            service_name: "Senior Living Center".to_string(),
            shift_date: "2025-01-15".to_string(),
            shift_time: "06:00 - 12:00".to_string(),
            am_or_pm: "AM".to_string(),
            status: ScheduleStatus::Scheduled,
            tasks: vec![
                Task::new(3, "Prepare lunch", "Low-sodium, soft food diet."),
                Task::new(4, "Light housekeeping", "Tidy up living room and kitchen."),
            ],
            client_contact: ClientContact {
                email: "john.doe@example.com".to_string(),
                phone: "+1 555 123 4567".to_string(),
            },
            service_notes: None,
            clock_in_time: None,
            clock_out_time: None,
            clock_in_location: None,
            clock_out_location: None,
            location: Location {
                address: "456 Oak Ave, Springfield, IL".to_string(),
                coordinates: Geolocation::new(40.712776, -74.005974),
            },
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_start_then_end_visit() {
        let mut schedule = schedule();
        let start = Geolocation::new(10.0, 20.0);
        let end = Geolocation::new(11.0, 21.0);

        schedule.start_visit(start, at(9));
        assert_eq!(schedule.status, ScheduleStatus::InProgress);
        assert_eq!(schedule.clock_in_location, Some(start));
        assert_eq!(schedule.clock_in_time, Some(at(9)));

        schedule.end_visit(end, at(10));
        assert_eq!(schedule.status, ScheduleStatus::Completed);
        assert_eq!(schedule.clock_out_location, Some(end));
        assert_eq!(schedule.clock_out_time, Some(at(10)));
        assert_eq!(schedule.clock_in_location, Some(start));
    }

    #[test]
    fn test_start_visit_overwrites_previous_clock_in() {
        let mut schedule = schedule();
        schedule.start_visit(Geolocation::new(1.0, 1.0), at(8));
        schedule.start_visit(Geolocation::new(2.0, 2.0), at(9));

        assert_eq!(schedule.clock_in_time, Some(at(9)));
        assert_eq!(schedule.clock_in_location, Some(Geolocation::new(2.0, 2.0)));
    }

    #[test]
    fn test_clock_in_twice_conflicts() {
        let mut schedule = schedule();
        schedule.clock_in(at(9)).unwrap();
        assert_eq!(schedule.clock_in_location, Some(Geolocation::placeholder()));
        assert_eq!(schedule.status, ScheduleStatus::InProgress);

        let err = schedule.clock_in(at(10)).unwrap_err();
        assert!(matches!(err, EvvError::AlreadyClockedIn { ref id } if id == "2"));
        assert_eq!(schedule.clock_in_time, Some(at(9)));
    }

    #[test]
    fn test_clock_in_after_start_visit_conflicts() {
        let mut schedule = schedule();
        schedule.start_visit(Geolocation::new(1.0, 2.0), at(9));
        assert!(schedule.clock_in(at(10)).is_err());
    }

    #[test]
    fn test_cancel_clock_in_restores_scheduled() {
        let mut schedule = schedule();
        schedule.clock_in(at(9)).unwrap();
        schedule.cancel_clock_in();

        assert_eq!(schedule.status, ScheduleStatus::Scheduled);
        assert!(schedule.clock_in_time.is_none());
        assert!(schedule.clock_in_location.is_none());
        assert!(schedule.clock_in(at(11)).is_ok());
    }

    #[test]
    fn test_cancel_clock_in_reverts_completed_visit() {
        let mut schedule = schedule();
        schedule.start_visit(Geolocation::new(1.0, 2.0), at(9));
        schedule.end_visit(Geolocation::new(1.0, 2.0), at(10));
        schedule.cancel_clock_in();

        assert_eq!(schedule.status, ScheduleStatus::Scheduled);
        // 签退记录不受影响
        assert_eq!(schedule.clock_out_time, Some(at(10)));
    }

    #[test]
    fn test_add_task_uses_count_plus_one() {
        let mut schedule = schedule();
        let task = schedule.add_task("New Task", "A new test task").clone();

        assert_eq!(task.id, 3);
        assert!(!task.completed);
        assert_eq!(schedule.tasks.len(), 3);
        assert_eq!(schedule.tasks[2], task);
    }

    #[test]
    fn test_apply_update_completed_clears_reason() {
        let mut task = Task::new(1, "Check vitals", "Blood pressure");
        task.apply_update(false, Some("Client was too tired."));
        assert_eq!(task.not_completed_reason, "Client was too tired.");

        task.apply_update(true, Some("ignored"));
        assert!(task.completed);
        assert!(task.not_completed_reason.is_empty());
    }

    #[test]
    fn test_apply_update_without_reason_clears() {
        let mut task = Task::new(1, "Check vitals", "Blood pressure");
        task.apply_update(false, Some("Client refused"));
        task.apply_update(false, None);
        assert!(!task.completed);
        assert!(task.not_completed_reason.is_empty());

        task.apply_update(false, Some(""));
        assert!(task.not_completed_reason.is_empty());
    }
}

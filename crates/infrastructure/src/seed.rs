//! 初始数据集
//!
//! 6 个排班、12 个任务，`shift_date` 均为调用时传入的当天日期。
//! 重置操作每次都从这里重新构建，不复用任何已有实例。

use chrono::NaiveDate;
use evv_domain::{
    format_shift_date, ClientContact, Geolocation, Location, Schedule, ScheduleStatus, Task,
};

const SEED_LATITUDE: f64 = 40.712776;
const SEED_LONGITUDE: f64 = -74.005974;

struct SeedSchedule {
    id: &'static str,
    client_name: &'static str,
    service_name: &'static str,
    shift_time: &'static str,
    am_or_pm: &'static str,
    status: ScheduleStatus,
    tasks: Vec<Task>,
    email: &'static str,
    phone: &'static str,
    notes: &'static str,
    address: &'static str,
}

impl SeedSchedule {
    fn build(self, shift_date: &str) -> Schedule {
        Schedule {
            id: self.id.to_string(),
            client_name: self.client_name.to_string(),
            service_name: self.service_name.to_string(),
            shift_date: shift_date.to_string(),
            shift_time: self.shift_time.to_string(),
            am_or_pm: self.am_or_pm.to_string(),
            status: self.status,
            tasks: self.tasks,
            client_contact: ClientContact {
                email: self.email.to_string(),
                phone: self.phone.to_string(),
            },
            service_notes: Some(self.notes.to_string()),
            clock_in_time: None,
            clock_out_time: None,
            clock_in_location: None,
            clock_out_location: None,
            location: Location {
                address: self.address.to_string(),
                coordinates: Geolocation::new(SEED_LATITUDE, SEED_LONGITUDE),
            },
        }
    }
}

fn task(id: i64, name: &str, description: &str) -> Task {
    Task::new(id, name, description)
}

fn task_with(id: i64, name: &str, description: &str, completed: bool, reason: &str) -> Task {
    Task {
        completed,
        not_completed_reason: reason.to_string(),
        ..Task::new(id, name, description)
    }
}

/// 构建初始排班列表
pub fn initial_schedules(today: NaiveDate) -> Vec<Schedule> {
    let shift_date = format_shift_date(today);

    let seeds = vec![
        SeedSchedule {
            id: "1",
            client_name: "Melisa Adam",
            service_name: "Casa Grande Apartment",
            shift_time: "00:00 - 6:00",
            am_or_pm: "AM",
            status: ScheduleStatus::Scheduled,
            tasks: vec![
                task(1, "Give medication", "Administer morning pills with water."),
                task(2, "Assist with bathing", "Ensure safety during shower."),
            ],
            email: "melisa@example.com",
            phone: "+44 1232 212 3233",
            notes: "Client may be a bit groggy in the morning. Speak clearly and be patient.",
            address: "123 Main St, Springfield, IL",
        },
        SeedSchedule {
            id: "2",
            client_name: "John Doe",
            service_name: "Senior Living Center",
            shift_time: "06:00 - 12:00",
            am_or_pm: "AM",
            status: ScheduleStatus::Scheduled,
            tasks: vec![
                task(3, "Prepare lunch", "Low-sodium, soft food diet."),
                task(4, "Light housekeeping", "Tidy up living room and kitchen."),
            ],
            email: "john.doe@example.com",
            phone: "+1 555 123 4567",
            notes: "John enjoys listening to classical music during his lunch.",
            address: "456 Oak Ave, Springfield, IL",
        },
        SeedSchedule {
            id: "3",
            client_name: "Jane Smith",
            service_name: "Private Residence",
            shift_time: "2:00 - 3:00",
            am_or_pm: "AM",
            status: ScheduleStatus::Completed,
            tasks: vec![
                task_with(
                    5,
                    "Physical therapy exercises",
                    "Follow the chart from Dr. Evans.",
                    false,
                    "Client was too tired.",
                ),
                task_with(6, "Check vitals", "Measure blood pressure and heart rate.", true, ""),
            ],
            email: "jane.s@example.com",
            phone: "+1 555 987 6543",
            notes: "Client was in good spirits and completed all exercises without issue.",
            address: "789 Pine Rd, Springfield, IL",
        },
        SeedSchedule {
            id: "4",
            client_name: "Alice Johnson",
            service_name: "Community Health Center",
            shift_time: "00:00 - 06:00",
            am_or_pm: "PM",
            status: ScheduleStatus::Scheduled,
            tasks: vec![
                task(7, "Administer insulin", "Check blood sugar before administering."),
                task(8, "Assist with mobility", "Help client walk to the therapy room."),
            ],
            email: "alice@example.com",
            phone: "+1 555 321 6543",
            notes: "Alice is diabetic and requires regular monitoring. Ensure she has her glucose meter.",
            address: "321 Maple St, Springfield, IL",
        },
        SeedSchedule {
            id: "5",
            client_name: "Bob Brown",
            service_name: "Assisted Living Facility",
            shift_time: "06:00 - 11:59",
            am_or_pm: "PM",
            status: ScheduleStatus::Scheduled,
            tasks: vec![
                task(9, "Monitor heart rate", "Use the portable ECG machine."),
                task(10, "Provide companionship", "Spend time reading and chatting."),
            ],
            email: "bob@example.com",
            phone: "+1 555 456 7890",
            notes: "Bob enjoys reading mystery novels. Bring a book to read together.",
            address: "654 Cedar Blvd, Springfield, IL",
        },
        SeedSchedule {
            id: "6",
            client_name: "Charlie Green",
            service_name: "Home Care Services",
            shift_time: "2:00 - 3:00",
            am_or_pm: "PM",
            status: ScheduleStatus::Missed,
            tasks: vec![
                task_with(
                    11,
                    "Check medication schedule",
                    "Ensure all medications are taken as prescribed.",
                    false,
                    "Client was not home.",
                ),
                task_with(
                    12,
                    "Assist with meal prep",
                    "Prepare a light snack for the client.",
                    false,
                    "Client refused meal.",
                ),
            ],
            email: "charlie@example.com",
            phone: "+1 555 789 1234",
            notes: "Charlie was not home during the scheduled visit. Attempted to call but no answer.",
            address: "987 Birch St, Springfield, IL",
        },
    ];

    seeds.into_iter().map(|seed| seed.build(&shift_date)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use evv_domain::sort_by_shift_start;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_seed_shape() {
        let schedules = initial_schedules(today());
        assert_eq!(schedules.len(), 6);

        let task_ids: Vec<i64> = schedules
            .iter()
            .flat_map(|s| s.tasks.iter().map(|t| t.id))
            .collect();
        assert_eq!(task_ids, (1..=12).collect::<Vec<_>>());

        for schedule in &schedules {
            assert_eq!(schedule.shift_date, "2025-01-15");
            assert!(schedule.clock_in_time.is_none());
            assert!(schedule.clock_out_time.is_none());
            assert_eq!(schedule.location.coordinates.latitude, SEED_LATITUDE);
        }
    }

    #[test]
    fn test_seed_statuses_and_reasons() {
        let schedules = initial_schedules(today());
        assert_eq!(schedules[2].status, ScheduleStatus::Completed);
        assert_eq!(schedules[5].status, ScheduleStatus::Missed);
        assert_eq!(schedules[2].tasks[0].not_completed_reason, "Client was too tired.");
        assert!(schedules[2].tasks[1].completed);
        assert_eq!(schedules[5].tasks[1].not_completed_reason, "Client refused meal.");
    }

    #[test]
    fn test_seed_sorted_order() {
        let mut schedules = initial_schedules(today());
        sort_by_shift_start(&mut schedules);

        let ids: Vec<&str> = schedules.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2", "4", "6", "5"]);
    }

    #[test]
    fn test_seed_is_rebuilt_fresh() {
        let mut first = initial_schedules(today());
        first[0].tasks.clear();

        let second = initial_schedules(today());
        assert_eq!(second[0].tasks.len(), 2);
    }
}

//! 排班按班次开始时间排序
//!
//! 排序键由 `shift_date`、`shift_time` 的起点与 `am_or_pm` 拼出，
//! 按 12 小时制解析。无法解析的排班一律排在最后。

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::entities::Schedule;

/// `shift_date` 的格式
pub const SHIFT_DATE_FORMAT: &str = "%Y-%m-%d";

/// `shift_time` 中起止时间的分隔符
const SHIFT_TIME_SEPARATOR: &str = " - ";

pub fn format_shift_date(date: NaiveDate) -> String {
    date.format(SHIFT_DATE_FORMAT).to_string()
}

impl Schedule {
    /// 班次开始时间，无法解析时返回 `None`
    pub fn shift_start(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.shift_date, SHIFT_DATE_FORMAT).ok()?;
        let start = self
            .shift_time
            .split(SHIFT_TIME_SEPARATOR)
            .next()
            .unwrap_or_default();
        let time = parse_twelve_hour(start, &self.am_or_pm)?;
        Some(date.and_time(time))
    }
}

/// 解析 `H:MM` / `HH:MM` 加 `AM` / `PM`
///
/// 小时取值 0..=12；`AM` 时 12 视为 0，`PM` 时小于 12 的小时加 12，
/// 因此 `00:00 PM` 表示正午。
fn parse_twelve_hour(value: &str, meridiem: &str) -> Option<NaiveTime> {
    let (hour, minute) = value.split_once(':')?;

    if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if minute.len() != 2 || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 12 {
        return None;
    }

    match meridiem {
        "AM" if hour == 12 => hour = 0,
        "AM" => {}
        "PM" if hour < 12 => hour += 12,
        "PM" => {}
        _ => return None,
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// 比较两个排班的开始时间，无法解析的一方视为更晚
pub fn compare_shift_start(a: &Schedule, b: &Schedule) -> Ordering {
    match (a.shift_start(), b.shift_start()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// 稳定排序：开始时间相同或都无法解析时保持原有相对顺序
pub fn sort_by_shift_start(schedules: &mut [Schedule]) {
    schedules.sort_by(compare_shift_start);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ClientContact, Geolocation, Location, ScheduleStatus};

    fn schedule(id: &str, shift_date: &str, shift_time: &str, am_or_pm: &str) -> Schedule {
        Schedule {
            id: id.to_string(),
            client_name: format!("Client {id}"),
            service_name: "Home Care Services".to_string(),
            shift_date: shift_date.to_string(),
            shift_time: shift_time.to_string(),
            am_or_pm: am_or_pm.to_string(),
            status: ScheduleStatus::Scheduled,
            tasks: vec![],
            client_contact: ClientContact {
                email: "client@example.com".to_string(),
                phone: "+1 555 000 0000".to_string(),
            },
            service_notes: None,
            clock_in_time: None,
            clock_out_time: None,
            clock_in_location: None,
            clock_out_location: None,
            location: Location {
                address: "1 Test St".to_string(),
                coordinates: Geolocation::default(),
            },
        }
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_parse_twelve_hour() {
        assert_eq!(parse_twelve_hour("00:00", "AM"), Some(hm(0, 0)));
        assert_eq!(parse_twelve_hour("2:00", "AM"), Some(hm(2, 0)));
        assert_eq!(parse_twelve_hour("12:30", "AM"), Some(hm(0, 30)));
        assert_eq!(parse_twelve_hour("00:00", "PM"), Some(hm(12, 0)));
        assert_eq!(parse_twelve_hour("06:00", "PM"), Some(hm(18, 0)));
        assert_eq!(parse_twelve_hour("12:15", "PM"), Some(hm(12, 15)));
    }

    #[test]
    fn test_parse_twelve_hour_rejects_malformed() {
        assert_eq!(parse_twelve_hour("13:00", "PM"), None);
        assert_eq!(parse_twelve_hour("9:5", "AM"), None);
        assert_eq!(parse_twelve_hour("09:60", "AM"), None);
        assert_eq!(parse_twelve_hour("0900", "AM"), None);
        assert_eq!(parse_twelve_hour("09:00", "pm"), None);
        assert_eq!(parse_twelve_hour("09:00", ""), None);
        assert_eq!(parse_twelve_hour("", "AM"), None);
    }

    #[test]
    fn test_shift_start_uses_start_segment() {
        let s = schedule("1", "2025-01-15", "06:00 - 11:59", "PM");
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_time(hm(18, 0));
        assert_eq!(s.shift_start(), Some(expected));

        let bad_date = schedule("2", "15/01/2025", "06:00 - 11:59", "PM");
        assert_eq!(bad_date.shift_start(), None);
    }

    #[test]
    fn test_sort_orders_by_date_time_and_meridiem() {
        let mut schedules = vec![
            schedule("4", "2025-01-15", "00:00 - 06:00", "PM"),
            schedule("2", "2025-01-15", "06:00 - 12:00", "AM"),
            schedule("3", "2025-01-15", "2:00 - 3:00", "AM"),
            schedule("1", "2025-01-15", "00:00 - 6:00", "AM"),
            schedule("0", "2025-01-14", "11:00 - 11:30", "PM"),
        ];
        sort_by_shift_start(&mut schedules);

        let ids: Vec<&str> = schedules.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "3", "2", "4"]);
    }

    #[test]
    fn test_unparseable_sorts_last_from_either_side() {
        let mut schedules = vec![
            schedule("bad-a", "2025-01-15", "whenever", "AM"),
            schedule("ok", "2025-01-15", "09:00 - 10:00", "AM"),
            schedule("bad-b", "not a date", "09:00 - 10:00", "AM"),
        ];
        sort_by_shift_start(&mut schedules);

        let ids: Vec<&str> = schedules.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["ok", "bad-a", "bad-b"]);

        assert_eq!(
            compare_shift_start(&schedules[0], &schedules[1]),
            Ordering::Less
        );
        assert_eq!(
            compare_shift_start(&schedules[1], &schedules[0]),
            Ordering::Greater
        );
    }
}

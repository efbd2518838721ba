use evv_domain::{DomainEvent, ScheduleEvent};
use std::collections::VecDeque;
use tracing::debug;

/// 有界事件日志
///
/// 由存储持有并与排班共用同一把写锁，事件顺序即提交顺序。
/// 超出容量时丢弃最早的事件。
#[derive(Debug)]
pub struct EventLog {
    capacity: usize,
    events: VecDeque<ScheduleEvent>,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            events: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record(&mut self, event: ScheduleEvent) {
        debug!(
            event_type = event.event_type(),
            aggregate_id = %event.aggregate_id(),
            "记录领域事件"
        );

        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// 指定聚合的事件，按提交顺序
    pub fn for_aggregate(&self, aggregate_id: &str) -> Vec<ScheduleEvent> {
        self.events
            .iter()
            .filter(|event| event.aggregate_id() == aggregate_id)
            .cloned()
            .collect()
    }

    pub fn all(&self) -> Vec<ScheduleEvent> {
        self.events.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use evv_domain::ScheduleStatus;

    #[test]
    fn test_event_log_drops_oldest_when_full() {
        let mut log = EventLog::new(2);
        log.record(ScheduleEvent::clocked_in("1", Utc::now()));
        log.record(ScheduleEvent::clocked_in("2", Utc::now()));
        log.record(ScheduleEvent::clocked_in("3", Utc::now()));

        let ids: Vec<String> = log.all().iter().map(|e| e.aggregate_id()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_event_log_filters_by_aggregate() {
        let mut log = EventLog::new(8);
        log.record(ScheduleEvent::clocked_in("1", Utc::now()));
        log.record(ScheduleEvent::task_added("2", 3, "New Task", Utc::now()));
        log.record(ScheduleEvent::clock_in_cancelled(
            "1",
            ScheduleStatus::InProgress,
            Utc::now(),
        ));

        let events = log.for_aggregate("1");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "ClockedIn");
        assert_eq!(events[1].event_type(), "ClockInCancelled");

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        assert_eq!(EventLog::new(0).capacity(), 1);
    }
}

pub mod event_log;
pub mod in_memory_store;
pub mod seed;

pub use event_log::EventLog;
pub use in_memory_store::InMemoryScheduleRepository;
pub use seed::initial_schedules;

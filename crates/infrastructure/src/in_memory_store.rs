use async_trait::async_trait;
use evv_domain::{
    Clock, EvvError, EvvResult, Schedule, ScheduleEvent, ScheduleMutation, ScheduleRepository,
    Task, TaskMutation,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::event_log::EventLog;
use crate::seed::initial_schedules;

/// 内存排班存储
///
/// 单个读写锁保护全部状态（排班、任务索引、事件日志）：`Get`/`List` 取读锁，
/// `seed`/`mutate`/`mutate_task` 取写锁。写操作在副本上执行变更，
/// 只有成功时才替换原排班并追加事件。
pub struct InMemoryScheduleRepository {
    state: RwLock<StoreState>,
    clock: Arc<dyn Clock>,
}

#[derive(Debug)]
struct StoreState {
    /// 排班ID -> 排班，按ID升序
    schedules: BTreeMap<String, Schedule>,
    /// 任务ID -> 排班ID，由 `schedules` 推导，每次写入后重建
    task_index: HashMap<i64, String>,
    events: EventLog,
}

impl StoreState {
    fn new(event_log_capacity: usize) -> Self {
        Self {
            schedules: BTreeMap::new(),
            task_index: HashMap::new(),
            events: EventLog::new(event_log_capacity),
        }
    }

    fn replace(&mut self, schedules: Vec<Schedule>) {
        self.schedules = schedules
            .into_iter()
            .map(|schedule| (schedule.id.clone(), schedule))
            .collect();
        self.rebuild_index();
    }

    fn commit(&mut self, schedule: Schedule, event: ScheduleEvent) {
        self.schedules.insert(schedule.id.clone(), schedule);
        self.rebuild_index();
        self.events.record(event);
    }

    /// 按排班ID升序扫描，重复的任务ID保留最先出现的归属
    fn rebuild_index(&mut self) {
        self.task_index.clear();
        for (schedule_id, schedule) in &self.schedules {
            for task in &schedule.tasks {
                self.task_index
                    .entry(task.id)
                    .or_insert_with(|| schedule_id.clone());
            }
        }
    }
}

impl InMemoryScheduleRepository {
    /// 创建空存储，需调用 [`ScheduleRepository::seed`] 填充数据
    pub fn new(clock: Arc<dyn Clock>, event_log_capacity: usize) -> Self {
        Self {
            state: RwLock::new(StoreState::new(event_log_capacity)),
            clock,
        }
    }

    /// 创建并立即填充初始数据
    pub async fn seeded(clock: Arc<dyn Clock>, event_log_capacity: usize) -> Self {
        let repository = Self::new(clock, event_log_capacity);
        repository.seed().await;
        repository
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn seed(&self) -> usize {
        let schedules = initial_schedules(self.clock.today());
        let mut state = self.state.write().await;
        state.replace(schedules);

        let count = state.schedules.len();
        state.events.clear();
        state
            .events
            .record(ScheduleEvent::store_reset(count, self.clock.now()));

        info!(
            "Seeded schedule store with {} schedules and {} tasks",
            count,
            state.task_index.len()
        );
        count
    }

    async fn find_by_id(&self, id: &str) -> EvvResult<Schedule> {
        let state = self.state.read().await;
        state
            .schedules
            .get(id)
            .cloned()
            .ok_or_else(|| EvvError::schedule_not_found(id))
    }

    async fn find_all(&self) -> EvvResult<Vec<Schedule>> {
        let state = self.state.read().await;
        Ok(state.schedules.values().cloned().collect())
    }

    async fn find_events(&self, id: &str) -> EvvResult<Vec<ScheduleEvent>> {
        let state = self.state.read().await;
        if !state.schedules.contains_key(id) {
            return Err(EvvError::schedule_not_found(id));
        }
        Ok(state.events.for_aggregate(id))
    }

    async fn mutate(
        &self,
        id: &str,
        mutation: ScheduleMutation,
    ) -> EvvResult<(Schedule, ScheduleEvent)> {
        let mut state = self.state.write().await;

        let mut draft = state
            .schedules
            .get(id)
            .cloned()
            .ok_or_else(|| EvvError::schedule_not_found(id))?;

        let event = mutation(&mut draft)?;

        state.commit(draft.clone(), event.clone());
        debug!("Committed mutation on schedule {}", id);

        Ok((draft, event))
    }

    async fn mutate_task(
        &self,
        task_id: i64,
        mutation: TaskMutation,
    ) -> EvvResult<(Task, ScheduleEvent)> {
        let mut state = self.state.write().await;

        let schedule_id = state
            .task_index
            .get(&task_id)
            .cloned()
            .ok_or_else(|| EvvError::task_not_found(task_id))?;

        let mut draft = state
            .schedules
            .get(&schedule_id)
            .cloned()
            .ok_or_else(|| EvvError::task_not_found(task_id))?;

        let task = draft
            .find_task_mut(task_id)
            .ok_or_else(|| EvvError::task_not_found(task_id))?;
        let event = mutation(&schedule_id, task)?;
        let updated = task.clone();

        state.commit(draft, event.clone());
        debug!(
            "Committed mutation on task {} of schedule {}",
            task_id, schedule_id
        );

        Ok((updated, event))
    }
}

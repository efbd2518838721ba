use evv_domain::{
    format_shift_date, sort_by_shift_start, AddTaskRequest, Clock, DomainEvent, EvvResult,
    Schedule, ScheduleEvent, ScheduleRepository, ScheduleStatus, Task, UpdateTaskRequest,
    VisitRequest,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// 排班服务
///
/// 对外提供全部生命周期操作。每个写操作都经由仓储的 `mutate` 在互斥区内执行，
/// 变更闭包同时产出领域事件，由仓储在同一互斥区内记录。
pub struct ScheduleService {
    repository: Arc<dyn ScheduleRepository>,
    clock: Arc<dyn Clock>,
}

impl ScheduleService {
    pub fn new(repository: Arc<dyn ScheduleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 以初始数据集替换全部排班并清空事件日志
    #[instrument(skip(self))]
    pub async fn reset(&self) -> EvvResult<usize> {
        let count = self.repository.seed().await;

        info!(schedule_count = count, "数据已重置为初始状态");
        Ok(count)
    }

    /// 全部排班，按班次开始时间排序
    pub async fn list_schedules(&self) -> EvvResult<Vec<Schedule>> {
        let mut schedules = self.repository.find_all().await?;
        sort_by_shift_start(&mut schedules);
        Ok(schedules)
    }

    /// `shift_date` 等于今天的排班
    pub async fn list_today(&self) -> EvvResult<Vec<Schedule>> {
        let today = format_shift_date(self.clock.today());
        let mut schedules: Vec<Schedule> = self
            .repository
            .find_all()
            .await?
            .into_iter()
            .filter(|schedule| schedule.shift_date == today)
            .collect();
        sort_by_shift_start(&mut schedules);
        Ok(schedules)
    }

    pub async fn get_schedule(&self, id: &str) -> EvvResult<Schedule> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self, request))]
    pub async fn start_visit(&self, id: &str, request: VisitRequest) -> EvvResult<Schedule> {
        let now = self.clock.now();
        let location = request.location;

        let (schedule, _) = self
            .repository
            .mutate(
                id,
                Box::new(move |schedule: &mut Schedule| {
                    schedule.start_visit(location, now);
                    Ok(ScheduleEvent::visit_started(schedule.id.clone(), location, now))
                }),
            )
            .await?;

        info!(
            latitude = location.latitude,
            longitude = location.longitude,
            "探访已开始"
        );
        Ok(schedule)
    }

    #[instrument(skip(self, request))]
    pub async fn end_visit(&self, id: &str, request: VisitRequest) -> EvvResult<Schedule> {
        let now = self.clock.now();
        let location = request.location;

        let (schedule, event) = self
            .repository
            .mutate(
                id,
                Box::new(move |schedule: &mut Schedule| {
                    let previous_status = schedule.status;
                    schedule.end_visit(location, now);
                    Ok(ScheduleEvent::visit_ended(
                        schedule.id.clone(),
                        location,
                        previous_status,
                        now,
                    ))
                }),
            )
            .await?;

        if !schedule.is_clocked_in() {
            warn!(previous_status = ?event.previous_status(), "未签到即结束探访");
        }
        info!(
            latitude = location.latitude,
            longitude = location.longitude,
            "探访已结束"
        );
        Ok(schedule)
    }

    #[instrument(skip(self))]
    pub async fn clock_in(&self, id: &str) -> EvvResult<Schedule> {
        let now = self.clock.now();

        let (schedule, _) = self
            .repository
            .mutate(
                id,
                Box::new(move |schedule: &mut Schedule| {
                    schedule.clock_in(now)?;
                    Ok(ScheduleEvent::clocked_in(schedule.id.clone(), now))
                }),
            )
            .await?;

        info!("已签到");
        Ok(schedule)
    }

    #[instrument(skip(self))]
    pub async fn cancel_clock_in(&self, id: &str) -> EvvResult<Schedule> {
        let now = self.clock.now();

        let (schedule, event) = self
            .repository
            .mutate(
                id,
                Box::new(move |schedule: &mut Schedule| {
                    let previous_status = schedule.status;
                    schedule.cancel_clock_in();
                    Ok(ScheduleEvent::clock_in_cancelled(schedule.id.clone(), previous_status, now))
                }),
            )
            .await?;

        let previous_status = event.previous_status();
        if previous_status == Some(ScheduleStatus::Completed) {
            warn!("已完成的探访被取消签到，状态回退为 scheduled");
        }
        info!(?previous_status, "签到已取消");
        Ok(schedule)
    }

    /// 按任务ID更新完成情况，返回更新后的任务
    #[instrument(skip(self, request))]
    pub async fn update_task(&self, task_id: i64, request: UpdateTaskRequest) -> EvvResult<Task> {
        let now = self.clock.now();
        let UpdateTaskRequest {
            completed,
            not_completed_reason,
        } = request;

        let (task, event) = self
            .repository
            .mutate_task(
                task_id,
                Box::new(move |schedule_id: &str, task: &mut Task| {
                    task.apply_update(completed, not_completed_reason.as_deref());
                    Ok(ScheduleEvent::task_updated(schedule_id, task.id, task.completed, now))
                }),
            )
            .await?;

        info!(
            schedule_id = %event.aggregate_id(),
            completed = task.completed,
            "任务已更新"
        );
        Ok(task)
    }

    #[instrument(skip(self, request))]
    pub async fn add_task(&self, id: &str, request: AddTaskRequest) -> EvvResult<Schedule> {
        let now = self.clock.now();
        let AddTaskRequest { name, description } = request;

        let (schedule, _) = self
            .repository
            .mutate(
                id,
                Box::new(move |schedule: &mut Schedule| {
                    let task = schedule.add_task(name, description).clone();
                    Ok(ScheduleEvent::task_added(schedule.id.clone(), task.id, task.name, now))
                }),
            )
            .await?;

        if let Some(task) = schedule.tasks.last() {
            info!(task_id = task.id, task_name = %task.name, "任务已添加");
        }
        Ok(schedule)
    }

    /// 指定排班的事件记录，排班不存在时返回 NotFound
    pub async fn schedule_events(&self, id: &str) -> EvvResult<Vec<ScheduleEvent>> {
        self.repository.find_events(id).await
    }
}

//! 排班仓储抽象
//!
//! 所有写操作以闭包形式提交：闭包在仓储的互斥区内对副本执行，
//! 返回 `Ok(event)` 才会提交，事件在同一互斥区内追加到事件日志。
//! 返回错误时存储与事件日志都保持不变。

use async_trait::async_trait;
use evv_errors::EvvResult;

use crate::entities::{Schedule, Task};
use crate::events::ScheduleEvent;

/// 作用于单个排班的变更，返回描述本次变更的事件
pub type ScheduleMutation = Box<dyn FnOnce(&mut Schedule) -> EvvResult<ScheduleEvent> + Send>;

/// 作用于单个任务的变更，第一个参数为所属排班ID
pub type TaskMutation = Box<dyn FnOnce(&str, &mut Task) -> EvvResult<ScheduleEvent> + Send>;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// 以初始数据集整体替换当前内容，清空事件日志并记录 `StoreReset`，
    /// 返回排班数量
    async fn seed(&self) -> usize;

    async fn find_by_id(&self, id: &str) -> EvvResult<Schedule>;

    /// 全部排班，按排班ID升序
    async fn find_all(&self) -> EvvResult<Vec<Schedule>>;

    /// 指定排班的事件，按提交顺序；排班不存在时返回 NotFound
    async fn find_events(&self, id: &str) -> EvvResult<Vec<ScheduleEvent>>;

    /// 对指定排班执行变更，返回提交后的快照与记录的事件
    async fn mutate(
        &self,
        id: &str,
        mutation: ScheduleMutation,
    ) -> EvvResult<(Schedule, ScheduleEvent)>;

    /// 按全局任务ID定位任务并执行变更，返回提交后的任务与记录的事件
    async fn mutate_task(
        &self,
        task_id: i64,
        mutation: TaskMutation,
    ) -> EvvResult<(Task, ScheduleEvent)>;
}

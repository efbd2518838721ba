use serde::{Deserialize, Serialize};

use crate::validation::{ConfigValidator, ValidationUtils};

/// 内存存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 启动时是否装载初始排班数据
    pub seed_on_startup: bool,
    /// 事件日志保留的最大条数
    pub event_log_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_on_startup: true,
            event_log_capacity: 256,
        }
    }
}

impl ConfigValidator for StoreConfig {
    fn validate(&self) -> crate::ConfigResult<()> {
        ValidationUtils::validate_positive(self.event_log_capacity, "store.event_log_capacity")
    }
}

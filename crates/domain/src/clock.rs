//! 时钟端口
//!
//! 生命周期操作写入的时间戳与“今日”过滤都经由 [`Clock`] 取得，
//! 测试中用 [`FixedClock`] 固定时间。

use chrono::{DateTime, Local, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    /// 当前 UTC 时刻
    fn now(&self) -> DateTime<Utc>;

    /// 服务器本地时区的当天日期
    fn today(&self) -> NaiveDate;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定时钟，`today` 取 `now` 的 UTC 日期
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

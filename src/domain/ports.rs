use crate::domain::model::LogFormat;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn square_delay(&self) -> Duration;
    fn log_format(&self) -> LogFormat;
}

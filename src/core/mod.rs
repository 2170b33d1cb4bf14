pub mod calendar;
pub mod collections;
pub mod square;
pub mod text;
pub mod toolkit;
pub mod value;
pub mod vehicle;

pub use crate::domain::model::{Car, DayType, Product, RatedItem, Value, Vehicle, Weekday};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;

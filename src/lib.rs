#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::commands::run_command;
#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use crate::core::{
    calendar::day_type,
    collections::{concatenate_arrays, filter_by_rating, most_expensive_product, MIN_RATING},
    square::{square_after, square_async, square_cancellable, DEFAULT_SQUARE_DELAY},
    text::format_string,
    toolkit::Toolkit,
    value::process_value,
    vehicle::{describe_car, describe_vehicle},
};
pub use domain::model::{Car, DayType, LogFormat, Product, RatedItem, Value, Vehicle, Weekday};
pub use domain::ports::ConfigProvider;
pub use utils::error::{Result, ToolkitError};

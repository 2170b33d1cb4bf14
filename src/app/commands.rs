use crate::config::cli::Command;
use crate::core::calendar::day_type;
use crate::core::collections::{concatenate_arrays, filter_by_rating, most_expensive_product};
use crate::core::text::format_string;
use crate::core::toolkit::Toolkit;
use crate::core::value::process_value;
use crate::core::vehicle::{describe_car, describe_vehicle};
use crate::core::{Car, ConfigProvider, Product, RatedItem, Value, Vehicle, Weekday};
use crate::utils::error::Result;

/// Runs one command and returns the text to print on stdout.
pub async fn run_command<C: ConfigProvider>(toolkit: &Toolkit<C>, command: Command) -> Result<String> {
    match command {
        Command::Format { text, upper } => Ok(format_string(&text, upper)),
        Command::FilterRatings { json } => {
            let items: Vec<RatedItem> = serde_json::from_str(&json)?;
            tracing::debug!("Filtering {} rated items", items.len());
            Ok(serde_json::to_string(&filter_by_rating(&items))?)
        }
        Command::Concat { json } => {
            let arrays: Vec<Vec<serde_json::Value>> = serde_json::from_str(&json)?;
            Ok(serde_json::to_string(&concatenate_arrays(arrays))?)
        }
        Command::Describe { make, year, model } => {
            let vehicle = Vehicle::new(make, year);
            match model {
                Some(model) => {
                    let car = Car { vehicle, model };
                    Ok(format!("{}\n{}", describe_vehicle(&car.vehicle), describe_car(&car)))
                }
                None => Ok(describe_vehicle(&vehicle)),
            }
        }
        Command::Process { value, text } => {
            // --text 強制當文字，否則看起來像數字就當數字
            let value = if text { Value::Text(value) } else { Value::infer(&value) };
            Ok(process_value(&value).to_string())
        }
        Command::MostExpensive { json } => {
            let products: Vec<Product> = serde_json::from_str(&json)?;
            Ok(match most_expensive_product(&products) {
                Some(product) => serde_json::to_string(&product)?,
                None => "null".to_string(),
            })
        }
        Command::DayType { day } => {
            let day: Weekday = day.parse()?;
            Ok(day_type(day).to_string())
        }
        Command::Square { n } => Ok(toolkit.square(n).await?.to_string()),
    }
}

use crate::utils::error::ToolkitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedItem {
    pub title: String,
    pub rating: f64,
}

impl RatedItem {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub year: i32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }
}

/// A car is a vehicle record plus model information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub vehicle: Vehicle,
    pub model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: i32, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Zero-based position in the week, Monday first.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_lowercase();
                needle == name || needle == name[..3]
            })
            .ok_or_else(|| {
                ToolkitError::parse_error("weekday", s, "expected a day name such as 'Saturday' or 'sat'")
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Weekday => f.write_str("Weekday"),
            DayType::Weekend => f.write_str("Weekend"),
        }
    }
}

/// Input for [`crate::core::value::process_value`]: either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl Value {
    /// Reads a raw argument as a number when the whole input is a finite
    /// number, otherwise keeps it as text.
    pub fn infer(s: &str) -> Self {
        match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Text(s.to_string()),
        }
    }
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Value::infer(s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub const VALID: [&'static str; 2] = ["compact", "json"];
}

impl FromStr for LogFormat {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ToolkitError::InvalidConfigValueError {
                field: "logging.format".to_string(),
                value: s.to_string(),
                reason: format!("Valid formats: {}", LogFormat::VALID.join(", ")),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_order_and_ordinal() {
        assert!(Weekday::Monday < Weekday::Sunday);
        assert_eq!(Weekday::Monday.ordinal(), 0);
        assert_eq!(Weekday::Saturday.ordinal(), 5);
        assert_eq!(Weekday::ALL.len(), 7);
        assert!(Weekday::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_weekday_from_str() {
        assert_eq!("Saturday".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert_eq!("  wed ".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert_eq!("SUNDAY".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!("funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_value_from_str() {
        assert_eq!("10".parse::<Value>().unwrap(), Value::Number(10.0));
        assert_eq!("hello".parse::<Value>().unwrap(), Value::Text("hello".to_string()));
        assert_eq!("inf".parse::<Value>().unwrap(), Value::Text("inf".to_string()));
        assert_eq!(Value::infer(" 2.5 "), Value::Number(2.5));
        assert_eq!(Value::infer("12abc"), Value::from("12abc"));
    }

    #[test]
    fn test_value_from_json() {
        let values: Vec<Value> = serde_json::from_str(r#"["abc", 4.5]"#).unwrap();
        assert_eq!(values, vec![Value::from("abc"), Value::from(4.5)]);
    }

    #[test]
    fn test_car_contains_vehicle() {
        let car = Car::new("Toyota", 2020, "Corolla");
        assert_eq!(car.vehicle, Vehicle::new("Toyota", 2020));
        assert_eq!(car.model, "Corolla");
    }
}

use crate::domain::model::{Car, Vehicle};

pub fn describe_vehicle(vehicle: &Vehicle) -> String {
    format!("Make: {}, Year: {}", vehicle.make, vehicle.year)
}

/// Describes only the car-specific part. Use [`describe_vehicle`] on `car.vehicle`
/// for the make and year.
pub fn describe_car(car: &Car) -> String {
    format!("Model: {}", car.model)
}

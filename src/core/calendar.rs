use crate::domain::model::{DayType, Weekday};

pub fn day_type(day: Weekday) -> DayType {
    if day >= Weekday::Saturday {
        DayType::Weekend
    } else {
        DayType::Weekday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type() {
        assert_eq!(day_type(Weekday::Saturday), DayType::Weekend);
        assert_eq!(day_type(Weekday::Wednesday), DayType::Weekday);
    }

    #[test]
    fn test_day_type_covers_whole_week() {
        let weekends: Vec<Weekday> = Weekday::ALL
            .into_iter()
            .filter(|d| day_type(*d) == DayType::Weekend)
            .collect();
        assert_eq!(weekends, vec![Weekday::Saturday, Weekday::Sunday]);
        assert_eq!(DayType::Weekend.to_string(), "Weekend");
    }
}

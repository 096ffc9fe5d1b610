use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use crate::domain::models::availability::AvailabilitySeason;

/// A concrete slot occurrence on a given date. Capacity is the effective
/// one: the slot's own if set, the season's otherwise.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DaySlot {
    pub time: String,
    pub capacity: i32,
}

/// Expands stored seasons into the "HH:MM" start times applicable on `date`.
///
/// A season contributes when its date range covers the date (inclusive
/// bounds) and the slot's weekday set contains the date's weekday; an
/// absent weekday set means the slot recurs every day. Output is sorted
/// ascending and de-duplicated.
pub fn slots_for_date(seasons: &[AvailabilitySeason], date: NaiveDate) -> Vec<DaySlot> {
    let weekday = date.weekday().num_days_from_sunday() as i32;

    let mut out = Vec::new();
    for season in seasons {
        if date < season.start_date || date > season.end_date {
            continue;
        }

        for slot in season.slots() {
            let applies = match &slot.days_of_week {
                Some(days) => days.contains(&weekday),
                None => true,
            };
            if !applies {
                continue;
            }

            out.push(DaySlot {
                time: format!("{:02}:{:02}", slot.start_hour, slot.start_minute),
                capacity: slot.capacity.unwrap_or(season.capacity),
            });
        }
    }

    out.sort_by(|a, b| a.time.cmp(&b.time).then(a.capacity.cmp(&b.capacity)));
    out.dedup();
    out
}

/// The dates in `[start, end]` with at least one applicable slot.
pub fn available_dates(seasons: &[AvailabilitySeason], start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;

    while current <= end {
        if !slots_for_date(seasons, current).is_empty() {
            dates.push(current);
        }
        current += Duration::days(1);
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::availability::TimeSlot;

    fn season(start: &str, end: &str, capacity: i32, slots: Vec<TimeSlot>) -> AvailabilitySeason {
        AvailabilitySeason::new(
            "exp-1".into(),
            start.parse().unwrap(),
            end.parse().unwrap(),
            capacity,
            15000000,
            10000000,
            3000000,
            2000000,
            serde_json::to_string(&slots).unwrap(),
        )
    }

    fn weekday_slot() -> TimeSlot {
        TimeSlot {
            start_hour: 9,
            start_minute: 0,
            end_hour: 17,
            end_minute: 0,
            capacity: None,
            days_of_week: Some(vec![1, 2, 3, 4, 5]),
        }
    }

    #[test]
    fn test_weekday_restriction() {
        let seasons = vec![season("2024-06-01", "2024-06-30", 10, vec![weekday_slot()])];

        // 2024-06-03 is a Monday, 2024-06-02 a Sunday.
        let monday = slots_for_date(&seasons, "2024-06-03".parse().unwrap());
        assert_eq!(monday, vec![DaySlot { time: "09:00".into(), capacity: 10 }]);

        let sunday = slots_for_date(&seasons, "2024-06-02".parse().unwrap());
        assert!(sunday.is_empty());
    }

    #[test]
    fn test_absent_weekdays_means_every_day() {
        let mut slot = weekday_slot();
        slot.days_of_week = None;
        let seasons = vec![season("2024-06-01", "2024-06-30", 8, vec![slot])];

        let sunday = slots_for_date(&seasons, "2024-06-02".parse().unwrap());
        assert_eq!(sunday.len(), 1);
    }

    #[test]
    fn test_season_bounds_inclusive() {
        let mut slot = weekday_slot();
        slot.days_of_week = None;
        let seasons = vec![season("2024-06-01", "2024-06-30", 10, vec![slot])];

        assert_eq!(slots_for_date(&seasons, "2024-06-01".parse().unwrap()).len(), 1);
        assert_eq!(slots_for_date(&seasons, "2024-06-30".parse().unwrap()).len(), 1);
        assert!(slots_for_date(&seasons, "2024-05-31".parse().unwrap()).is_empty());
        assert!(slots_for_date(&seasons, "2024-07-01".parse().unwrap()).is_empty());
    }

    #[test]
    fn test_capacity_fallback() {
        let mut explicit = weekday_slot();
        explicit.capacity = Some(4);
        explicit.start_hour = 10;
        let seasons = vec![season("2024-06-01", "2024-06-30", 12, vec![weekday_slot(), explicit])];

        let slots = slots_for_date(&seasons, "2024-06-03".parse().unwrap());
        assert_eq!(slots, vec![
            DaySlot { time: "09:00".into(), capacity: 12 },
            DaySlot { time: "10:00".into(), capacity: 4 },
        ]);
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let late = TimeSlot { start_hour: 14, start_minute: 30, ..weekday_slot() };
        let a = season("2024-06-01", "2024-06-30", 10, vec![late, weekday_slot()]);
        // Overlapping season repeating the same 09:00 slot.
        let b = season("2024-06-01", "2024-06-15", 10, vec![weekday_slot()]);

        let slots = slots_for_date(&[a, b], "2024-06-03".parse().unwrap());
        let times: Vec<&str> = slots.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, vec!["09:00", "14:30"]);
    }

    #[test]
    fn test_available_dates_range() {
        let seasons = vec![season("2024-06-01", "2024-06-07", 10, vec![weekday_slot()])];

        let dates = available_dates(
            &seasons,
            "2024-06-01".parse().unwrap(),
            "2024-06-10".parse().unwrap(),
        );

        // Sat 1st and Sun 2nd excluded by the weekday set; the 8th+ is out
        // of season.
        let formatted: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
        assert_eq!(formatted, vec![
            "2024-06-03", "2024-06-04", "2024-06-05", "2024-06-06", "2024-06-07",
        ]);
    }
}

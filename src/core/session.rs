//! # Session strings
//!
//! UTC naming strings for log and output artifacts. Both derive from a
//! single instant the caller supplies, so one generation pass is
//! internally consistent and tests can pin the clock.

use chrono::{DateTime, Utc};

/// Full session timestamp, `YYYYMMDD-HHMMSS`.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d-%H%M%S").to_string()
}

/// Mission-day string, `YYYY.DDD` with a zero-padded UTC day-of-year.
/// Day numbering is leap-year aware (Dec 31 is 366 in a leap year).
pub fn mission_day(at: DateTime<Utc>) -> String {
    at.format("%Y.%j").to_string()
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 4, 9, 3, 5, 9).unwrap();
        assert_eq!(timestamp(at), "20240409-030509");
    }

    #[test]
    fn test_mission_day_leap_year() {
        // 2024 is a leap year: Apr 9 is day 100.
        let at = Utc.with_ymd_and_hms(2024, 4, 9, 3, 5, 9).unwrap();
        assert_eq!(mission_day(at), "2024.100");
    }

    #[test]
    fn test_mission_day_non_leap_year() {
        // 2023 is not: the same calendar date is day 99.
        let at = Utc.with_ymd_and_hms(2023, 4, 9, 12, 0, 0).unwrap();
        assert_eq!(mission_day(at), "2023.099");
    }

    #[test]
    fn test_mission_day_year_end() {
        let leap = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(mission_day(leap), "2024.366");
        let common = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(mission_day(common), "2025.365");
    }
}

use chrono::{NaiveDate, Utc};
use chrono_tz::Pacific::Honolulu;

use mahina::lunar_age::{local_instant, wall_clock};
use mahina::types::*;
use mahina::{ConfigError, LunarCalendar, TransitionDetector};

#[test]
fn test_default_config() {
    let c = CalendarConfig::default();
    assert_eq!(c.synodic_month_days, 29.530588);
    assert_eq!(c.group_layout, GroupLayout::Canonical);
    assert_eq!(c.morning_hour, 6);
    assert_eq!(c.evening_hour, 18);
    assert_eq!(c.locale, Locale::English);
    assert_eq!(c.validate(), Ok(()));
}

#[test]
fn test_rejects_bad_synodic_length() {
    for bad in [0.0, -29.5, f64::NAN, f64::INFINITY] {
        let config = CalendarConfig {
            synodic_month_days: bad,
            ..CalendarConfig::default()
        };
        assert!(
            matches!(config.validate(), Err(ConfigError::InvalidSynodicLength(_))),
            "{}",
            bad
        );
    }
}

#[test]
fn test_rejects_bad_hours() {
    let late = CalendarConfig {
        evening_hour: 24,
        ..CalendarConfig::default()
    };
    assert_eq!(late.validate(), Err(ConfigError::InvalidHour(24)));

    let swapped = CalendarConfig {
        morning_hour: 18,
        evening_hour: 6,
        ..CalendarConfig::default()
    };
    assert_eq!(
        swapped.validate(),
        Err(ConfigError::HoursOutOfOrder {
            morning: 18,
            evening: 6
        })
    );
}

#[test]
fn test_calendar_construction_validates() {
    let bad = CalendarConfig {
        synodic_month_days: -1.0,
        ..CalendarConfig::default()
    };
    assert!(LunarCalendar::new(Honolulu, bad).is_err());

    let calendar = LunarCalendar::with_default_config(Honolulu).unwrap();
    assert_eq!(*calendar.config(), CalendarConfig::default());
    assert_eq!(*calendar.timezone(), Honolulu);
    assert_eq!(*calendar.transitions().config(), CalendarConfig::default());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::InvalidHour(25).to_string(),
        "hour 25 is outside 0..=23"
    );
    assert_eq!(
        ConfigError::from(mahina::CatalogError::WrongLength(29)).to_string(),
        "phase table has 29 entries, expected 30"
    );
}

#[test]
fn test_local_calendar_builds() {
    let calendar = LunarCalendar::local().unwrap();
    let today = chrono::Local::now().date_naive();
    let result = calendar.resolve_phase(today);
    assert!((1..=30).contains(&result.primary.day));
}

#[test]
fn test_detector_rejects_invalid_config() {
    let zero_cycle = CalendarConfig {
        synodic_month_days: 0.0,
        ..CalendarConfig::default()
    };
    assert_eq!(
        TransitionDetector::new(Utc, zero_cycle).err(),
        Some(ConfigError::InvalidSynodicLength(0.0))
    );

    let late_evening = CalendarConfig {
        evening_hour: 99,
        ..CalendarConfig::default()
    };
    assert_eq!(
        TransitionDetector::new(Utc, late_evening).err(),
        Some(ConfigError::InvalidHour(99))
    );

    assert!(TransitionDetector::new(Utc, CalendarConfig::default()).is_ok());
}

#[test]
fn test_out_of_range_hour_has_no_wall_clock_time() {
    let d = NaiveDate::from_ymd_opt(2024, 9, 16).unwrap();
    assert!(wall_clock(d, 24).is_none());
    assert!(wall_clock(d, 99).is_none());
    assert!(local_instant(&Utc, d, 99).is_none());
    assert_eq!(wall_clock(d, 18), d.and_hms_opt(18, 0, 0));
}

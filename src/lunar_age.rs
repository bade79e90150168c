use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::catalog::PHASE_COUNT;
use crate::types::CalendarConfig;

pub const SYNODIC_MONTH_DAYS: f64 = 29.530588;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

pub const REFERENCE_YEAR: i32 = 2024;
pub const REFERENCE_MONTH: u32 = 1;
pub const REFERENCE_DAY: u32 = 11;

pub fn reference_new_moon() -> NaiveDate {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, REFERENCE_MONTH, REFERENCE_DAY).unwrap_or_default()
}

pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

pub fn wall_clock(date: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    date.and_hms_opt(hour, 0, 0)
}

/// `None` for an hour outside 0..=23 or a wall-clock time skipped by DST.
/// Ambiguous times resolve to the earlier instant.
pub fn local_instant<Tz: TimeZone>(tz: &Tz, date: NaiveDate, hour: u32) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&wall_clock(date, hour)?).earliest()
}

pub fn cycle_age(elapsed_days: f64, synodic: f64) -> f64 {
    let age = elapsed_days.rem_euclid(synodic);
    // rem_euclid can round up to exactly `synodic` for tiny negative inputs
    if age >= synodic {
        0.0
    } else {
        age
    }
}

pub fn lunar_age<Tz: TimeZone>(instant: &DateTime<Tz>, config: &CalendarConfig) -> f64 {
    let reference = midnight(config.reference_new_moon);
    let elapsed = match instant.timezone().from_local_datetime(&reference).earliest() {
        Some(start) => {
            (instant.timestamp_millis() - start.timestamp_millis()) as f64 / 1000.0 / SECONDS_PER_DAY
        }
        None => {
            tracing::warn!(%reference, "reference midnight skipped by DST, using wall-clock difference");
            naive_elapsed_days(instant.naive_local(), reference)
        }
    };
    cycle_age(elapsed, config.synodic_month_days)
}

pub fn naive_lunar_age(local: NaiveDateTime, config: &CalendarConfig) -> f64 {
    let reference = midnight(config.reference_new_moon);
    cycle_age(naive_elapsed_days(local, reference), config.synodic_month_days)
}

fn naive_elapsed_days(local: NaiveDateTime, reference: NaiveDateTime) -> f64 {
    let delta = local.signed_duration_since(reference);
    delta.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

pub fn day_in_cycle(age: f64, synodic: f64) -> f64 {
    age / synodic * PHASE_COUNT as f64
}

pub fn raw_day_index(age: f64, synodic: f64) -> i64 {
    day_in_cycle(age, synodic).round() as i64
}

/// Both ends wrap to Hilo; an overflow past 30 starts the next cycle.
pub fn wrap_day_index(raw: i64) -> u32 {
    if raw <= 0 || raw > PHASE_COUNT as i64 {
        1
    } else {
        raw as u32
    }
}

pub fn day_index(age: f64, synodic: f64) -> u32 {
    wrap_day_index(raw_day_index(age, synodic))
}

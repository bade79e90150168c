use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, TimeZone};
use parking_lot::Mutex;

use crate::catalog::{DARK_MOON_DAY, FULL_MOON_DAY, NEW_MOON_DAY};
use crate::error::ConfigError;
use crate::gregorian;
use crate::lunar_age;
use crate::types::{CalendarConfig, DayTransition, Transition};

pub const SIGNIFICANT_DAYS: [u32; 3] = [NEW_MOON_DAY, FULL_MOON_DAY, DARK_MOON_DAY];

pub type MonthKey = (i32, u32);

pub struct TransitionDetector<Tz: TimeZone> {
    tz: Tz,
    config: CalendarConfig,
    cache: Mutex<HashMap<MonthKey, Option<DayTransition>>>,
}

impl<Tz: TimeZone> TransitionDetector<Tz> {
    pub fn new(tz: Tz, config: CalendarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tz,
            config,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    fn day_index_at(&self, date: NaiveDate, hour: u32) -> Option<u32> {
        let instant = lunar_age::local_instant(&self.tz, date, hour)?;
        let age = lunar_age::lunar_age(&instant, &self.config);
        Some(lunar_age::day_index(age, self.config.synodic_month_days))
    }

    pub fn new_moon_transition(&self, date: NaiveDate) -> Option<Transition> {
        let midnight = lunar_age::local_instant(&self.tz, date, 0)?;
        let age = lunar_age::lunar_age(&midnight, &self.config);
        (lunar_age::raw_day_index(age, self.config.synodic_month_days) == 0).then_some(Transition {
            ending: DARK_MOON_DAY,
            beginning: NEW_MOON_DAY,
        })
    }

    pub fn boundary_transition(&self, date: NaiveDate) -> Option<Transition> {
        let morning = self.day_index_at(date, self.config.morning_hour)?;
        let evening = self.day_index_at(date, self.config.evening_hour)?;
        (morning != evening && SIGNIFICANT_DAYS.contains(&evening)).then_some(Transition {
            ending: morning,
            beginning: evening,
        })
    }

    pub fn scan_for_new_moon_transition(&self, year: i32, month: u32) -> Option<DayTransition> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        gregorian::month_dates(first).find_map(|date| {
            self.new_moon_transition(date).map(|transition| DayTransition {
                day: date.day(),
                transition,
            })
        })
    }

    pub fn scan_for_boundary_transition(&self, year: i32, month: u32) -> Option<DayTransition> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        gregorian::month_dates(first).find_map(|date| {
            self.boundary_transition(date).map(|transition| DayTransition {
                day: date.day(),
                transition,
            })
        })
    }

    pub fn first_transition(&self, year: i32, month: u32) -> Option<DayTransition> {
        let cached = self.cache.lock().get(&(year, month)).copied();
        if let Some(first) = cached {
            tracing::trace!(year, month, "transition cache hit");
            return first;
        }

        // Scanning happens outside the lock; a racing thread computes the
        // same value.
        let found = self
            .scan_for_new_moon_transition(year, month)
            .map(|t| ("new moon", t))
            .or_else(|| {
                self.scan_for_boundary_transition(year, month)
                    .map(|t| ("boundary", t))
            });
        match found {
            Some((rule, t)) => tracing::debug!(
                year,
                month,
                day = t.day,
                ending = t.transition.ending,
                beginning = t.transition.beginning,
                rule,
                "transition day found"
            ),
            None => tracing::debug!(year, month, "no transition day"),
        }

        let first = found.map(|(_, t)| t);
        self.cache.lock().insert((year, month), first);
        first
    }

    /// Only the first qualifying day of the month is reported.
    pub fn transition_for(&self, date: NaiveDate) -> Option<Transition> {
        self.first_transition(date.year(), date.month())
            .filter(|t| t.day == date.day())
            .map(|t| t.transition)
    }

    pub fn cached_months(&self) -> Vec<MonthKey> {
        let mut keys: Vec<MonthKey> = self.cache.lock().keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

impl<Tz: TimeZone> std::fmt::Debug for TransitionDetector<Tz> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionDetector")
            .field("config", &self.config)
            .field("cached_months", &self.cache.lock().len())
            .finish()
    }
}

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::catalog;
use crate::error::ConfigError;
use crate::lunar_age;
use crate::phase;
use crate::transition::TransitionDetector;
use crate::types::{CalendarConfig, MoonPhase, PhaseResult};

#[derive(Debug)]
pub struct LunarCalendar<Tz: TimeZone> {
    tz: Tz,
    config: CalendarConfig,
    transitions: TransitionDetector<Tz>,
}

impl<Tz: TimeZone> LunarCalendar<Tz> {
    pub fn new(tz: Tz, config: CalendarConfig) -> Result<Self, ConfigError> {
        catalog::validate()?;
        Ok(Self {
            transitions: TransitionDetector::new(tz.clone(), config)?,
            tz,
            config,
        })
    }

    pub fn with_default_config(tz: Tz) -> Result<Self, ConfigError> {
        Self::new(tz, CalendarConfig::default())
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn transitions(&self) -> &TransitionDetector<Tz> {
        &self.transitions
    }

    pub fn lunar_age<Tz2: TimeZone>(&self, instant: &DateTime<Tz2>) -> f64 {
        lunar_age::lunar_age(&instant.with_timezone(&self.tz), &self.config)
    }

    /// Lunar age at local midnight of `date`.
    pub fn lunar_age_on(&self, date: NaiveDate) -> f64 {
        match lunar_age::local_instant(&self.tz, date, 0) {
            Some(midnight) => lunar_age::lunar_age(&midnight, &self.config),
            None => {
                tracing::warn!(%date, "local midnight skipped by DST, using wall-clock date");
                lunar_age::naive_lunar_age(lunar_age::midnight(date), &self.config)
            }
        }
    }

    pub fn day_index_on(&self, date: NaiveDate) -> u32 {
        lunar_age::day_index(self.lunar_age_on(date), self.config.synodic_month_days)
    }

    pub fn moon_phase(&self, day_index: i64) -> MoonPhase {
        phase::moon_phase(day_index, self.config.group_layout)
    }

    /// Phase shown for a calendar date. On the month's transition day the
    /// primary phase is the one ending that morning and the secondary the one
    /// beginning that evening.
    pub fn resolve_phase(&self, date: NaiveDate) -> PhaseResult {
        match self.transitions.transition_for(date) {
            Some(t) => PhaseResult {
                primary: self.moon_phase(t.ending as i64),
                secondary: Some(self.moon_phase(t.beginning as i64)),
            },
            None => PhaseResult {
                primary: self.moon_phase(self.day_index_on(date) as i64),
                secondary: None,
            },
        }
    }

    pub fn resolve_phase_at<Tz2: TimeZone>(&self, instant: &DateTime<Tz2>) -> PhaseResult {
        self.resolve_phase(instant.with_timezone(&self.tz).date_naive())
    }
}

impl LunarCalendar<Local> {
    pub fn local() -> Result<Self, ConfigError> {
        Self::with_default_config(Local)
    }
}

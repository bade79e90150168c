use chrono::NaiveDate;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseRecord {
    pub day: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub planting: &'static str,
    pub fishing: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKind {
    Hoonui,
    Poepoe,
    Hoemi,
}

impl GroupKind {
    pub const ALL: [GroupKind; 3] = [GroupKind::Hoonui, GroupKind::Poepoe, GroupKind::Hoemi];
}

/// `Legacy` is the older 1-10 / 11-16 / 17-30 split found on some printed
/// calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupLayout {
    #[default]
    Canonical,
    Legacy,
}

impl GroupLayout {
    pub fn range(self, kind: GroupKind) -> (u32, u32) {
        match (self, kind) {
            (_, GroupKind::Hoonui) => (1, 10),
            (GroupLayout::Canonical, GroupKind::Poepoe) => (11, 20),
            (GroupLayout::Canonical, GroupKind::Hoemi) => (21, 30),
            (GroupLayout::Legacy, GroupKind::Poepoe) => (11, 16),
            (GroupLayout::Legacy, GroupKind::Hoemi) => (17, 30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseGroup {
    pub kind: GroupKind,
    pub name: &'static str,
    pub description: &'static str,
    pub gloss: &'static str,
    pub start: u32,
    pub end: u32,
}

impl PhaseGroup {
    pub fn contains(&self, day: u32) -> bool {
        day >= self.start && day <= self.end
    }

    pub fn night_count(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn days(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoonPhase {
    pub day: u32,
    pub record: &'static PhaseRecord,
    pub group: PhaseGroup,
    pub grid_position: u32,
    pub index_in_group: u32,
}

impl MoonPhase {
    pub fn name(&self) -> &'static str {
        self.record.name
    }

    pub fn description(&self) -> &'static str {
        self.record.description
    }

    pub fn planting(&self) -> &'static str {
        self.record.planting
    }

    pub fn fishing(&self) -> &'static str {
        self.record.fishing
    }
}

/// `secondary` is set only on a transition day and always follows `primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseResult {
    pub primary: MoonPhase,
    pub secondary: Option<MoonPhase>,
}

impl PhaseResult {
    pub fn is_transition_day(&self) -> bool {
        self.secondary.is_some()
    }

    /// The phase in effect at the end of the day.
    pub fn evening(&self) -> MoonPhase {
        self.secondary.unwrap_or(self.primary)
    }

    pub fn label(&self) -> String {
        match self.secondary {
            Some(next) => format!("{} / {}", self.primary.name(), next.name()),
            None => self.primary.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub ending: u32,
    pub beginning: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayTransition {
    pub day: u32,
    pub transition: Transition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoonDay {
    pub date: NaiveDate,
    pub day: u32,
    pub phase: PhaseResult,
    pub is_overlap: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthData {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub month_days: u32,
    pub start_weekday: u32,
    pub calendar: Vec<MoonDay>,
    pub built: Vec<MoonDay>,
}

impl MonthData {
    pub fn day(&self, day: u32) -> Option<&MoonDay> {
        self.built.get(day.checked_sub(1)? as usize)
    }

    pub fn transition_day(&self) -> Option<&MoonDay> {
        self.built.iter().find(|d| d.phase.is_transition_day())
    }

    pub fn rows(&self) -> usize {
        self.calendar.len().div_ceil(7)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupCell {
    pub lunar_day: u32,
    pub calendar_day: Option<u32>,
    pub is_filled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    pub group: PhaseGroup,
    pub cells: Vec<GroupCell>,
    pub is_active_group: bool,
}

impl GroupRow {
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Hawaiian,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarConfig {
    pub reference_new_moon: NaiveDate,
    pub synodic_month_days: f64,
    pub group_layout: GroupLayout,
    pub morning_hour: u32,
    pub evening_hour: u32,
    pub locale: Locale,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            reference_new_moon: crate::lunar_age::reference_new_moon(),
            synodic_month_days: crate::lunar_age::SYNODIC_MONTH_DAYS,
            group_layout: GroupLayout::Canonical,
            morning_hour: 6,
            evening_hour: 18,
            locale: Locale::English,
        }
    }
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.synodic_month_days.is_finite() || self.synodic_month_days <= 0.0 {
            return Err(ConfigError::InvalidSynodicLength(self.synodic_month_days));
        }
        for hour in [self.morning_hour, self.evening_hour] {
            if hour > 23 {
                return Err(ConfigError::InvalidHour(hour));
            }
        }
        if self.morning_hour >= self.evening_hour {
            return Err(ConfigError::HoursOutOfOrder {
                morning: self.morning_hour,
                evening: self.evening_hour,
            });
        }
        Ok(())
    }
}

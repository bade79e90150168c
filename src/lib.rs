pub mod calendar;
pub mod catalog;
pub mod error;
pub mod gregorian;
pub mod lunar_age;
pub mod month_grid;
pub mod phase;
pub mod progress;
pub mod transition;
pub mod types;

pub use calendar::LunarCalendar;

pub use catalog::{
    group, group_for_day, groups, phase_by_name, phase_record, DARK_MOON_DAY, FULL_MOON_DAY,
    NEW_MOON_DAY, PHASES, PHASE_COUNT,
};

pub use error::{CatalogError, ConfigError};

pub use gregorian::{days_in_month, first_of_month, month_name, weekday_index};

pub use lunar_age::{
    day_in_cycle, day_index, lunar_age, raw_day_index, reference_new_moon, wrap_day_index,
    SYNODIC_MONTH_DAYS,
};

pub use month_grid::{grid_length, LONG_GRID_LENGTH, SHORT_GRID_LENGTH};

pub use phase::{clamp_day_index, moon_phase, next_day_index};

pub use progress::{active_lunar_day, calendar_days_by_lunar_day};

pub use transition::{TransitionDetector, SIGNIFICANT_DAYS};

pub use types::{
    CalendarConfig, DayTransition, GroupCell, GroupKind, GroupLayout, GroupRow, Locale,
    MonthData, MoonDay, MoonPhase, PhaseGroup, PhaseRecord, PhaseResult, Transition,
};

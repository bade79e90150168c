use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("phase table has {0} entries, expected 30")]
    WrongLength(usize),
    #[error("phase table entry {index} is day {found}, expected day {expected}")]
    OutOfOrder { index: usize, expected: u32, found: u32 },
    #[error("phase {0} has an empty name or description")]
    Incomplete(u32),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("synodic month length must be a positive finite number of days, got {0}")]
    InvalidSynodicLength(f64),
    #[error("hour {0} is outside 0..=23")]
    InvalidHour(u32),
    #[error("morning hour {morning} must be earlier than evening hour {evening}")]
    HoursOutOfOrder { morning: u32, evening: u32 },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

use chrono::{Datelike, NaiveDate, TimeZone};

use crate::calendar::LunarCalendar;
use crate::gregorian;
use crate::types::{MonthData, MoonDay};

pub const WEEK_LENGTH: usize = 7;
pub const SHORT_GRID_LENGTH: usize = 35;
pub const LONG_GRID_LENGTH: usize = 42;

pub fn grid_length(start_weekday: usize, month_days: usize) -> usize {
    if start_weekday + month_days <= SHORT_GRID_LENGTH {
        SHORT_GRID_LENGTH
    } else {
        LONG_GRID_LENGTH
    }
}

fn mark_overlap(days: &[MoonDay]) -> impl Iterator<Item = MoonDay> + '_ {
    days.iter().map(|d| MoonDay {
        is_overlap: true,
        ..*d
    })
}

impl<Tz: TimeZone> LunarCalendar<Tz> {
    pub fn build_month_days(&self, date: NaiveDate) -> Vec<MoonDay> {
        gregorian::month_dates(date)
            .map(|d| MoonDay {
                date: d,
                day: d.day(),
                phase: self.resolve_phase(d),
                is_overlap: false,
            })
            .collect()
    }

    /// Builds the month containing `anchor`. With `include_overlap` the
    /// `calendar` list is padded with the tail of the previous month and the
    /// head of the next one to fill a 35 or 42 cell grid.
    pub fn build_month_data(&self, anchor: NaiveDate, include_overlap: bool) -> MonthData {
        let first = gregorian::first_of_month(anchor);
        let built = self.build_month_days(first);
        let start_weekday = gregorian::weekday_index(first);

        let calendar = if include_overlap {
            self.pad_month(first, &built, start_weekday as usize)
                .unwrap_or_else(|| built.clone())
        } else {
            built.clone()
        };

        MonthData {
            year: first.year(),
            month: first.month(),
            month_name: gregorian::month_name(first.month(), self.config().locale),
            month_days: built.len() as u32,
            start_weekday,
            calendar,
            built,
        }
    }

    fn pad_month(
        &self,
        first: NaiveDate,
        built: &[MoonDay],
        start_weekday: usize,
    ) -> Option<Vec<MoonDay>> {
        let previous = self.build_month_days(gregorian::previous_month(first)?);
        let next = self.build_month_days(gregorian::next_month(first)?);

        let total = grid_length(start_weekday, built.len());
        let trailing = total.checked_sub(start_weekday + built.len())?;
        let leading = previous.get(previous.len().checked_sub(start_weekday)?..)?;
        let trailing = next.get(..trailing)?;

        let mut cells = Vec::with_capacity(total);
        cells.extend(mark_overlap(leading));
        cells.extend_from_slice(built);
        cells.extend(mark_overlap(trailing));
        Some(cells)
    }
}

use std::collections::HashMap;

use chrono::{NaiveDate, TimeZone};

use crate::calendar::LunarCalendar;
use crate::catalog;
use crate::types::{GroupCell, GroupRow, MonthData};

/// Night index of `active` as shown in `month`, or resolved directly when the
/// date lies outside the built month.
pub fn active_lunar_day<Tz: TimeZone>(
    calendar: &LunarCalendar<Tz>,
    month: &MonthData,
    active: NaiveDate,
) -> u32 {
    month
        .built
        .iter()
        .find(|d| d.date == active)
        .map(|d| d.phase.primary.day)
        .unwrap_or_else(|| calendar.resolve_phase(active).primary.day)
}

/// Maps each night index to the first day of `month` that shows it. A
/// transition day also claims its secondary phase when no other day does.
pub fn calendar_days_by_lunar_day(month: &MonthData) -> HashMap<u32, u32> {
    let mut by_lunar = HashMap::new();
    for d in &month.built {
        by_lunar.entry(d.phase.primary.day).or_insert(d.day);
    }
    for d in &month.built {
        if let Some(next) = d.phase.secondary {
            by_lunar.entry(next.day).or_insert(d.day);
        }
    }
    by_lunar
}

impl<Tz: TimeZone> LunarCalendar<Tz> {
    pub fn build_group_rows(&self, month: &MonthData, active: NaiveDate) -> [GroupRow; 3] {
        let active_day = active_lunar_day(self, month, active);
        let by_lunar = calendar_days_by_lunar_day(month);

        catalog::groups(self.config().group_layout).map(|group| GroupRow {
            cells: group
                .days()
                .map(|lunar_day| GroupCell {
                    lunar_day,
                    calendar_day: by_lunar.get(&lunar_day).copied(),
                    is_filled: lunar_day <= active_day,
                })
                .collect(),
            is_active_group: group.contains(active_day),
            group,
        })
    }
}

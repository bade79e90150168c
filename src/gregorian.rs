use chrono::{Datelike, Months, NaiveDate};

use crate::types::Locale;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const HAWAIIAN_MONTHS: [&str; 12] = [
    "Ianuali",
    "Pepeluali",
    "Malaki",
    "ʻApelila",
    "Mei",
    "Iune",
    "Iulai",
    "ʻAukake",
    "Kepakemapa",
    "ʻOkakopa",
    "Nowemapa",
    "Kekemapa",
];

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

/// Day count of `month` (1-12); 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn month_name(month: u32, locale: Locale) -> &'static str {
    let names = match locale {
        Locale::English => &ENGLISH_MONTHS,
        Locale::Hawaiian => &HAWAIIAN_MONTHS,
    };
    month
        .checked_sub(1)
        .and_then(|i| names.get(i as usize))
        .copied()
        .unwrap_or("")
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn previous_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date).checked_sub_months(Months::new(1))
}

pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date).checked_add_months(Months::new(1))
}

pub fn month_dates(date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let len = days_in_month(date.year(), date.month());
    (1..=len).filter_map(move |day| date.with_day(day))
}

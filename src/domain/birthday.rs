//! Birthday calendar arithmetic

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Next occurrence of `birthday`'s month/day on or after `today`.
///
/// A 29 February birthday falls on 28 February in non-leap years.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, today.year());
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(birthday)
}

/// Days from `today` until the next occurrence of `birthday` (0 if today).
pub fn days_until(birthday: NaiveDate, today: NaiveDate) -> i64 {
    (next_occurrence(birthday, today) - today).num_days()
}

/// Shift a weekend date forward to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

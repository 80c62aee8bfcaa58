//! The slice of the ISO calendar the Discordian date builds on, backed by `chrono`.
//!
//! Everything here speaks in ISO years and ISO days-of-year; conversion to
//! Discordian numbering happens in [`crate::calendar`].

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::consts::{DAYS_IN_LEAP_YEAR, DAYS_IN_YEAR, UNIX_EPOCH_DAYS_FROM_CE};

/// Earliest date the host calendar can represent.
pub const MIN_DATE: NaiveDate = NaiveDate::MIN;
/// Latest date the host calendar can represent.
pub const MAX_DATE: NaiveDate = NaiveDate::MAX;

/// Resolves an ISO year and day-of-year, `None` if either is out of range.
pub fn from_year_day(year: i32, day_of_year: u32) -> Option<NaiveDate> {
    NaiveDate::from_yo_opt(year, day_of_year)
}

pub fn year_day_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.ordinal())
}

/// Days since 1970-01-01.
pub fn epoch_day_of(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

pub fn date_from_epoch_day(epoch_day: i64) -> Option<NaiveDate> {
    let days_from_ce = epoch_day.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?;
    i32::try_from(days_from_ce)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

pub fn is_leap_year(year: i32) -> bool {
    crate::calendar::is_iso_leap_year(i64::from(year))
}

pub fn length_of_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_YEAR
    }
}

/// Signed day arithmetic, `None` when the result leaves the host range.
pub fn plus_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

/// Signed month arithmetic, clamping the day-of-month like the host calendar.
pub fn plus_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

pub fn days_until(start: NaiveDate, end: NaiveDate) -> i64 {
    epoch_day_of(end) - epoch_day_of(start)
}

/// Whole ISO months from `start` to `end`, truncated toward zero.
pub fn months_until(start: NaiveDate, end: NaiveDate) -> i64 {
    // Packing the day into the low bits makes a partial month round toward zero.
    let packed = |d: NaiveDate| (proleptic_month(d) * 32) + i64::from(d.day());
    (packed(end) - packed(start)) / 32
}

fn proleptic_month(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

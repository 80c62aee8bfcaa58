//! Pure conversion and validation functions shared by every Discordian date.

use crate::consts::{
    CENTURY_CYCLE, DAY_NAMES, DAYS_PER_SEASON, DAYS_PER_WEEK, GREGORIAN_CYCLE, ISO_YEAR_OFFSET,
    LEAP_DAY_SENTINEL, LEAP_YEAR_CYCLE, MIN_DAY, SEASON_NAMES, SEASONS_PER_YEAR, ST_TIBS_DAY,
};
use crate::prelude::*;
use crate::DateError;

/// Symbolic fields a [`crate::DiscordianDate`] can be queried and adjusted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    /// Proleptic Discordian year
    #[display(fmt = "year")]
    Year,
    /// Year within the single era, identical to [`Field::Year`]
    #[display(fmt = "year-of-era")]
    YearOfEra,
    #[display(fmt = "era")]
    Era,
    /// The Discordian "month"
    #[display(fmt = "season")]
    Season,
    #[display(fmt = "day-of-season")]
    DayOfSeason,
    #[display(fmt = "day-of-week")]
    DayOfWeek,
    /// ISO day-of-year, St. Tib's Day included
    #[display(fmt = "day-of-year")]
    DayOfYear,
    /// Days since 1970-01-01
    #[display(fmt = "epoch-day")]
    EpochDay,
}

/// A closed interval of valid values for a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{min}..{max}")]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    pub const fn new(min: i64, max: i64) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    #[inline]
    pub const fn is_valid(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Checks `value` against this range, naming `field` in the error.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if `value` falls outside the range.
    pub fn check(&self, value: i64, field: Field) -> Result<(), DateError> {
        validate(field, value, self.min, self.max)
    }
}

/// Translates an ISO year to a Discordian year.
///
/// Wraps at the ends of `i64`, so the two conversions invert each other for
/// every input.
#[inline]
pub const fn iso_year_to_discordian(iso_year: i64) -> i64 {
    iso_year.wrapping_add(ISO_YEAR_OFFSET)
}

/// Translates a Discordian year to an ISO year.
#[inline]
pub const fn discordian_year_to_iso(discordian_year: i64) -> i64 {
    discordian_year.wrapping_sub(ISO_YEAR_OFFSET)
}

/// Gregorian leap-year rule on a proleptic ISO year.
pub const fn is_iso_leap_year(iso_year: i64) -> bool {
    (iso_year % LEAP_YEAR_CYCLE == 0 && iso_year % CENTURY_CYCLE != 0)
        || (iso_year % GREGORIAN_CYCLE == 0)
}

/// A Discordian year is leap exactly when its ISO counterpart is.
pub const fn is_leap_year(discordian_year: i64) -> bool {
    is_iso_leap_year(discordian_year_to_iso(discordian_year))
}

/// Generic bound check behind every season/day validator.
///
/// # Errors
/// Returns `DateError::OutOfRange` if `value` is not in `min..=max`.
pub fn validate(field: Field, value: i64, min: i64, max: i64) -> Result<(), DateError> {
    if value < min || value > max {
        log::debug!("rejecting Discordian {field} {value}, valid values are {min}..{max}");
        return Err(DateError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// # Errors
/// Returns `DateError::OutOfRange` unless `season` is in `1..=5`.
pub fn check_valid_season(season: i64) -> Result<(), DateError> {
    validate(
        Field::Season,
        season,
        i64::from(MIN_DAY),
        i64::from(SEASONS_PER_YEAR),
    )
}

/// # Errors
/// Returns `DateError::OutOfRange` unless `day_of_season` is in `1..=73`.
pub fn check_valid_day_of_season(day_of_season: i64) -> Result<(), DateError> {
    validate(
        Field::DayOfSeason,
        day_of_season,
        i64::from(MIN_DAY),
        i64::from(DAYS_PER_SEASON),
    )
}

/// # Errors
/// Returns `DateError::OutOfRange` unless `day_of_week` is in `1..=5`.
pub fn check_valid_day_of_week(day_of_week: i64) -> Result<(), DateError> {
    validate(
        Field::DayOfWeek,
        day_of_week,
        i64::from(MIN_DAY),
        i64::from(DAYS_PER_WEEK),
    )
}

/// ISO day-of-year for a season and day-of-season.
///
/// In a leap year every day from Chaos 60 onwards is shifted by one so that
/// the ISO slot 60 stays free for St. Tib's Day.
///
/// # Errors
/// Returns `DateError::OutOfRange` if `season` or `day_of_season` is invalid.
pub fn day_of_discordian_year(year: i64, season: u8, day_of_season: u8) -> Result<u16, DateError> {
    check_valid_season(i64::from(season))?;
    check_valid_day_of_season(i64::from(day_of_season))?;

    let mut day_of_year =
        u16::from(season - 1) * u16::from(DAYS_PER_SEASON) + u16::from(day_of_season);
    if is_leap_year(year) && day_of_year >= ST_TIBS_DAY {
        day_of_year += 1;
    }
    Ok(day_of_year)
}

/// Splits an ISO day-of-year into `(season, day_of_season, day_of_week)`.
///
/// St. Tib's Day decodes to `(0, 0, 0)`.
pub const fn decompose(day_of_year: u16, is_leap: bool) -> (u8, u8, u8) {
    debug_assert!(day_of_year >= 1 && day_of_year <= 366);

    if is_leap && day_of_year == ST_TIBS_DAY {
        return (LEAP_DAY_SENTINEL, LEAP_DAY_SENTINEL, LEAP_DAY_SENTINEL);
    }
    let adjusted = if is_leap && day_of_year > ST_TIBS_DAY {
        day_of_year - 1
    } else {
        day_of_year
    };
    from_adjusted_day(adjusted)
}

/// Decodes a leap-adjusted day-of-year in `1..=365`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn from_adjusted_day(adjusted: u16) -> (u8, u8, u8) {
    let index = adjusted - 1;
    let season = (index / DAYS_PER_SEASON as u16) as u8 + 1;
    let day_of_season = (index % DAYS_PER_SEASON as u16) as u8 + 1;
    let day_of_week = (index % DAYS_PER_WEEK as u16) as u8 + 1;
    (season, day_of_season, day_of_week)
}

/// Standard name of a season in `1..=5`.
///
/// # Errors
/// Returns `DateError::OutOfRange` for anything else, including the leap-day 0.
pub fn season_name(season: u8) -> Result<&'static str, DateError> {
    check_valid_season(i64::from(season))?;
    Ok(SEASON_NAMES[usize::from(season - 1)])
}

/// Standard name of a day-of-week in `1..=5`.
///
/// # Errors
/// Returns `DateError::OutOfRange` for anything else, including the leap-day 0.
pub fn day_name(day_of_week: u8) -> Result<&'static str, DateError> {
    check_valid_day_of_week(i64::from(day_of_week))?;
    Ok(DAY_NAMES[usize::from(day_of_week - 1)])
}

//! The Discordian calendar as a date type.
//!
//! A [`DiscordianDate`] wraps a single ISO date, so every Discordian date has
//! exactly one epoch-day representation and every derived field (season,
//! day-of-season, day-of-week) is decoded on demand. A Discordian year has
//! five 73-day seasons and a five-day week. In ISO leap years the 60th day,
//! St. Tib's Day, sits outside both; its season, day-of-season and
//! day-of-week all read as `0`.

mod calendar;
mod chronology;
mod consts;
pub mod iso;
mod period;
mod prelude;

pub use calendar::{
    Field, ValueRange, check_valid_day_of_season, check_valid_day_of_week, check_valid_season,
    day_name, day_of_discordian_year, decompose, discordian_year_to_iso, is_iso_leap_year,
    is_leap_year, iso_year_to_discordian, season_name, validate,
};
pub use chronology::{
    ChronoLocalDate, Chronology, DiscordianChronology, DiscordianEra, IsoChronology, Temporal,
};
pub use consts::*;
pub use period::{Period, Unit};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for Discordian date construction, field access and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A field value lies outside its valid interval.
    #[error("{value} is not a valid Discordian {field}. Valid values are {min}..{max}")]
    OutOfRange {
        field: Field,
        value: i64,
        min:   i64,
        max:   i64,
    },

    /// The operation has no meaning in a single-era calendar.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Unit scaling overflowed, or the result left the representable range.
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// The other value is not a calendar date.
    #[error("Unable to calculate period between objects of two different types")]
    IncompatibleType,

    /// The other date belongs to a different calendar system.
    #[error(
        "Unable to calculate period between two different chronologies: expected {expected}, found {found}"
    )]
    IncompatibleChronology {
        expected: &'static str,
        found:    &'static str,
    },
}

/// A date in the Discordian calendar.
///
/// Ordering, equality and hashing follow the underlying day count. Serialized
/// as its epoch day (days since 1970-01-01).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct DiscordianDate {
    iso: NaiveDate,
}

impl DiscordianDate {
    /// Creates a date from year, season (1-5) and day-of-season (1-73).
    ///
    /// St. Tib's Day cannot be reached this way since it lies outside every
    /// season; use [`DiscordianDate::of_leap_day`].
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if any field is out of range.
    pub fn of(year: i64, season: u8, day_of_season: u8) -> Result<Self, DateError> {
        DiscordianChronology::INSTANCE
            .range(Field::Year)
            .check(year, Field::Year)?;
        let day_of_year = calendar::day_of_discordian_year(year, season, day_of_season)?;
        Self::of_year_day(year, day_of_year)
    }

    /// Creates a date from year and ISO day-of-year (1-365, or 366 in a leap year).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the year or day-of-year is out of range.
    pub fn of_year_day(year: i64, day_of_year: u16) -> Result<Self, DateError> {
        let iso_year = to_iso_year(year)?;
        let max = i64::from(iso::length_of_year(iso_year));
        let value = i64::from(day_of_year);
        calendar::validate(Field::DayOfYear, value, i64::from(MIN_DAY), max)?;

        iso::from_year_day(iso_year, u32::from(day_of_year))
            .map(Self::from)
            .ok_or(DateError::OutOfRange {
                field: Field::DayOfYear,
                value,
                min: i64::from(MIN_DAY),
                max,
            })
    }

    /// St. Tib's Day of `year`.
    ///
    /// The year is not checked for being leap: in a common year this is Chaos 60.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the year is out of range.
    pub fn of_leap_day(year: i64) -> Result<Self, DateError> {
        Self::of_year_day(year, ST_TIBS_DAY)
    }

    /// Creates a date from days since 1970-01-01.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the day lies beyond what `chrono` represents.
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        let range = DiscordianChronology::INSTANCE.range(Field::EpochDay);
        range.check(epoch_day, Field::EpochDay)?;

        iso::date_from_epoch_day(epoch_day)
            .map(Self::from)
            .ok_or(DateError::OutOfRange {
                field: Field::EpochDay,
                value: epoch_day,
                min:   range.min(),
                max:   range.max(),
            })
    }

    /// Days since 1970-01-01.
    pub fn to_epoch_day(self) -> i64 {
        iso::epoch_day_of(self.iso)
    }

    /// The same day in the ISO calendar.
    pub const fn to_iso(self) -> NaiveDate {
        self.iso
    }

    /// Proleptic Discordian year.
    pub fn year(&self) -> i64 {
        calendar::iso_year_to_discordian(i64::from(self.iso.year()))
    }

    /// Always [`DiscordianEra::Yold`].
    pub const fn era(&self) -> DiscordianEra {
        DiscordianEra::Yold
    }

    /// The shared Discordian calendar system.
    pub const fn chronology(&self) -> &'static DiscordianChronology {
        &DiscordianChronology::INSTANCE
    }

    /// Whether the year contains St. Tib's Day.
    pub fn is_leap_year(&self) -> bool {
        iso::is_leap_year(self.iso.year())
    }

    /// Whether this is St. Tib's Day, in which case season, day-of-season and
    /// day-of-week all read as `0` and `Display` prints the leap-day form.
    pub fn is_leap_day(&self) -> bool {
        self.is_leap_year() && self.day_of_year() == ST_TIBS_DAY
    }

    /// ISO day-of-year, counting St. Tib's Day.
    pub fn day_of_year(&self) -> u16 {
        let ordinal = self.iso.ordinal();
        debug_assert!(ordinal <= u32::from(DAYS_IN_LEAP_YEAR));
        u16::try_from(ordinal).unwrap_or(DAYS_IN_LEAP_YEAR)
    }

    /// Season in `1..=5`, or `0` on St. Tib's Day.
    pub fn season(&self) -> u8 {
        self.decomposed().0
    }

    /// Day-of-season in `1..=73`, or `0` on St. Tib's Day.
    pub fn day_of_season(&self) -> u8 {
        self.decomposed().1
    }

    /// Day-of-week in `1..=5`, or `0` on St. Tib's Day.
    pub fn day_of_week(&self) -> u8 {
        self.decomposed().2
    }

    fn decomposed(&self) -> (u8, u8, u8) {
        calendar::decompose(self.day_of_year(), self.is_leap_year())
    }

    /// Name of the season, e.g. `"Chaos"`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` on St. Tib's Day, which has no season.
    pub fn season_name(&self) -> Result<&'static str, DateError> {
        calendar::season_name(self.season())
    }

    /// Name of the day-of-week, e.g. `"Sweetmorn"`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` on St. Tib's Day, which has no weekday.
    pub fn day_name(&self) -> Result<&'static str, DateError> {
        calendar::day_name(self.day_of_week())
    }

    /// Days in a season, 73 for every season.
    pub const fn length_of_season(&self) -> u8 {
        DAYS_PER_SEASON
    }

    /// 365, or 366 in a leap year.
    pub fn length_of_year(&self) -> u16 {
        iso::length_of_year(self.iso.year())
    }

    /// Value of `field` for this date.
    pub fn field_value(&self, field: Field) -> i64 {
        match field {
            Field::Year | Field::YearOfEra => self.year(),
            Field::Era => self.era().value(),
            Field::Season => i64::from(self.season()),
            Field::DayOfSeason => i64::from(self.day_of_season()),
            Field::DayOfWeek => i64::from(self.day_of_week()),
            Field::DayOfYear => i64::from(self.day_of_year()),
            Field::EpochDay => self.to_epoch_day(),
        }
    }

    /// Valid values of `field` within this date's year.
    ///
    /// Season, day-of-season and day-of-week admit `0` in leap years.
    pub fn valid_range(&self, field: Field) -> ValueRange {
        let min = if self.is_leap_year() {
            i64::from(LEAP_DAY_SENTINEL)
        } else {
            i64::from(MIN_DAY)
        };
        match field {
            Field::Season => ValueRange::new(min, i64::from(SEASONS_PER_YEAR)),
            Field::DayOfSeason => ValueRange::new(min, i64::from(DAYS_PER_SEASON)),
            Field::DayOfWeek => ValueRange::new(min, i64::from(DAYS_PER_WEEK)),
            Field::DayOfYear => {
                ValueRange::new(i64::from(MIN_DAY), i64::from(self.length_of_year()))
            },
            Field::Year | Field::YearOfEra | Field::Era | Field::EpochDay => {
                DiscordianChronology::INSTANCE.range(field)
            },
        }
    }

    /// Returns a copy of this date with `field` set to `value`.
    ///
    /// Setting the day-of-season on St. Tib's Day lands in Chaos, and setting
    /// the season on St. Tib's Day keeps day 60. Moving St. Tib's Day to
    /// another year yields that year's leap day (Chaos 60 in a common year).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if `value` is invalid for `field`, or
    /// `DateError::UnsupportedOperation` when setting the weekday of St. Tib's Day.
    pub fn with(self, field: Field, value: i64) -> Result<Self, DateError> {
        if self.field_value(field) == value {
            return Ok(self);
        }
        match field {
            Field::Year | Field::YearOfEra => {
                if self.is_leap_day() {
                    Self::of_leap_day(value)
                } else {
                    Self::of(value, self.season(), self.day_of_season())
                }
            },
            Field::Era => DiscordianEra::of(value).map(|_| self),
            Field::Season => {
                let season = narrow(field, value, MIN_DAY, SEASONS_PER_YEAR)?;
                let day = if self.is_leap_day() {
                    ST_TIBS_DAY_OF_SEASON
                } else {
                    self.day_of_season()
                };
                Self::of(self.year(), season, day)
            },
            Field::DayOfSeason => {
                let day = narrow(field, value, MIN_DAY, DAYS_PER_SEASON)?;
                let season = if self.is_leap_day() {
                    MIN_DAY
                } else {
                    self.season()
                };
                Self::of(self.year(), season, day)
            },
            Field::DayOfWeek => {
                if self.is_leap_day() {
                    return Err(DateError::UnsupportedOperation(
                        "St. Tib's Day is outside the Discordian week",
                    ));
                }
                let target = narrow(field, value, MIN_DAY, DAYS_PER_WEEK)?;
                // Day count with St. Tib's Day removed; weeks tile it exactly.
                let adjusted = u16::from(self.season() - 1) * u16::from(DAYS_PER_SEASON)
                    + u16::from(self.day_of_season());
                let moved = adjusted - u16::from(self.day_of_week()) + u16::from(target);
                let (season, day, _) = calendar::from_adjusted_day(moved);
                Self::of(self.year(), season, day)
            },
            Field::DayOfYear => {
                let max = self.length_of_year();
                calendar::validate(field, value, i64::from(MIN_DAY), i64::from(max))?;
                let day_of_year = u16::try_from(value).map_err(|_| DateError::OutOfRange {
                    field,
                    value,
                    min: i64::from(MIN_DAY),
                    max: i64::from(max),
                })?;
                Self::of_year_day(self.year(), day_of_year)
            },
            Field::EpochDay => Self::of_epoch_day(value),
        }
    }
}

/// Validates `value` against `min..=max` and narrows it to a `u8`.
fn narrow(field: Field, value: i64, min: u8, max: u8) -> Result<u8, DateError> {
    let (min, max) = (i64::from(min), i64::from(max));
    calendar::validate(field, value, min, max)?;
    u8::try_from(value).map_err(|_| DateError::OutOfRange {
        field,
        value,
        min,
        max,
    })
}

fn to_iso_year(year: i64) -> Result<i32, DateError> {
    let range = DiscordianChronology::INSTANCE.range(Field::Year);
    range.check(year, Field::Year)?;
    i32::try_from(calendar::discordian_year_to_iso(year)).map_err(|_| DateError::OutOfRange {
        field: Field::Year,
        value: year,
        min:   range.min(),
        max:   range.max(),
    })
}

impl TryFrom<i64> for DiscordianDate {
    type Error = DateError;

    fn try_from(epoch_day: i64) -> Result<Self, Self::Error> {
        Self::of_epoch_day(epoch_day)
    }
}

impl From<DiscordianDate> for i64 {
    fn from(date: DiscordianDate) -> Self {
        date.to_epoch_day()
    }
}

/// Renders the default format of the UNIX `ddate` command.
///
/// St. Tib's Day has no season or weekday, so its rendering does not sort
/// lexically with the dates around it.
impl fmt::Display for DiscordianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leap_day() {
            return write!(f, "St. Tib's Day! {} {}", self.year(), self.era());
        }
        let day_name = self.day_name().map_err(|_| fmt::Error)?;
        let season_name = self.season_name().map_err(|_| fmt::Error)?;
        write!(
            f,
            "{day_name}, {season_name} {}, {} {}",
            self.day_of_season(),
            self.year(),
            self.era()
        )
    }
}

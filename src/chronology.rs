//! Calendar system identities and the capability traits dates are exchanged through.
//!
//! Both chronologies are unit-like constants with no interior state, so the
//! singletons can be shared freely across threads.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{self, Field, ValueRange};
use crate::consts::{
    DAYS_IN_LEAP_YEAR, DAYS_PER_SEASON, DAYS_PER_WEEK, LEAP_DAY_SENTINEL, MIN_DAY,
    SEASONS_PER_YEAR, YOLD_VALUE,
};
use crate::prelude::*;
use crate::{DateError, DiscordianDate, iso};

/// A calendar system.
pub trait Chronology: fmt::Debug + Send + Sync {
    /// Identifier used to decide whether two dates share a calendar.
    fn id(&self) -> &'static str;

    /// CLDR calendar type, if the calendar has one.
    fn calendar_type(&self) -> Option<&'static str> {
        None
    }

    fn is_leap_year(&self, proleptic_year: i64) -> bool;
}

/// Anything that may be measured against a date.
pub trait Temporal {
    /// Returns the date view of this value, `None` if it is not a calendar date.
    fn as_local_date(&self) -> Option<&dyn ChronoLocalDate>;
}

/// A date without time-of-day in some [`Chronology`].
pub trait ChronoLocalDate {
    fn chronology(&self) -> &'static dyn Chronology;

    /// Days since 1970-01-01, shared by every chronology.
    fn to_epoch_day(&self) -> i64;
}

/// The sole era of the Discordian calendar, Year of Our Lady of Discord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum DiscordianEra {
    #[display(fmt = "YOLD")]
    #[serde(rename = "YOLD")]
    Yold,
}

impl DiscordianEra {
    /// Resolves an era from its numeric value.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for any value other than 1.
    pub fn of(value: i64) -> Result<Self, DateError> {
        calendar::validate(Field::Era, value, YOLD_VALUE, YOLD_VALUE)?;
        Ok(Self::Yold)
    }

    pub const fn value(self) -> i64 {
        YOLD_VALUE
    }

    pub fn chronology(self) -> &'static DiscordianChronology {
        &DISCORDIAN
    }
}

/// The Discordian calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscordianChronology {
    _private: (),
}

static DISCORDIAN: DiscordianChronology = DiscordianChronology::INSTANCE;

impl DiscordianChronology {
    pub const INSTANCE: Self = Self { _private: () };
    pub const ID: &'static str = "Discordian";

    /// # Errors
    /// Returns `DateError::OutOfRange` if any field is invalid.
    pub fn date(&self, year: i64, season: u8, day_of_season: u8) -> Result<DiscordianDate, DateError> {
        DiscordianDate::of(year, season, day_of_season)
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` if the year or day-of-year is invalid.
    pub fn date_year_day(&self, year: i64, day_of_year: u16) -> Result<DiscordianDate, DateError> {
        DiscordianDate::of_year_day(year, day_of_year)
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` if the host calendar cannot represent the day.
    pub fn date_epoch_day(&self, epoch_day: i64) -> Result<DiscordianDate, DateError> {
        DiscordianDate::of_epoch_day(epoch_day)
    }

    /// Re-expresses a date from any chronology as a Discordian date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the host calendar cannot represent the day.
    pub fn date_from(&self, date: &dyn ChronoLocalDate) -> Result<DiscordianDate, DateError> {
        DiscordianDate::of_epoch_day(date.to_epoch_day())
    }

    pub const fn eras(&self) -> &'static [DiscordianEra] {
        &[DiscordianEra::Yold]
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` for any value other than 1.
    pub fn era_of(&self, value: i64) -> Result<DiscordianEra, DateError> {
        DiscordianEra::of(value)
    }

    /// With a single era the year-of-era is already proleptic.
    pub const fn proleptic_year(&self, _era: DiscordianEra, year_of_era: i64) -> i64 {
        year_of_era
    }

    /// Outer bounds of `field` over all years, admitting the leap-day sentinel.
    pub fn range(&self, field: Field) -> ValueRange {
        let sentinel = i64::from(LEAP_DAY_SENTINEL);
        match field {
            Field::Season => ValueRange::new(sentinel, i64::from(SEASONS_PER_YEAR)),
            Field::DayOfSeason => ValueRange::new(sentinel, i64::from(DAYS_PER_SEASON)),
            Field::DayOfWeek => ValueRange::new(sentinel, i64::from(DAYS_PER_WEEK)),
            Field::Era => ValueRange::new(YOLD_VALUE, YOLD_VALUE),
            Field::DayOfYear => ValueRange::new(i64::from(MIN_DAY), i64::from(DAYS_IN_LEAP_YEAR)),
            Field::Year | Field::YearOfEra => ValueRange::new(
                calendar::iso_year_to_discordian(i64::from(iso::MIN_DATE.year())),
                calendar::iso_year_to_discordian(i64::from(iso::MAX_DATE.year())),
            ),
            Field::EpochDay => ValueRange::new(
                iso::epoch_day_of(iso::MIN_DATE),
                iso::epoch_day_of(iso::MAX_DATE),
            ),
        }
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` unless `season` is in `1..=5`.
    pub fn season_name(&self, season: u8) -> Result<&'static str, DateError> {
        calendar::season_name(season)
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` unless `day_of_week` is in `1..=5`.
    pub fn day_name(&self, day_of_week: u8) -> Result<&'static str, DateError> {
        calendar::day_name(day_of_week)
    }
}

impl Chronology for DiscordianChronology {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        calendar::is_leap_year(proleptic_year)
    }
}

/// The proleptic Gregorian calendar of the host date type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoChronology {
    _private: (),
}

static ISO: IsoChronology = IsoChronology::INSTANCE;

impl IsoChronology {
    pub const INSTANCE: Self = Self { _private: () };
    pub const ID: &'static str = "ISO";
}

impl Chronology for IsoChronology {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn calendar_type(&self) -> Option<&'static str> {
        Some("iso8601")
    }

    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        calendar::is_iso_leap_year(proleptic_year)
    }
}

impl ChronoLocalDate for NaiveDate {
    fn chronology(&self) -> &'static dyn Chronology {
        &ISO
    }

    fn to_epoch_day(&self) -> i64 {
        iso::epoch_day_of(*self)
    }
}

impl Temporal for NaiveDate {
    fn as_local_date(&self) -> Option<&dyn ChronoLocalDate> {
        Some(self)
    }
}

impl ChronoLocalDate for DiscordianDate {
    fn chronology(&self) -> &'static dyn Chronology {
        &DISCORDIAN
    }

    fn to_epoch_day(&self) -> i64 {
        iso::epoch_day_of(self.to_iso())
    }
}

impl Temporal for DiscordianDate {
    fn as_local_date(&self) -> Option<&dyn ChronoLocalDate> {
        Some(self)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DAYS_PER_SEASON, DAYS_PER_WEEK, MONTHS_PER_ISO_YEAR, SEASONS_PER_YEAR, ST_TIBS_DAY_OF_SEASON,
};
use crate::prelude::*;
use crate::{DateError, DiscordianChronology, DiscordianDate, Temporal, iso};

/// Units of date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "days")]
    Days,
    /// Five-day Discordian weeks
    #[display(fmt = "weeks")]
    Weeks,
    /// 73-day seasons, the Discordian months
    #[display(fmt = "seasons")]
    Seasons,
    #[display(fmt = "years")]
    Years,
    #[display(fmt = "decades")]
    Decades,
    #[display(fmt = "centuries")]
    Centuries,
    #[display(fmt = "millennia")]
    Millennia,
    #[display(fmt = "eras")]
    Eras,
}

/// Years, seasons and days between two Discordian dates.
///
/// Not normalized: the same span can be expressed differently depending on
/// which end it is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Period {
    years:  i64,
    months: i64,
    days:   i64,
}

impl Period {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(years: i64, months: i64, days: i64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub const fn years(&self) -> i64 {
        self.years
    }

    /// Whole seasons beyond [`Period::years`]
    pub const fn months(&self) -> i64 {
        self.months
    }

    pub const fn days(&self) -> i64 {
        self.days
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

/// ISO-8601 duration notation, e.g. `P1Y2M3D`, with `P0D` for zero.
impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

fn scale(amount: i64, factor: i64) -> Result<i64, DateError> {
    amount.checked_mul(factor).ok_or_else(|| {
        log::debug!("overflow scaling {amount} by {factor}");
        DateError::ArithmeticOverflow("unit scaling overflowed")
    })
}

fn out_of_bounds() -> DateError {
    DateError::ArithmeticOverflow("result is beyond the supported date range")
}

impl DiscordianDate {
    /// Adds `amount` of `unit`.
    ///
    /// Weeks and seasons are plain multiples of 5 and 73 days, so adding a
    /// season does not snap to season boundaries in a leap year. Years and
    /// larger units follow ISO month arithmetic.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedOperation` for [`Unit::Eras`], and
    /// `DateError::ArithmeticOverflow` if scaling overflows or the result is
    /// out of range.
    pub fn plus(self, amount: i64, unit: Unit) -> Result<Self, DateError> {
        log::trace!("adding {amount} {unit} to {self}");
        match unit {
            Unit::Days => iso::plus_days(self.to_iso(), amount)
                .map(Self::from)
                .ok_or_else(out_of_bounds),
            Unit::Weeks => self.plus(scale(amount, i64::from(DAYS_PER_WEEK))?, Unit::Days),
            Unit::Seasons => self.plus(scale(amount, i64::from(DAYS_PER_SEASON))?, Unit::Days),
            Unit::Years => self.plus_iso_months(amount, MONTHS_PER_ISO_YEAR),
            Unit::Decades => self.plus_iso_months(amount, MONTHS_PER_ISO_YEAR * 10),
            Unit::Centuries => self.plus_iso_months(amount, MONTHS_PER_ISO_YEAR * 100),
            Unit::Millennia => self.plus_iso_months(amount, MONTHS_PER_ISO_YEAR * 1000),
            Unit::Eras => Err(DateError::UnsupportedOperation(
                "Unable to add era, Discordian calendar system only has one era",
            )),
        }
    }

    fn plus_iso_months(self, amount: i64, months_per_unit: i64) -> Result<Self, DateError> {
        let months = scale(amount, months_per_unit)?;
        iso::plus_months(self.to_iso(), months)
            .map(Self::from)
            .ok_or_else(out_of_bounds)
    }

    /// Subtracts `amount` of `unit`; see [`DiscordianDate::plus`].
    ///
    /// # Errors
    /// Same as [`DiscordianDate::plus`], plus `DateError::ArithmeticOverflow`
    /// if `amount` cannot be negated.
    pub fn minus(self, amount: i64, unit: Unit) -> Result<Self, DateError> {
        let negated = amount
            .checked_neg()
            .ok_or(DateError::ArithmeticOverflow("amount cannot be negated"))?;
        self.plus(negated, unit)
    }

    /// Season count since year 0, treating St. Tib's Day as part of Chaos.
    fn epoch_month(self) -> i64 {
        let season = if self.is_leap_day() { 1 } else { self.season() };
        self.year() * i64::from(SEASONS_PER_YEAR) + i64::from(season) - 1
    }

    fn effective_day_of_season(self) -> i64 {
        if self.is_leap_day() {
            i64::from(ST_TIBS_DAY_OF_SEASON)
        } else {
            i64::from(self.day_of_season())
        }
    }

    /// Calendar difference from `self` to `end` in years, seasons and days.
    ///
    /// Borrowing works like ISO date subtraction with 73-day months. Going
    /// forward, a negative day count borrows the exact day span of a season;
    /// going backward it borrows a flat 73 days, so reversing the arguments
    /// does not always just flip the signs.
    pub fn until(self, end: Self) -> Period {
        let mut total_months = end.epoch_month() - self.epoch_month();
        let mut days = end.effective_day_of_season() - self.effective_day_of_season();
        if total_months > 0 && days < 0 {
            total_months -= 1;
            // self.plus(total_months, Unit::Seasons), kept in epoch days
            let anchor = self.to_epoch_day() + total_months * i64::from(DAYS_PER_SEASON);
            days = end.to_epoch_day() - anchor;
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(end.length_of_season());
        }
        let seasons_per_year = i64::from(SEASONS_PER_YEAR);
        Period::new(
            total_months / seasons_per_year,
            total_months % seasons_per_year,
            days,
        )
    }

    /// Whole `unit`s from `self` to `end`, truncated toward zero.
    ///
    /// Weeks and seasons divide the day count by 5 and 73. Eras are always 0.
    ///
    /// # Errors
    /// Returns `DateError::IncompatibleType` if `end` is not a date, and
    /// `DateError::IncompatibleChronology` if it is not a Discordian date.
    pub fn until_unit(self, end: &dyn Temporal, unit: Unit) -> Result<i64, DateError> {
        let end = end.as_local_date().ok_or(DateError::IncompatibleType)?;
        let found = end.chronology().id();
        if found != DiscordianChronology::ID {
            return Err(DateError::IncompatibleChronology {
                expected: DiscordianChronology::ID,
                found,
            });
        }
        let end = Self::of_epoch_day(end.to_epoch_day())?;

        let days = || iso::days_until(self.to_iso(), end.to_iso());
        let months = || iso::months_until(self.to_iso(), end.to_iso());
        Ok(match unit {
            Unit::Days => days(),
            Unit::Weeks => days() / i64::from(DAYS_PER_WEEK),
            Unit::Seasons => days() / i64::from(DAYS_PER_SEASON),
            Unit::Years => months() / MONTHS_PER_ISO_YEAR,
            Unit::Decades => months() / (MONTHS_PER_ISO_YEAR * 10),
            Unit::Centuries => months() / (MONTHS_PER_ISO_YEAR * 100),
            Unit::Millennia => months() / (MONTHS_PER_ISO_YEAR * 1000),
            Unit::Eras => 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChronoLocalDate, Field};
    use chrono::NaiveDate;

    fn date(year: i64, season: u8, day: u8) -> DiscordianDate {
        DiscordianDate::of(year, season, day).unwrap()
    }

    fn leap_day(year: i64) -> DiscordianDate {
        DiscordianDate::of_leap_day(year).unwrap()
    }

    #[test]
    fn test_plus_weeks_is_five_days() {
        let d = date(3160, 1, 1);
        assert_eq!(d.plus(5, Unit::Weeks).unwrap(), d.plus(25, Unit::Days).unwrap());
        assert_eq!(d.plus(5, Unit::Weeks).unwrap(), date(3160, 1, 26));
    }

    #[test]
    fn test_plus_season_is_73_days() {
        let d = date(3160, 1, 1);
        assert_eq!(d.plus(1, Unit::Seasons).unwrap(), d.plus(73, Unit::Days).unwrap());
        assert_eq!(d.plus(1, Unit::Seasons).unwrap(), date(3160, 2, 1));
    }

    #[test]
    fn test_plus_season_ignores_season_boundaries_in_leap_year() {
        // 73 days past Chaos 1 crosses St. Tib's Day and stops short of Discord
        let d = date(3178, 1, 1).plus(1, Unit::Seasons).unwrap();
        assert_eq!(d, date(3178, 1, 73));
    }

    #[test]
    fn test_plus_days_across_year_boundary() {
        let d = date(3160, 5, 73).plus(1, Unit::Days).unwrap();
        assert_eq!(d, date(3161, 1, 1));
        let back = d.minus(1, Unit::Days).unwrap();
        assert_eq!(back, date(3160, 5, 73));
    }

    #[test]
    fn test_plus_years_follows_iso() {
        let d = leap_day(3178).plus(1, Unit::Years).unwrap();
        assert_eq!(d, date(3179, 1, 59));
        let d = leap_day(3178).plus(-1, Unit::Years).unwrap();
        assert_eq!(d, date(3177, 1, 59));
        let d = date(3160, 3, 10).plus(1, Unit::Decades).unwrap();
        assert_eq!(d, date(3170, 3, 10));
    }

    #[test]
    fn test_plus_eras_unsupported() {
        let result = date(3160, 1, 1).plus(1, Unit::Eras);
        assert!(matches!(result, Err(DateError::UnsupportedOperation(_))));
    }

    #[test]
    fn test_plus_overflow() {
        let d = date(3160, 1, 1);
        assert!(matches!(
            d.plus(i64::MAX, Unit::Weeks),
            Err(DateError::ArithmeticOverflow(_))
        ));
        assert!(matches!(
            d.plus(i64::MIN, Unit::Seasons),
            Err(DateError::ArithmeticOverflow(_))
        ));
        assert!(matches!(
            d.plus(i64::MAX, Unit::Days),
            Err(DateError::ArithmeticOverflow(_))
        ));
        assert!(matches!(
            d.plus(i64::MAX / 2, Unit::Millennia),
            Err(DateError::ArithmeticOverflow(_))
        ));
        assert!(matches!(
            d.minus(i64::MIN, Unit::Days),
            Err(DateError::ArithmeticOverflow(_))
        ));
    }

    #[test]
    fn test_until_cases() {
        struct TestCase {
            start:       DiscordianDate,
            end:         DiscordianDate,
            expected:    Period,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       date(3160, 1, 1),
                end:         date(3160, 2, 1),
                expected:    Period::new(0, 1, 0),
                description: "one season",
            },
            TestCase {
                start:       date(3160, 1, 10),
                end:         date(3160, 2, 5),
                expected:    Period::new(0, 0, 68),
                description: "forward borrow",
            },
            TestCase {
                start:       date(3160, 2, 5),
                end:         date(3160, 1, 10),
                expected:    Period::new(0, 0, -68),
                description: "backward borrow",
            },
            TestCase {
                start:       date(3160, 1, 1),
                end:         date(3162, 3, 5),
                expected:    Period::new(2, 2, 4),
                description: "years, seasons and days",
            },
            TestCase {
                start:       date(3162, 3, 5),
                end:         date(3160, 1, 1),
                expected:    Period::new(-2, -2, -4),
                description: "negative years, seasons and days",
            },
            TestCase {
                start:       date(3178, 1, 1),
                end:         leap_day(3178),
                expected:    Period::new(0, 0, 59),
                description: "to St. Tib's Day",
            },
            TestCase {
                start:       leap_day(3178),
                end:         date(3178, 1, 60),
                expected:    Period::ZERO,
                description: "St. Tib's Day counts as Chaos 60",
            },
            TestCase {
                start:       leap_day(3178),
                end:         date(3178, 2, 1),
                expected:    Period::new(0, 0, 15),
                description: "forward borrow from St. Tib's Day",
            },
            TestCase {
                start:       date(3178, 2, 1),
                end:         leap_day(3178),
                expected:    Period::new(0, 0, -14),
                description: "backward borrow to St. Tib's Day",
            },
            TestCase {
                start:       date(3160, 5, 70),
                end:         date(3161, 1, 3),
                expected:    Period::new(0, 0, 6),
                description: "forward borrow across the year end",
            },
            TestCase {
                start:       date(3161, 1, 3),
                end:         date(3160, 5, 70),
                expected:    Period::new(0, 0, -6),
                description: "backward borrow across the year end",
            },
            TestCase {
                start:       date(3160, 1, 1),
                end:         date(3160, 1, 1),
                expected:    Period::ZERO,
                description: "same date",
            },
        ];

        for case in &cases {
            assert_eq!(
                case.start.until(case.end),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_until_full_range() {
        let min = DiscordianDate::from(NaiveDate::MIN);
        let max = DiscordianDate::from(NaiveDate::MAX);
        assert_eq!(min.until(max), Period::new(524_285, 4, 72));
    }

    #[test]
    fn test_until_is_not_symmetric_across_leap_day() {
        // Forward borrows the real 34-day span, backward borrows a flat 73 days
        let start = date(3178, 1, 50);
        let end = date(3178, 2, 10);
        assert_eq!(start.until(end), Period::new(0, 0, 34));
        assert_eq!(end.until(start), Period::new(0, 0, -33));
    }

    #[test]
    fn test_until_unit() {
        let start = date(3160, 1, 1);
        let end = date(3160, 2, 1);
        assert_eq!(start.until_unit(&end, Unit::Days).unwrap(), 73);
        assert_eq!(start.until_unit(&end, Unit::Weeks).unwrap(), 14);
        assert_eq!(start.until_unit(&end, Unit::Seasons).unwrap(), 1);
        assert_eq!(start.until_unit(&end, Unit::Eras).unwrap(), 0);
        assert_eq!(end.until_unit(&start, Unit::Days).unwrap(), -73);
        assert_eq!(end.until_unit(&start, Unit::Weeks).unwrap(), -14);
        assert_eq!(end.until_unit(&start, Unit::Seasons).unwrap(), -1);
    }

    #[test]
    fn test_until_unit_years() {
        let start = date(3160, 1, 1);
        assert_eq!(start.until_unit(&date(3162, 1, 1), Unit::Years).unwrap(), 2);
        assert_eq!(start.until_unit(&date(3162, 1, 1), Unit::Decades).unwrap(), 0);
        assert_eq!(
            leap_day(3178)
                .until_unit(&date(3179, 1, 59), Unit::Years)
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_until_unit_rejects_other_chronology() {
        let iso = NaiveDate::from_ymd_opt(1994, 1, 1).unwrap();
        let result = date(3160, 1, 1).until_unit(&iso, Unit::Days);
        assert_eq!(
            result,
            Err(DateError::IncompatibleChronology {
                expected: "Discordian",
                found:    "ISO",
            })
        );
    }

    #[test]
    fn test_until_unit_rejects_non_dates() {
        struct Instant;

        impl Temporal for Instant {
            fn as_local_date(&self) -> Option<&dyn ChronoLocalDate> {
                None
            }
        }

        let result = date(3160, 1, 1).until_unit(&Instant, Unit::Days);
        assert_eq!(result, Err(DateError::IncompatibleType));
    }

    #[test]
    fn test_until_agrees_with_plus() {
        let start = date(3160, 2, 30);
        for offset in [-400, -73, -1, 0, 1, 5, 73, 146, 500] {
            let end = start.plus(offset, Unit::Days).unwrap();
            assert_eq!(start.until_unit(&end, Unit::Days).unwrap(), offset);
            assert_eq!(end.field_value(Field::EpochDay) - start.to_epoch_day(), offset);
        }
    }

    #[test]
    fn test_period_display() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(Period::new(2, 2, 4).to_string(), "P2Y2M4D");
        assert_eq!(Period::new(0, 0, -33).to_string(), "P-33D");
    }

    #[test]
    fn test_period_serde() {
        let period = Period::new(1, 2, 3);
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, r#"{"years":1,"months":2,"days":3}"#);
        let parsed: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, period);
    }
}

/// Number of seasons in a Discordian year
pub const SEASONS_PER_YEAR: u8 = 5;

/// Days in every Discordian season
pub const DAYS_PER_SEASON: u8 = 73;

/// Days in a Discordian week
pub const DAYS_PER_WEEK: u8 = 5;

/// First season, day-of-season and day-of-week, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Sentinel returned by season, day-of-season and day-of-week on St. Tib's Day
pub const LEAP_DAY_SENTINEL: u8 = 0;

/// ISO day-of-year of St. Tib's Day in a leap year
pub const ST_TIBS_DAY: u16 = 60;

/// Discordian year = ISO year + `ISO_YEAR_OFFSET`
pub const ISO_YEAR_OFFSET: i64 = 1166;

/// Numeric value of the single Discordian era
pub const YOLD_VALUE: i64 = 1;

/// Days in a common year
pub const DAYS_IN_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Season names, 1-indexed through `season - 1`
pub const SEASON_NAMES: [&str; SEASONS_PER_YEAR as usize] =
    ["Chaos", "Discord", "Confusion", "Bureaucracy", "The Aftermath"];

/// Day names, 1-indexed through `day_of_week - 1`
pub const DAY_NAMES: [&str; DAYS_PER_WEEK as usize] = [
    "Sweetmorn",
    "Boomtime",
    "Pungenday",
    "Prickle-Prickle",
    "Setting Orange",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// ISO months in a year, used to scale year-based units
pub(crate) const MONTHS_PER_ISO_YEAR: i64 = 12;

/// `chrono` day number (counted from 0001-01-01 as day 1) of 1970-01-01
pub(crate) const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Day-of-season St. Tib's Day stands in for when measured or re-targeted
pub(crate) const ST_TIBS_DAY_OF_SEASON: u8 = 60;

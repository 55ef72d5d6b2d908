//! Fixed unit ratios shared by the parser, the formatter and the time-span
//! converters.
//!
//! Months and years are *not* anchored to a calendar. A year is always
//! 365 days and a month is always a twelfth of that (730 hours), so any
//! conversion of a [`Duration`](crate::Duration) with non-zero `years` or
//! `months` into nanoseconds is an approximation.

use std::fmt;

pub const HOURS_PER_DAY: u64 = 24;
pub const HOURS_PER_WEEK: u64 = HOURS_PER_DAY * 7;
pub const HOURS_PER_YEAR: u64 = HOURS_PER_DAY * 365;
pub const HOURS_PER_MONTH: u64 = HOURS_PER_YEAR / 12;

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub const NANOS_PER_MINUTE: u64 = NANOS_PER_SECOND * 60;
pub const NANOS_PER_HOUR: u64 = NANOS_PER_MINUTE * 60;
pub const NANOS_PER_DAY: u64 = NANOS_PER_HOUR * HOURS_PER_DAY;
pub const NANOS_PER_WEEK: u64 = NANOS_PER_HOUR * HOURS_PER_WEEK;
pub const NANOS_PER_MONTH: u64 = NANOS_PER_HOUR * HOURS_PER_MONTH;
pub const NANOS_PER_YEAR: u64 = NANOS_PER_HOUR * HOURS_PER_YEAR;

/// One of the seven fields of a [`Duration`](crate::Duration).
///
/// Variants are declared largest first, so `Unit::Years < Unit::Seconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// All units in canonical (formatting) order.
    pub const ALL: [Unit; 7] = [
        Unit::Years,
        Unit::Months,
        Unit::Weeks,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// Maps a designator character to its unit.
    ///
    /// Every designator is case-insensitive except `M` (months) and
    /// `m` (minutes).
    pub const fn from_designator(c: char) -> Option<Unit> {
        match c {
            'Y' | 'y' => Some(Unit::Years),
            'M' => Some(Unit::Months),
            'W' | 'w' => Some(Unit::Weeks),
            'D' | 'd' => Some(Unit::Days),
            'H' | 'h' => Some(Unit::Hours),
            'm' => Some(Unit::Minutes),
            'S' | 's' => Some(Unit::Seconds),
            _ => None,
        }
    }

    /// The designator emitted by the formatter.
    pub const fn designator(self) -> char {
        match self {
            Unit::Years => 'y',
            Unit::Months => 'M',
            Unit::Weeks => 'w',
            Unit::Days => 'd',
            Unit::Hours => 'h',
            Unit::Minutes => 'm',
            Unit::Seconds => 's',
        }
    }

    pub const fn nanos(self) -> u64 {
        match self {
            Unit::Years => NANOS_PER_YEAR,
            Unit::Months => NANOS_PER_MONTH,
            Unit::Weeks => NANOS_PER_WEEK,
            Unit::Days => NANOS_PER_DAY,
            Unit::Hours => NANOS_PER_HOUR,
            Unit::Minutes => NANOS_PER_MINUTE,
            Unit::Seconds => NANOS_PER_SECOND,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.designator())
    }
}

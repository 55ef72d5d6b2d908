//! A duration value written as designator-suffixed magnitudes, such as
//! `3y6M4d12h30m5.5s`.
//!
//! A [`Duration`] keeps every unit separately and never folds one into
//! another, so `90m` stays ninety minutes. Conversion to and from a flat
//! nanosecond count goes through the fixed ratios in [`units`].
//!
//! ```
//! use interval_duration::Duration;
//!
//! let dur: Duration = "1d12h".parse().unwrap();
//! assert_eq!(dur.days, 1.0);
//! assert_eq!(dur.hours, 12.0);
//! assert_eq!(dur.to_nanos(), 36 * 3_600_000_000_000);
//! assert_eq!(Duration::from_nanos(dur.to_nanos()).to_string(), "1d12h");
//! ```
use std::{
    fmt::{self, Write},
    num::ParseFloatError,
    ops::Neg,
    str::FromStr,
};

use ::nom::Finish;

mod logging;
pub mod nom;
#[cfg(feature = "serde")]
pub mod serde;
pub mod sql;
pub mod units;

use crate::units::Unit;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    #[error("unexpected input")]
    UnexpectedInput,
    #[error(transparent)]
    InvalidMagnitude(#[from] ParseFloatError),
    #[error("magnitude is out of range")]
    MagnitudeOutOfRange,
    #[error("magnitude without a unit designator")]
    MissingDesignator,
    #[error("unit `{0}` is repeated or out of order")]
    MisorderedUnit(Unit),
}

/// A duration broken down into calendar and clock units.
///
/// Magnitudes are expected to be non-negative; the sign of the whole
/// duration lives in `negative`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Duration {
    pub years: f64,
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub negative: bool,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        years: 0.0,
        months: 0.0,
        weeks: 0.0,
        days: 0.0,
        hours: 0.0,
        minutes: 0.0,
        seconds: 0.0,
        negative: false,
    };

    /// Parses `input`, accepting designators in any order.
    ///
    /// A repeated designator overwrites the earlier value, and a trailing
    /// magnitude without a designator is ignored, so `"5y3"` is five years.
    /// Use [`Duration::parse_strict`] to reject both.
    pub fn parse(input: &str) -> Result<Self, DurationParseError> {
        crate::nom::duration(input)
            .finish()
            .map(|(_, dur)| dur)
            .map_err(|err| {
                logging::trace!("failed to parse duration {input:?}: {err}");
                err
            })
    }

    /// Parses `input`, requiring designators in descending unit order,
    /// each at most once, with nothing left over.
    pub fn parse_strict(input: &str) -> Result<Self, DurationParseError> {
        crate::nom::duration_strict(input)
            .finish()
            .map(|(_, dur)| dur)
            .map_err(|err| {
                logging::trace!("failed to strictly parse duration {input:?}: {err}");
                err
            })
    }

    /// Breaks a signed nanosecond count down into units, largest first.
    ///
    /// Each unit takes as many whole multiples as fit in what is left, and
    /// whatever remains after minutes becomes fractional seconds.
    pub fn from_nanos(nanos: i64) -> Self {
        let mut dur = Duration::ZERO;
        if nanos == 0 {
            return dur;
        }
        dur.negative = nanos.is_negative();

        let mut nanos = nanos.unsigned_abs();
        for unit in &Unit::ALL[..6] {
            let count = nanos / unit.nanos();
            if count >= 1 {
                dur.set(*unit, count as f64);
                nanos -= count * unit.nanos();
            }
        }
        dur.seconds = (nanos / units::NANOS_PER_SECOND) as f64
            + (nanos % units::NANOS_PER_SECOND) as f64 / units::NANOS_PER_SECOND as f64;
        dur
    }

    /// Sums every unit at its fixed ratio, rounding each to the nearest
    /// nanosecond.
    ///
    /// This is not the exact inverse of [`Duration::from_nanos`] once months
    /// or years are involved. Results beyond the range of `i64` saturate at
    /// `i64::MIN` or `i64::MAX` depending on the sign.
    pub fn to_nanos(&self) -> i64 {
        let sign = if self.negative { -1.0 } else { 1.0 };
        let mut nanos = 0i64;
        for unit in Unit::ALL {
            let magnitude = self.get(unit);
            if magnitude == 0.0 {
                continue;
            }
            // Rounding is symmetric, so negating first matches negating the sum.
            let scaled = (sign * magnitude * unit.nanos() as f64).round();
            if !(scaled >= i64::MIN as f64 && scaled < i64::MAX as f64) {
                logging::debug!("{magnitude}{unit} saturates the nanosecond range");
            }
            let scaled = scaled as i64;
            nanos = match nanos.checked_add(scaled) {
                Some(nanos) => nanos,
                None => {
                    logging::debug!("sum of {self:?} saturates the nanosecond range");
                    if scaled.is_negative() {
                        i64::MIN
                    } else {
                        i64::MAX
                    }
                }
            };
        }
        nanos
    }

    pub fn get(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Weeks => self.weeks,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    pub fn set(&mut self, unit: Unit, magnitude: f64) {
        let field = match unit {
            Unit::Years => &mut self.years,
            Unit::Months => &mut self.months,
            Unit::Weeks => &mut self.weeks,
            Unit::Days => &mut self.days,
            Unit::Hours => &mut self.hours,
            Unit::Minutes => &mut self.minutes,
            Unit::Seconds => &mut self.seconds,
        };
        *field = magnitude;
    }

    /// Returns `true` if every unit is zero, regardless of sign.
    pub fn is_zero(&self) -> bool {
        Unit::ALL.iter().all(|unit| self.get(*unit) == 0.0)
    }
}

/// Formats a nanosecond count, e.g. `format(26 * 3_600_000_000_000)` is `"1d2h"`.
pub fn format(nanos: i64) -> String {
    Duration::from_nanos(nanos).to_string()
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative {
            f.write_char('-')?;
        }
        if self.is_zero() {
            return f.write_str("0s");
        }
        for unit in Unit::ALL {
            let magnitude = self.get(unit);
            if magnitude != 0.0 {
                write!(f, "{magnitude}{unit}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Duration::parse(s)
    }
}

impl TryFrom<&str> for Duration {
    type Error = DurationParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Duration::parse(value)
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Self::Output {
        Duration {
            negative: !self.negative,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND};

    const HOUR: i64 = NANOS_PER_HOUR as i64;
    const MINUTE: i64 = NANOS_PER_MINUTE as i64;
    const SECOND: i64 = NANOS_PER_SECOND as i64;

    #[test]
    fn parse_valid() {
        let cases = [
            ("", Duration::ZERO),
            ("-", Duration::ZERO),
            (
                "4Y",
                Duration {
                    years: 4.0,
                    ..Duration::ZERO
                },
            ),
            (
                "2.5S",
                Duration {
                    seconds: 2.5,
                    ..Duration::ZERO
                },
            ),
            (
                "3Y6M4D12H30m5.5S",
                Duration {
                    years: 3.0,
                    months: 6.0,
                    days: 4.0,
                    hours: 12.0,
                    minutes: 30.0,
                    seconds: 5.5,
                    ..Duration::ZERO
                },
            ),
            (
                "-5m",
                Duration {
                    minutes: 5.0,
                    negative: true,
                    ..Duration::ZERO
                },
            ),
            (
                "1w2W",
                Duration {
                    weeks: 2.0,
                    ..Duration::ZERO
                },
            ),
            (
                "5S5Y",
                Duration {
                    years: 5.0,
                    seconds: 5.0,
                    ..Duration::ZERO
                },
            ),
            (
                "-0s",
                Duration {
                    negative: true,
                    ..Duration::ZERO
                },
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(Ok(expected), Duration::parse(input), "{input}");
        }
    }

    #[test]
    fn parse_drops_trailing_magnitude() {
        let dur: Duration = "5Y3".parse().unwrap();
        assert_eq!(
            Duration {
                years: 5.0,
                ..Duration::ZERO
            },
            dur
        );
        assert_eq!(Ok(Duration::ZERO), Duration::parse("-3"));
        assert_eq!(
            Err(DurationParseError::MissingDesignator),
            Duration::parse_strict("5Y3")
        );
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            Err(DurationParseError::UnexpectedInput),
            Duration::parse("0SP0D")
        );
        assert_eq!(
            Err(DurationParseError::UnexpectedInput),
            Duration::parse("PT5M")
        );
        assert_eq!(
            Err(DurationParseError::UnexpectedInput),
            Duration::parse("1m 30s")
        );
        assert_eq!(
            Err(DurationParseError::UnexpectedInput),
            Duration::parse("--5m")
        );

        let float_err = "".parse::<f64>().unwrap_err();
        assert_eq!(
            Err(DurationParseError::InvalidMagnitude(float_err.clone())),
            Duration::parse("5YM")
        );
        assert_eq!(
            float_err.to_string(),
            Duration::parse("S").unwrap_err().to_string()
        );
        assert!(matches!(
            Duration::parse("1.2.3h"),
            Err(DurationParseError::InvalidMagnitude(_))
        ));

        let huge = format!("{}s", "9".repeat(400));
        assert_eq!(
            Err(DurationParseError::MagnitudeOutOfRange),
            Duration::parse(&huge)
        );
        assert_eq!(
            Err(DurationParseError::MagnitudeOutOfRange),
            Duration::parse_strict(&format!("-1y{huge}"))
        );
    }

    #[test]
    fn parse_case_distinction() {
        let dur = Duration::parse("5M").unwrap();
        assert_eq!((5.0, 0.0), (dur.months, dur.minutes));
        let dur = Duration::parse("5m").unwrap();
        assert_eq!((0.0, 5.0), (dur.months, dur.minutes));
    }

    #[test]
    fn format() {
        let cases = [
            (Duration::ZERO, "0s"),
            (
                Duration {
                    years: 3.0,
                    months: 6.0,
                    days: 4.0,
                    hours: 12.0,
                    minutes: 30.0,
                    seconds: 33.3333,
                    ..Duration::ZERO
                },
                "3y6M4d12h30m33.3333s",
            ),
            (
                Duration {
                    minutes: 90.0,
                    ..Duration::ZERO
                },
                "90m",
            ),
            (
                Duration {
                    weeks: 12.5,
                    negative: true,
                    ..Duration::ZERO
                },
                "-12.5w",
            ),
            (
                Duration {
                    seconds: 1e21,
                    ..Duration::ZERO
                },
                "1000000000000000000000s",
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(expected, input.to_string(), "{input:?}");
        }
    }

    #[test]
    fn round_trip() {
        let cases = [
            "0s",
            "3y6M4d12h30m5.5s",
            "0.0000000000001s",
            "-2h5m",
            "1y2M3w4d5h6m7s",
            "0.5M",
            "-14y9M3d12h54m11s",
        ];
        for input in cases {
            let dur = Duration::parse(input).unwrap();
            assert_eq!(input, dur.to_string());
            assert_eq!(Ok(dur), Duration::parse_strict(input), "{input}");
        }
    }

    #[test]
    fn sign_isolation() {
        let dur = Duration::parse("1d2h").unwrap();
        let negated = -dur;
        assert!(negated.negative);
        assert_eq!(
            (dur.days, dur.hours),
            (negated.days, negated.hours)
        );
        assert_eq!("-1d2h", negated.to_string());
        assert_eq!(dur, -negated);
        assert_eq!(Ok(negated), Duration::parse(&negated.to_string()));
    }

    #[test]
    fn from_nanos() {
        let cases = [
            (0, Duration::ZERO),
            (
                94 * MINUTE,
                Duration {
                    hours: 1.0,
                    minutes: 34.0,
                    ..Duration::ZERO
                },
            ),
            (
                -10 * SECOND,
                Duration {
                    seconds: 10.0,
                    negative: true,
                    ..Duration::ZERO
                },
            ),
            (
                SECOND + 500_000_000,
                Duration {
                    seconds: 1.5,
                    ..Duration::ZERO
                },
            ),
            (
                1,
                Duration {
                    seconds: 1e-9,
                    ..Duration::ZERO
                },
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(expected, Duration::from_nanos(input), "{input}");
        }
    }

    #[test]
    fn from_nanos_extremes() {
        let min = Duration::from_nanos(i64::MIN);
        assert!(min.negative);
        assert_eq!(292.0, min.years);
        let max = Duration::from_nanos(i64::MAX);
        assert!(!max.negative);
        assert_eq!(min.years, max.years);

        assert_eq!(i64::MIN, min.to_nanos());
        assert_eq!(i64::MAX, max.to_nanos());
    }

    #[test]
    fn format_nanos() {
        let cases = [
            (0, "0s"),
            (94 * MINUTE, "1h34m"),
            (72 * HOUR, "3d"),
            (26 * HOUR, "1d2h"),
            (465_461_651 * SECOND, "14y9M3d12h54m11s"),
            (-99_544 * HOUR, "-11y4M1w4d"),
            (-10 * SECOND, "-10s"),
        ];
        for (input, expected) in cases {
            assert_eq!(expected, super::format(input), "{input}");
        }
    }

    #[test]
    fn to_nanos() {
        let cases = [
            (
                Duration {
                    seconds: 33.3,
                    ..Duration::ZERO
                },
                33 * SECOND + 300_000_000,
            ),
            (
                Duration {
                    hours: 2.0,
                    minutes: 33.0,
                    seconds: 17.0,
                    ..Duration::ZERO
                },
                2 * HOUR + 33 * MINUTE + 17 * SECOND,
            ),
            (
                Duration {
                    days: 2.0,
                    ..Duration::ZERO
                },
                48 * HOUR,
            ),
            (
                Duration {
                    weeks: 1.0,
                    ..Duration::ZERO
                },
                168 * HOUR,
            ),
            (
                Duration {
                    weeks: 12.5,
                    ..Duration::ZERO
                },
                168 * 12 * HOUR + 84 * HOUR,
            ),
            (
                Duration {
                    months: 1.0,
                    ..Duration::ZERO
                },
                730 * HOUR,
            ),
            (
                Duration {
                    years: 1.0,
                    ..Duration::ZERO
                },
                8760 * HOUR,
            ),
            (
                Duration {
                    hours: 2.0,
                    negative: true,
                    ..Duration::ZERO
                },
                -2 * HOUR,
            ),
            (
                Duration {
                    years: 1e9,
                    ..Duration::ZERO
                },
                i64::MAX,
            ),
            (
                Duration {
                    years: 1e9,
                    negative: true,
                    ..Duration::ZERO
                },
                i64::MIN,
            ),
            (
                Duration {
                    years: 200.0,
                    months: 2400.0,
                    ..Duration::ZERO
                },
                i64::MAX,
            ),
            (
                Duration {
                    years: 200.0,
                    months: 2400.0,
                    negative: true,
                    ..Duration::ZERO
                },
                i64::MIN,
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(expected, input.to_nanos(), "{input:?}");
        }
    }

    #[test]
    fn nanos_round_trip_without_calendar_units() {
        let cases = [
            0,
            1,
            -1,
            999_999_999,
            59 * SECOND + 1,
            94 * MINUTE,
            -(6 * 24 * HOUR + 23 * HOUR + 59 * MINUTE + 59 * SECOND + 123_456_789),
            3 * 168 * HOUR + 5 * HOUR,
        ];
        for input in cases {
            let dur = Duration::from_nanos(input);
            assert_eq!((0.0, 0.0), (dur.years, dur.months), "{input}");
            assert_eq!(input, dur.to_nanos(), "{input}");
        }
    }

    #[test]
    fn nanos_round_trip_with_calendar_units() {
        let input = 465_461_651 * SECOND;
        let dur = Duration::from_nanos(input);
        assert_eq!((14.0, 9.0), (dur.years, dur.months));
        assert_eq!(input, dur.to_nanos());
    }
}

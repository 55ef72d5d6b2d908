//! [nom] parsers for the duration grammar.
//!
//! ```text
//! duration    := ["-"] {magnitude designator}
//! magnitude   := {digit} ["." {digit}]
//! designator  := "Y"|"y"|"M"|"m"|"W"|"w"|"D"|"d"|"H"|"h"|"S"|"s"
//! ```
//!
//! Both parsers stop at the first character that is neither a magnitude
//! character nor a designator and fail with
//! [`DurationParseError::UnexpectedInput`], so they can be embedded in a
//! larger grammar only behind a delimiter such as whitespace.

use ::nom::{
    bytes::complete::take_while,
    character::complete::char,
    combinator::{cut, opt},
    error::{ErrorKind, FromExternalError, ParseError},
    multi::fold_many0,
    Err as NomErr, IResult, Parser,
};

use crate::{units::Unit, Duration, DurationParseError};

impl<I> ParseError<I> for DurationParseError {
    fn from_error_kind(_input: I, _kind: ErrorKind) -> Self {
        DurationParseError::UnexpectedInput
    }

    fn append(_input: I, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E> FromExternalError<I, E> for DurationParseError {
    fn from_external_error(_input: I, _kind: ErrorKind, _e: E) -> Self {
        DurationParseError::UnexpectedInput
    }
}

fn is_magnitude_char(c: char) -> bool {
    c.is_numeric() || c == '.'
}

fn sign(input: &str) -> IResult<&str, bool, DurationParseError> {
    opt(char('-')).map(|sign| sign.is_some()).parse(input)
}

fn magnitude(input: &str) -> IResult<&str, &str, DurationParseError> {
    take_while(is_magnitude_char).parse(input)
}

fn designator(input: &str) -> IResult<&str, Unit, DurationParseError> {
    let mut chars = input.chars();
    let Some(c) = chars.next() else {
        return Err(NomErr::Error(DurationParseError::MissingDesignator));
    };
    match Unit::from_designator(c) {
        Some(unit) => Ok((chars.as_str(), unit)),
        None => Err(NomErr::Failure(DurationParseError::UnexpectedInput)),
    }
}

/// A single `<magnitude><designator>` pair.
///
/// Fails with a recoverable error only when the input ends right after the
/// magnitude; every other failure is fatal.
pub fn component(input: &str) -> IResult<&str, (Unit, f64), DurationParseError> {
    let (input, (magnitude, unit)) = (magnitude, designator).parse(input)?;
    let magnitude = magnitude
        .parse::<f64>()
        .map_err(|err| NomErr::Failure(DurationParseError::InvalidMagnitude(err)))?;
    if !magnitude.is_finite() {
        return Err(NomErr::Failure(DurationParseError::MagnitudeOutOfRange));
    }
    Ok((input, (unit, magnitude)))
}

/// Parses a duration permissively.
///
/// Designators may repeat (the last one wins) and appear in any order. A
/// trailing magnitude without a designator is left unconsumed.
pub fn duration(input: &str) -> IResult<&str, Duration, DurationParseError> {
    let (input, negative) = sign(input)?;
    let (input, (mut duration, any)) = fold_many0(
        component,
        || (Duration::ZERO, false),
        |(mut duration, _), (unit, magnitude)| {
            duration.set(unit, magnitude);
            (duration, true)
        },
    )
    .parse(input)?;
    duration.negative = negative && any;
    Ok((input, duration))
}

/// Parses a duration, requiring every designator to name a strictly
/// smaller unit than the one before it and rejecting trailing magnitudes.
pub fn duration_strict(input: &str) -> IResult<&str, Duration, DurationParseError> {
    let (mut input, negative) = sign(input)?;
    let mut duration = Duration::ZERO;
    let mut last: Option<Unit> = None;
    while !input.is_empty() {
        let (rest, (unit, magnitude)) = cut(component).parse(input)?;
        if matches!(last, Some(prev) if unit <= prev) {
            return Err(NomErr::Failure(DurationParseError::MisorderedUnit(unit)));
        }
        duration.set(unit, magnitude);
        last = Some(unit);
        input = rest;
    }
    duration.negative = negative && last.is_some();
    Ok((input, duration))
}

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Parsing and formatting against patterns.
//!
//! Formatting never panics: a malformed pattern, or one that asks for fields
//! the value does not have (an hour on a plain date), is reported as
//! `ConvertError::Format`.

use crate::{
    error::{ConvertError, ParseDateError},
    pattern::FormatPattern,
};
use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    format::{Item, StrftimeItems},
};
use std::fmt::{Display, Write};

fn compile(pattern: &str) -> Result<Vec<Item<'_>>, ConvertError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        tracing::debug!(pattern, "malformed format pattern");
        return Err(ConvertError::Format {
            pattern: pattern.to_owned(),
        });
    }
    Ok(items)
}

fn render<D>(formatted: D, pattern: &str) -> Result<String, ConvertError>
where
    D: Display,
{
    let mut out = String::new();
    write!(out, "{}", formatted).map_err(|_| ConvertError::Format {
        pattern: pattern.to_owned(),
    })?;
    Ok(out)
}

fn parse_failure(input: &str, pattern: &str, source: chrono::ParseError) -> ConvertError {
    tracing::trace!(input, pattern, error = %source, "failed to parse date/time");
    ParseDateError {
        input: input.to_owned(),
        pattern: pattern.to_owned(),
        source,
    }
    .into()
}

/// Parses `input` into a date/time.
///
/// # Errors
///
/// Returns `ConvertError::Parse` if `input` does not match `pattern` or the
/// pattern lacks the fields of a full date/time.
///
/// # Examples
///
/// ```rust
/// # use tempus_convert::{format::parse_date_time, pattern::DatePattern};
///
/// let dt = parse_date_time("21.04.2019 22:15:30", &DatePattern::DottedDateTime).unwrap();
/// assert_eq!(dt.to_string(), "2019-04-21 22:15:30");
/// ```
pub fn parse_date_time<P>(input: &str, pattern: &P) -> Result<NaiveDateTime, ConvertError>
where
    P: FormatPattern + ?Sized,
{
    let fmt = pattern.format_str();
    NaiveDateTime::parse_from_str(input, fmt).map_err(|e| parse_failure(input, fmt, e))
}

/// Parses `input` into a date.
///
/// # Errors
///
/// Returns `ConvertError::Parse` if `input` does not match `pattern`.
pub fn parse_date<P>(input: &str, pattern: &P) -> Result<NaiveDate, ConvertError>
where
    P: FormatPattern + ?Sized,
{
    let fmt = pattern.format_str();
    NaiveDate::parse_from_str(input, fmt).map_err(|e| parse_failure(input, fmt, e))
}

/// Parses `input` into a time of day.
///
/// # Errors
///
/// Returns `ConvertError::Parse` if `input` does not match `pattern`.
pub fn parse_time<P>(input: &str, pattern: &P) -> Result<NaiveTime, ConvertError>
where
    P: FormatPattern + ?Sized,
{
    let fmt = pattern.format_str();
    NaiveTime::parse_from_str(input, fmt).map_err(|e| parse_failure(input, fmt, e))
}

/// Formats `date` with `pattern`.
///
/// # Errors
///
/// Returns `ConvertError::Format` if the pattern is malformed or refers to
/// time-of-day fields.
///
/// # Examples
///
/// ```rust
/// # use tempus_convert::{format::format_date, pattern::DatePattern};
/// # use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2019, 4, 21).unwrap();
/// assert_eq!(format_date(&d, &DatePattern::DottedDate).unwrap(), "21.04.2019");
/// ```
pub fn format_date<P>(date: &NaiveDate, pattern: &P) -> Result<String, ConvertError>
where
    P: FormatPattern + ?Sized,
{
    let fmt = pattern.format_str();
    let items = compile(fmt)?;
    render(date.format_with_items(items.iter()), fmt)
}

/// Formats `time` with `pattern`.
///
/// # Errors
///
/// Returns `ConvertError::Format` if the pattern is malformed or refers to
/// calendar fields.
pub fn format_time<P>(time: &NaiveTime, pattern: &P) -> Result<String, ConvertError>
where
    P: FormatPattern + ?Sized,
{
    let fmt = pattern.format_str();
    let items = compile(fmt)?;
    render(time.format_with_items(items.iter()), fmt)
}

/// Formats `date_time` with `pattern`.
///
/// # Errors
///
/// Returns `ConvertError::Format` if the pattern is malformed or refers to a
/// time zone.
pub fn format_date_time<P>(date_time: &NaiveDateTime, pattern: &P) -> Result<String, ConvertError>
where
    P: FormatPattern + ?Sized,
{
    let fmt = pattern.format_str();
    let items = compile(fmt)?;
    render(date_time.format_with_items(items.iter()), fmt)
}

/// Formats a zoned `date_time` with `pattern`, zone fields included.
///
/// # Errors
///
/// Returns `ConvertError::Format` if the pattern is malformed.
pub fn format_zoned<Z, P>(date_time: &DateTime<Z>, pattern: &P) -> Result<String, ConvertError>
where
    Z: TimeZone,
    Z::Offset: Display,
    P: FormatPattern + ?Sized,
{
    let fmt = pattern.format_str();
    let items = compile(fmt)?;
    render(date_time.format_with_items(items.iter()), fmt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pattern::DatePattern, zone::parse_zone};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_time_with_patterns() {
        let expected = ymd(2019, 4, 21).and_hms_opt(10, 15, 30).unwrap();
        assert_eq!(
            parse_date_time("2019-04-21T10:15:30", &DatePattern::IsoDateTime),
            Ok(expected)
        );
        assert_eq!(
            parse_date_time("20190421101530", &DatePattern::Compact),
            Ok(expected)
        );
        assert_eq!(
            parse_date_time("2019.04.21.10.15.30", &DatePattern::DottedDateTimeCompact),
            Ok(expected)
        );
        assert_eq!(
            parse_date_time("2019/04/21 10:15:30", "%Y/%m/%d %H:%M:%S"),
            Ok(expected)
        );
    }

    #[test]
    fn test_parse_date_time_mismatch_reports_input_and_pattern() {
        let err = parse_date_time("21.04.2019", &DatePattern::IsoDateTime).unwrap_err();
        match err {
            ConvertError::Parse(e) => {
                assert_eq!(e.input, "21.04.2019");
                assert_eq!(e.pattern, "%Y-%m-%dT%H:%M:%S");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_twelve_hour_pattern_without_meridiem_fails() {
        assert!(parse_date_time("2019-04-21 10:15:30", &DatePattern::DateTime12Hour).is_err());
    }

    #[test]
    fn test_parse_date_and_time() {
        assert_eq!(parse_date("21.04.19", &DatePattern::DottedDateShortYear), Ok(ymd(2019, 4, 21)));
        assert_eq!(parse_date("2019-04-21", &DatePattern::IsoDate), Ok(ymd(2019, 4, 21)));
        assert_eq!(
            parse_time("22:15", &DatePattern::Time24Short),
            Ok(NaiveTime::from_hms_opt(22, 15, 0).unwrap())
        );
    }

    #[test]
    fn test_format_date() {
        let d = ymd(2019, 4, 21);
        assert_eq!(
            format_date(&d, &DatePattern::WeekdayMonthDayYear).unwrap(),
            "Sunday Apr 21, 2019"
        );
        assert_eq!(format_date(&d, &DatePattern::DayMonthNameShortYear).unwrap(), "21-Apr-19");
        assert_eq!(format_date(&d, &DatePattern::DottedDayMonth).unwrap(), "21.04");
    }

    #[test]
    fn test_format_date_with_time_fields_fails() {
        let d = ymd(2019, 4, 21);
        assert_eq!(
            format_date(&d, &DatePattern::Time24),
            Err(ConvertError::Format {
                pattern: "%H:%M:%S".into()
            })
        );
    }

    #[test]
    fn test_format_malformed_pattern_fails() {
        let d = ymd(2019, 4, 21);
        assert!(matches!(format_date(&d, "%Q"), Err(ConvertError::Format { .. })));
    }

    #[test]
    fn test_format_date_time_and_time() {
        let dt = ymd(2019, 4, 21).and_hms_opt(22, 15, 30).unwrap();
        assert_eq!(
            format_date_time(&dt, &DatePattern::TimeCommaDottedDateShortMonth).unwrap(),
            "22:15, 21.4.2019"
        );
        assert_eq!(
            format_date_time(&dt, &DatePattern::DateTime12Hour).unwrap(),
            "2019-04-21 10:15:30"
        );
        assert_eq!(format_time(&dt.time(), &DatePattern::Time12).unwrap(), "10:15:30");
        assert!(format_date_time(&dt, &DatePattern::UnixDate).is_err());
    }

    #[test]
    fn test_format_fraction_pattern_always_has_milliseconds() {
        let whole = ymd(2019, 4, 21).and_hms_milli_opt(10, 15, 30, 0).unwrap();
        let half = ymd(2019, 4, 21).and_hms_milli_opt(22, 15, 30, 500).unwrap();
        assert_eq!(
            format_date_time(&whole, &DatePattern::DateTime12HourFraction).unwrap(),
            "2019-04-21 10:15:30.000"
        );
        assert_eq!(
            format_date_time(&half, &DatePattern::DateTime12HourFraction).unwrap(),
            "2019-04-21 10:15:30.500"
        );
    }

    #[test]
    fn test_format_zoned_includes_zone_name() {
        let paris = parse_zone("Europe/Paris").unwrap();
        let dt = crate::zone::resolve_local(&ymd(2000, 9, 1).and_hms_opt(0, 0, 0).unwrap(), &paris)
            .unwrap();
        assert_eq!(
            format_zoned(&dt, &DatePattern::UnixDate).unwrap(),
            "Fri Sep 01 12:00:00 CEST 2000"
        );
    }
}

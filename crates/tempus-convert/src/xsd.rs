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

//! XML Schema `dateTime` lexical form (`2007-11-03T10:15:30`, optionally
//! with fractional seconds and a `Z` or `±hh:mm` suffix).

use crate::error::{ConvertError, ParseDateError};
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone};
use std::fmt::Display;

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const ZONED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Renders a date/time without zone information.
///
/// # Examples
///
/// ```rust
/// # use tempus_convert::xsd::to_xsd_local;
/// # use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2007, 11, 3).unwrap().and_hms_opt(10, 15, 30).unwrap();
/// assert_eq!(to_xsd_local(&dt), "2007-11-03T10:15:30");
/// ```
#[inline]
pub fn to_xsd_local(date_time: &NaiveDateTime) -> String {
    date_time.format(LOCAL_FORMAT).to_string()
}

/// Renders a zoned date/time with its offset (`Z` for UTC).
#[inline]
pub fn to_xsd<Z>(date_time: &DateTime<Z>) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses a `dateTime` that carries an offset.
///
/// # Errors
///
/// Returns `ConvertError::Parse` if `input` is not a `dateTime` with offset.
pub fn parse_xsd(input: &str) -> Result<DateTime<FixedOffset>, ConvertError> {
    DateTime::parse_from_rfc3339(input).map_err(|source| {
        ParseDateError {
            input: input.to_owned(),
            pattern: ZONED_FORMAT.to_owned(),
            source,
        }
        .into()
    })
}

/// Parses a `dateTime` without an offset.
///
/// # Errors
///
/// Returns `ConvertError::Parse` if `input` is not a local `dateTime`.
pub fn parse_xsd_local(input: &str) -> Result<NaiveDateTime, ConvertError> {
    NaiveDateTime::parse_from_str(input, LOCAL_FORMAT).map_err(|source| {
        ParseDateError {
            input: input.to_owned(),
            pattern: LOCAL_FORMAT.to_owned(),
            source,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::parse_zone;
    use chrono::{NaiveDate, Utc};

    fn local(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2007, 11, 3)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_to_xsd_local_with_fraction() {
        let dt = NaiveDate::from_ymd_opt(2007, 11, 3)
            .unwrap()
            .and_hms_milli_opt(10, 15, 30, 250)
            .unwrap();
        assert_eq!(to_xsd_local(&dt), "2007-11-03T10:15:30.250");
    }

    #[test]
    fn test_to_xsd_utc_and_zoned() {
        assert_eq!(to_xsd(&local(10, 15, 30).and_utc()), "2007-11-03T10:15:30Z");

        let berlin = parse_zone("Europe/Berlin").unwrap();
        let dt = local(10, 15, 30).and_utc().with_timezone(&berlin);
        assert_eq!(to_xsd(&dt), "2007-11-03T11:15:30+01:00");
    }

    #[test]
    fn test_parse_xsd() {
        let dt = parse_xsd("2007-11-03T11:15:30+01:00").unwrap();
        assert_eq!(dt.with_timezone(&Utc).naive_utc(), local(10, 15, 30));
        assert_eq!(dt.offset().local_minus_utc(), 3600);
        assert!(parse_xsd("2007-11-03T11:15:30").is_err());
    }

    #[test]
    fn test_parse_xsd_local() {
        assert_eq!(parse_xsd_local("2007-11-03T10:15:30"), Ok(local(10, 15, 30)));
        assert!(parse_xsd_local("2007-11-03 10:15:30").is_err());
    }
}

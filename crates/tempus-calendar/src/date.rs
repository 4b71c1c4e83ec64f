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

//! Date construction and date differences.

use crate::error::CalendarError;
use chrono::NaiveDate;

/// Builds the date `year-month-day`.
///
/// # Errors
///
/// Returns `CalendarError::InvalidDate` if the components do not name a
/// valid date (month outside `1..=12`, day past the end of the month, or a
/// year outside the representable range).
///
/// # Examples
///
/// ```rust
/// # use tempus_calendar::date::date_of;
///
/// let d = date_of(2019, 4, 21).unwrap();
/// assert_eq!(d.to_string(), "2019-04-21");
/// assert!(date_of(2019, 2, 29).is_err());
/// ```
#[inline]
pub fn date_of(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Returns the number of days from `a` to `b`.
///
/// Positive if `b` is after `a`, negative if before, zero if equal.
///
/// # Examples
///
/// ```rust
/// # use tempus_calendar::date::{date_of, days_between};
///
/// let a = date_of(2019, 2, 14).unwrap();
/// let b = date_of(2019, 4, 21).unwrap();
/// assert_eq!(days_between(a, b), 66);
/// assert_eq!(days_between(b, a), -66);
/// ```
#[inline]
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_of_valid() {
        let d = date_of(2020, 2, 29).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
    }

    #[test]
    fn test_date_of_invalid_components() {
        assert_eq!(
            date_of(2019, 13, 1),
            Err(CalendarError::InvalidDate {
                year: 2019,
                month: 13,
                day: 1
            })
        );
        assert!(date_of(2019, 4, 31).is_err());
        assert!(date_of(2019, 0, 1).is_err());
    }

    #[test]
    fn test_days_between_signs() {
        let a = date_of(2018, 12, 31).unwrap();
        let b = date_of(2019, 1, 1).unwrap();
        assert_eq!(days_between(a, b), 1);
        assert_eq!(days_between(b, a), -1);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn test_days_between_across_leap_year() {
        let a = date_of(2020, 1, 1).unwrap();
        let b = date_of(2021, 1, 1).unwrap();
        assert_eq!(days_between(a, b), 366);
    }
}

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

//! Easter Sunday computation.
//!
//! Easter Sunday is derived with the Gauss/Meeus closed form, which is exact
//! for Gregorian years from 1583 on. Earlier years still produce a date in
//! late March or April (the arithmetic uses Euclidean division so negative
//! years stay well defined), but it carries no liturgical meaning.

use crate::{
    date::{date_of, days_between},
    error::CalendarError,
};
use chrono::{Datelike, NaiveDate};
use tempus_core::error::InvalidArgument;

/// A query that derives a date from any calendar value.
pub trait DateQuery {
    /// The result of the query.
    type Output;

    /// Runs the query against `temporal`.
    fn query_from<D>(&self, temporal: &D) -> Self::Output
    where
        D: Datelike;
}

/// Returns the day number `n` from which month (`n / 31`) and day
/// (`n % 31 + 1`) of Easter Sunday follow.
#[inline]
fn easter_sunday_number(year: i32) -> i32 {
    let i = year.rem_euclid(19);
    let j = year.div_euclid(100);
    let k = year.rem_euclid(100);
    let l = (19 * i + j - j.div_euclid(4) - (j - (j + 8).div_euclid(25) + 1).div_euclid(3) + 15)
        .rem_euclid(30);
    let m = (32 + 2 * j.rem_euclid(4) + 2 * k.div_euclid(4) - l - k.rem_euclid(4)).rem_euclid(7);
    l + m - 7 * ((i + 11 * l + 22 * m) / 451) + 114
}

/// Returns the date of Easter Sunday in `year`.
///
/// # Errors
///
/// Returns `CalendarError::YearOutOfRange` if `year` cannot be represented
/// as a date.
///
/// # Examples
///
/// ```rust
/// # use tempus_calendar::easter::easter_sunday;
///
/// assert_eq!(easter_sunday(2019).unwrap().to_string(), "2019-04-21");
/// assert_eq!(easter_sunday(2020).unwrap().to_string(), "2020-04-12");
/// ```
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    let n = easter_sunday_number(year);
    debug_assert!(
        (84..=149).contains(&n),
        "easter day number {} out of the March/April range",
        n
    );

    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;
    date_of(year, month, day).map_err(|_| CalendarError::YearOutOfRange(year))
}

/// Returns the first Easter Sunday strictly after `date`.
///
/// If Easter of `date`'s year falls on or before `date`, Easter of the
/// following year is returned.
///
/// # Errors
///
/// Returns `CalendarError::YearOutOfRange` if the required year cannot be
/// represented as a date.
///
/// # Examples
///
/// ```rust
/// # use tempus_calendar::{date::date_of, easter::next_easter_sunday};
///
/// let d = date_of(2019, 2, 14).unwrap();
/// assert_eq!(next_easter_sunday(d).unwrap(), date_of(2019, 4, 21).unwrap());
///
/// let d = date_of(2019, 11, 28).unwrap();
/// assert_eq!(next_easter_sunday(d).unwrap(), date_of(2020, 4, 12).unwrap());
/// ```
pub fn next_easter_sunday(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    let this_year = easter_sunday(date.year())?;
    if days_between(date, this_year) <= 0 {
        let next_year = date
            .year()
            .checked_add(1)
            .ok_or(CalendarError::YearOutOfRange(date.year()))?;
        easter_sunday(next_year)
    } else {
        Ok(this_year)
    }
}

/// Query for the next Easter Sunday strictly after a calendar value.
///
/// # Examples
///
/// ```rust
/// # use tempus_calendar::easter::{DateQuery, NextEasterSunday};
/// # use chrono::NaiveDate;
///
/// let moment = NaiveDate::from_ymd_opt(2019, 4, 21)
///     .unwrap()
///     .and_hms_opt(9, 30, 0)
///     .unwrap();
/// let next = NextEasterSunday.query_from(&moment).unwrap();
/// assert_eq!(next.to_string(), "2020-04-12");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NextEasterSunday;

impl NextEasterSunday {
    /// Runs the query against a calendar value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidArgument` if `temporal` is `None`, and
    /// the errors of [`next_easter_sunday`] otherwise.
    pub fn query_checked<D>(&self, temporal: Option<&D>) -> Result<NaiveDate, CalendarError>
    where
        D: Datelike,
    {
        let temporal = InvalidArgument::require(temporal, "temporal")?;
        self.query_from(temporal)
    }
}

impl DateQuery for NextEasterSunday {
    type Output = Result<NaiveDate, CalendarError>;

    fn query_from<D>(&self, temporal: &D) -> Self::Output
    where
        D: Datelike,
    {
        let date = date_of(temporal.year(), temporal.month(), temporal.day())?;
        next_easter_sunday(date)
    }
}

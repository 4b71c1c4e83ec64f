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

//! Time gaps measured in whole units.
//!
//! `Temporal::until` counts the *complete* units between two values,
//! truncating toward zero: 10:00 to 10:59 is zero hours, 10:00 to 11:00 is
//! one. A gap exists once more than one full unit separates the two values.

use crate::error::ConvertError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use std::fmt::{Display, Formatter};
use tempus_core::InvalidArgument;

/// A unit in which the distance between two temporals is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

impl TimeUnit {
    /// Returns `true` for units of fixed length below a day.
    #[inline]
    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::Nanos
                | Self::Micros
                | Self::Millis
                | Self::Seconds
                | Self::Minutes
                | Self::Hours
                | Self::HalfDays
        )
    }

    /// Returns `true` for calendar units of a day or more.
    #[inline]
    pub const fn is_date_based(self) -> bool {
        !self.is_time_based()
    }

    /// Number of months in a month-based unit.
    #[inline]
    const fn months(self) -> Option<i64> {
        match self {
            Self::Months => Some(1),
            Self::Years => Some(12),
            Self::Decades => Some(120),
            Self::Centuries => Some(1_200),
            Self::Millennia => Some(12_000),
            _ => None,
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A value on a time line that can measure its distance to another value of
/// the same kind.
pub trait Temporal {
    /// A human-readable name of the kind of value, used in errors.
    const KIND: &'static str;

    /// Returns the number of complete `unit`s from `self` to `end`.
    ///
    /// Negative if `end` is before `self`.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::UnsupportedUnit` if `unit` cannot measure this
    /// kind of value, and `ConvertError::Overflow` if the amount does not fit.
    fn until(&self, end: &Self, unit: TimeUnit) -> Result<i64, ConvertError>;
}

fn unsupported<T>(unit: TimeUnit) -> ConvertError
where
    T: Temporal,
{
    ConvertError::UnsupportedUnit {
        unit,
        temporal: T::KIND,
    }
}

/// Truncated amount of a time-based `unit` in `delta`.
fn whole_time_units(delta: TimeDelta, unit: TimeUnit) -> Result<i64, ConvertError> {
    let amount = match unit {
        TimeUnit::Nanos => delta.num_nanoseconds().ok_or(ConvertError::Overflow)?,
        TimeUnit::Micros => delta.num_microseconds().ok_or(ConvertError::Overflow)?,
        TimeUnit::Millis => delta.num_milliseconds(),
        TimeUnit::Seconds => delta.num_seconds(),
        TimeUnit::Minutes => delta.num_minutes(),
        TimeUnit::Hours => delta.num_hours(),
        // Only time-based units reach here, so this is `HalfDays`.
        _ => delta.num_hours() / 12,
    };
    Ok(amount)
}

/// Complete months from `start` to `end`; a month completes on the same day
/// of month.
fn whole_months(start: NaiveDate, end: NaiveDate) -> i64 {
    let packed = |d: NaiveDate| {
        (i64::from(d.year()) * 12 + i64::from(d.month0())) * 32 + i64::from(d.day())
    };
    (packed(end) - packed(start)) / 32
}

fn whole_date_units(start: NaiveDate, end: NaiveDate, unit: TimeUnit) -> i64 {
    match unit.months() {
        Some(months) => whole_months(start, end) / months,
        None => {
            let days = end.signed_duration_since(start).num_days();
            if unit == TimeUnit::Weeks { days / 7 } else { days }
        }
    }
}

impl Temporal for NaiveTime {
    const KIND: &'static str = "NaiveTime";

    fn until(&self, end: &Self, unit: TimeUnit) -> Result<i64, ConvertError> {
        if !unit.is_time_based() {
            return Err(unsupported::<Self>(unit));
        }
        whole_time_units(end.signed_duration_since(*self), unit)
    }
}

impl Temporal for NaiveDate {
    const KIND: &'static str = "NaiveDate";

    fn until(&self, end: &Self, unit: TimeUnit) -> Result<i64, ConvertError> {
        if !unit.is_date_based() {
            return Err(unsupported::<Self>(unit));
        }
        Ok(whole_date_units(*self, *end, unit))
    }
}

impl Temporal for NaiveDateTime {
    const KIND: &'static str = "NaiveDateTime";

    fn until(&self, end: &Self, unit: TimeUnit) -> Result<i64, ConvertError> {
        if unit.is_time_based() {
            return whole_time_units(end.signed_duration_since(*self), unit);
        }

        // A day only completes once the end time of day is reached.
        let (start_date, start_time) = (self.date(), self.time());
        let mut end_date = end.date();
        if end_date > start_date && end.time() < start_time {
            end_date = end_date.pred_opt().ok_or(ConvertError::Overflow)?;
        } else if end_date < start_date && end.time() > start_time {
            end_date = end_date.succ_opt().ok_or(ConvertError::Overflow)?;
        }
        Ok(whole_date_units(start_date, end_date, unit))
    }
}

impl<Z> Temporal for DateTime<Z>
where
    Z: TimeZone,
{
    const KIND: &'static str = "DateTime";

    /// Time-based units measure elapsed time between the instants; date-based
    /// units compare wall-clock values after moving `end` into `self`'s zone.
    fn until(&self, end: &Self, unit: TimeUnit) -> Result<i64, ConvertError> {
        if unit.is_time_based() {
            return whole_time_units(end.clone().signed_duration_since(self), unit);
        }
        let end_local = end.with_timezone(&self.timezone()).naive_local();
        self.naive_local().until(&end_local, unit)
    }
}

/// Returns `true` if `other` lies more than one full `unit` before `inclusive`.
///
/// # Errors
///
/// See [`Temporal::until`].
///
/// # Examples
///
/// ```rust
/// # use tempus_convert::gap::{is_before_time_gap, TimeUnit};
/// # use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2018, 8, 1).unwrap();
/// let two_days_earlier = NaiveDate::from_ymd_opt(2018, 7, 30).unwrap();
/// assert!(is_before_time_gap(&start, &two_days_earlier, TimeUnit::Days).unwrap());
/// ```
#[inline]
pub fn is_before_time_gap<T>(
    inclusive: &T,
    other_exclusive: &T,
    unit: TimeUnit,
) -> Result<bool, ConvertError>
where
    T: Temporal,
{
    Ok(inclusive.until(other_exclusive, unit)? < -1)
}

/// Returns `true` if `other` lies more than one full `unit` after `inclusive`.
///
/// # Errors
///
/// See [`Temporal::until`].
///
/// # Examples
///
/// ```rust
/// # use tempus_convert::gap::{is_after_time_gap, TimeUnit};
/// # use chrono::NaiveTime;
///
/// let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
/// let eleven = NaiveTime::from_hms_opt(11, 0, 0).unwrap();
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
/// assert!(!is_after_time_gap(&ten, &eleven, TimeUnit::Hours).unwrap());
/// assert!(is_after_time_gap(&ten, &noon, TimeUnit::Hours).unwrap());
/// ```
#[inline]
pub fn is_after_time_gap<T>(
    inclusive: &T,
    other_exclusive: &T,
    unit: TimeUnit,
) -> Result<bool, ConvertError>
where
    T: Temporal,
{
    Ok(1 < inclusive.until(other_exclusive, unit)?)
}

/// Like [`Temporal::until`], but for arguments that may be absent.
///
/// # Errors
///
/// Returns `ConvertError::InvalidArgument` naming `"inclusive"` or
/// `"other_exclusive"` if either is `None`, otherwise see
/// [`Temporal::until`].
pub fn checked_until<T>(
    inclusive: Option<&T>,
    other_exclusive: Option<&T>,
    unit: TimeUnit,
) -> Result<i64, ConvertError>
where
    T: Temporal,
{
    let inclusive = InvalidArgument::require(inclusive, "inclusive")?;
    let other_exclusive = InvalidArgument::require(other_exclusive, "other_exclusive")?;
    inclusive.until(other_exclusive, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::parse_zone;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_after_time_gap_with_times() {
        let start = hm(10, 0);
        assert!(!is_after_time_gap(&start, &hm(10, 0), TimeUnit::Minutes).unwrap());
        assert!(!is_after_time_gap(&start, &hm(10, 1), TimeUnit::Minutes).unwrap());
        assert!(is_after_time_gap(&start, &hm(10, 2), TimeUnit::Minutes).unwrap());

        assert!(!is_after_time_gap(&start, &hm(10, 30), TimeUnit::Hours).unwrap());
        assert!(!is_after_time_gap(&start, &hm(11, 0), TimeUnit::Hours).unwrap());
        assert!(is_after_time_gap(&start, &hm(12, 0), TimeUnit::Hours).unwrap());
    }

    #[test]
    fn test_after_time_gap_with_dates() {
        let start = ymd(2018, 4, 30);
        assert!(!is_after_time_gap(&start, &ymd(2018, 5, 1), TimeUnit::Days).unwrap());
        assert!(!is_after_time_gap(&start, &ymd(2018, 4, 29), TimeUnit::Days).unwrap());
        assert!(is_after_time_gap(&start, &ymd(2018, 5, 2), TimeUnit::Days).unwrap());
    }

    #[test]
    fn test_after_time_gap_with_date_times() {
        let start = ymd(2018, 4, 30).and_time(hm(10, 0));
        let at = |d: NaiveDate| d.and_time(hm(10, 0));
        assert!(!is_after_time_gap(&start, &at(ymd(2018, 5, 1)), TimeUnit::Days).unwrap());
        assert!(!is_after_time_gap(&start, &at(ymd(2018, 4, 29)), TimeUnit::Days).unwrap());
        assert!(is_after_time_gap(&start, &at(ymd(2018, 5, 2)), TimeUnit::Days).unwrap());
        // One minute short of two full days.
        let almost = ymd(2018, 5, 2).and_time(hm(9, 59));
        assert!(!is_after_time_gap(&start, &almost, TimeUnit::Days).unwrap());
    }

    #[test]
    fn test_before_time_gap_with_dates() {
        let start = ymd(2018, 8, 1);
        assert!(!is_before_time_gap(&start, &ymd(2018, 7, 31), TimeUnit::Days).unwrap());
        assert!(!is_before_time_gap(&start, &ymd(2018, 8, 2), TimeUnit::Days).unwrap());
        assert!(is_before_time_gap(&start, &ymd(2018, 7, 30), TimeUnit::Days).unwrap());
    }

    #[test]
    fn test_unsupported_units() {
        assert_eq!(
            hm(10, 0).until(&hm(11, 0), TimeUnit::Days),
            Err(ConvertError::UnsupportedUnit {
                unit: TimeUnit::Days,
                temporal: "NaiveTime"
            })
        );
        assert_eq!(
            ymd(2018, 1, 1).until(&ymd(2018, 1, 2), TimeUnit::Hours),
            Err(ConvertError::UnsupportedUnit {
                unit: TimeUnit::Hours,
                temporal: "NaiveDate"
            })
        );
    }

    #[test]
    fn test_months_complete_on_same_day_of_month() {
        let start = ymd(2019, 1, 31);
        assert_eq!(start.until(&ymd(2019, 2, 28), TimeUnit::Months), Ok(0));
        assert_eq!(start.until(&ymd(2019, 3, 31), TimeUnit::Months), Ok(2));
        assert_eq!(start.until(&ymd(2018, 12, 31), TimeUnit::Months), Ok(-1));
        assert_eq!(start.until(&ymd(2018, 12, 30), TimeUnit::Months), Ok(-1));
        assert_eq!(ymd(2000, 2, 29).until(&ymd(2010, 2, 28), TimeUnit::Years), Ok(9));
        assert_eq!(ymd(2000, 2, 29).until(&ymd(2010, 3, 1), TimeUnit::Decades), Ok(1));
    }

    #[test]
    fn test_half_days_and_weeks() {
        let start = ymd(2019, 1, 1).and_time(hm(0, 0));
        let end = ymd(2019, 1, 15).and_time(hm(11, 59));
        assert_eq!(start.until(&end, TimeUnit::HalfDays), Ok(28));
        assert_eq!(start.until(&end, TimeUnit::Weeks), Ok(2));
    }

    #[test]
    fn test_zoned_date_units_follow_wall_clock() {
        // 2019-03-31 has only 23 hours in Berlin.
        let berlin = parse_zone("Europe/Berlin").unwrap();
        let at_noon = |d: NaiveDate| crate::zone::resolve_local(&d.and_time(hm(12, 0)), &berlin);
        let start = at_noon(ymd(2019, 3, 30)).unwrap();
        let end = at_noon(ymd(2019, 4, 1)).unwrap();
        assert_eq!(start.until(&end, TimeUnit::Days), Ok(2));
        assert_eq!(start.until(&end, TimeUnit::Hours), Ok(47));
    }

    #[test]
    fn test_checked_until_rejects_absent_arguments() {
        let start = ymd(2018, 8, 1);
        assert_eq!(
            checked_until(None, Some(&start), TimeUnit::Days),
            Err(ConvertError::InvalidArgument(InvalidArgument::absent("inclusive")))
        );
        assert_eq!(
            checked_until(Some(&start), None, TimeUnit::Days),
            Err(ConvertError::InvalidArgument(InvalidArgument::absent("other_exclusive")))
        );
        assert_eq!(checked_until(Some(&start), Some(&ymd(2018, 8, 4)), TimeUnit::Days), Ok(3));
    }

    #[test]
    fn test_nanos_overflow() {
        let start = ymd(1000, 1, 1).and_time(hm(0, 0));
        let end = ymd(2000, 1, 1).and_time(hm(0, 0));
        assert_eq!(start.until(&end, TimeUnit::Nanos), Err(ConvertError::Overflow));
    }

    #[test]
    fn test_random_until_is_antisymmetric_for_days() {
        let mut rng = StdRng::seed_from_u64(99);
        let base = ymd(2000, 1, 1).and_time(hm(0, 0));
        for _ in 0..5_000 {
            let a = base + TimeDelta::minutes(rng.random_range(0..2_000_000));
            let b = base + TimeDelta::minutes(rng.random_range(0..2_000_000));
            let forward = a.until(&b, TimeUnit::Days).unwrap();
            let backward = b.until(&a, TimeUnit::Days).unwrap();
            assert_eq!(forward, -backward, "{} / {}", a, b);
            assert_eq!(forward, b.signed_duration_since(a).num_days(), "{} / {}", a, b);
        }
    }

    #[test]
    fn test_random_gap_predicates_are_mirrored() {
        let mut rng = StdRng::seed_from_u64(101);
        let base = ymd(2000, 1, 1);
        for _ in 0..5_000 {
            let a = base + chrono::Days::new(rng.random_range(0..3_000));
            let b = base + chrono::Days::new(rng.random_range(0..3_000));
            assert_eq!(
                is_after_time_gap(&a, &b, TimeUnit::Days).unwrap(),
                is_before_time_gap(&b, &a, TimeUnit::Days).unwrap()
            );
        }
    }
}

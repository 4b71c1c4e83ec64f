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

//! Epoch-millisecond timestamps.
//!
//! A `LegacyTimestamp` counts milliseconds since 1970-01-01T00:00:00Z and
//! carries no zone. The free functions in this module move between such
//! timestamps and local or zoned date/time values.

use crate::{error::ConvertError, zone};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegacyTimestamp(i64);

impl LegacyTimestamp {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// A timestamp `millis` milliseconds after the epoch.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the epoch.
    #[inline]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// The instant of `date_time`, truncated to milliseconds.
    #[inline]
    pub fn from_date_time<Z>(date_time: &DateTime<Z>) -> Self
    where
        Z: TimeZone,
    {
        Self(date_time.timestamp_millis())
    }

    /// Converts the timestamp into a UTC date-time.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::TimestampOutOfRange` if the instant is outside
    /// the range `chrono` can represent.
    #[inline]
    pub fn to_utc(self) -> Result<DateTime<Utc>, ConvertError> {
        DateTime::from_timestamp_millis(self.0).ok_or(ConvertError::TimestampOutOfRange(self.0))
    }
}

impl<Z> From<DateTime<Z>> for LegacyTimestamp
where
    Z: TimeZone,
{
    #[inline]
    fn from(date_time: DateTime<Z>) -> Self {
        Self::from_date_time(&date_time)
    }
}

impl std::fmt::Display for LegacyTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// The timestamp expressed in `zone`.
///
/// # Errors
///
/// See [`LegacyTimestamp::to_utc`].
#[inline]
pub fn to_zoned_date_time<Z>(
    timestamp: LegacyTimestamp,
    zone: &Z,
) -> Result<DateTime<Z>, ConvertError>
where
    Z: TimeZone,
{
    Ok(timestamp.to_utc()?.with_timezone(zone))
}

/// The calendar date in `zone` at the timestamp.
///
/// # Errors
///
/// See [`LegacyTimestamp::to_utc`].
#[inline]
pub fn to_local_date<Z>(timestamp: LegacyTimestamp, zone: &Z) -> Result<NaiveDate, ConvertError>
where
    Z: TimeZone,
{
    Ok(to_local_date_time(timestamp, zone)?.date())
}

/// The wall-clock time in `zone` at the timestamp.
///
/// # Errors
///
/// See [`LegacyTimestamp::to_utc`].
#[inline]
pub fn to_local_date_time<Z>(
    timestamp: LegacyTimestamp,
    zone: &Z,
) -> Result<NaiveDateTime, ConvertError>
where
    Z: TimeZone,
{
    Ok(to_zoned_date_time(timestamp, zone)?.naive_local())
}

/// The timestamp with the offset `zone` has in effect at that instant.
///
/// # Errors
///
/// See [`LegacyTimestamp::to_utc`].
///
/// # Examples
///
/// ```rust
/// # use tempus_convert::{timestamp::to_offset_date_time, zone::parse_zone, LegacyTimestamp};
///
/// let paris = parse_zone("Europe/Paris").unwrap();
/// let dt = to_offset_date_time(LegacyTimestamp::from_millis(967_759_200_000), &paris).unwrap();
/// assert_eq!(dt.to_rfc3339(), "2000-09-01T00:00:00+02:00");
/// ```
#[inline]
pub fn to_offset_date_time<Z>(
    timestamp: LegacyTimestamp,
    zone: &Z,
) -> Result<DateTime<FixedOffset>, ConvertError>
where
    Z: TimeZone,
{
    Ok(to_zoned_date_time(timestamp, zone)?.fixed_offset())
}

/// The timestamp with a fixed `offset`.
///
/// # Errors
///
/// See [`LegacyTimestamp::to_utc`].
#[inline]
pub fn to_offset_date_time_with_offset(
    timestamp: LegacyTimestamp,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, ConvertError> {
    to_zoned_date_time(timestamp, &offset)
}

/// The first instant of `date` in `zone`.
///
/// If midnight is skipped by a transition, the instant right after the
/// transition is used.
///
/// # Errors
///
/// Returns `ConvertError::Overflow` at the edges of the supported date range.
pub fn from_local_date<Z>(date: NaiveDate, zone: &Z) -> Result<LegacyTimestamp, ConvertError>
where
    Z: TimeZone,
{
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    match zone::resolve_local(&midnight, zone) {
        Ok(start) => Ok(LegacyTimestamp::from_date_time(&start)),
        Err(ConvertError::NonexistentLocalTime(_)) => {
            // Interpret midnight with the offset in effect before the gap.
            let day_before = midnight
                .checked_sub_signed(TimeDelta::days(1))
                .ok_or(ConvertError::Overflow)?;
            let before = zone.offset_from_utc_datetime(&day_before).fix();
            let instant = midnight
                .checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))
                .ok_or(ConvertError::Overflow)?;
            tracing::debug!(%date, %before, "start of day falls into a gap, moving past it");
            Ok(LegacyTimestamp::from_millis(instant.and_utc().timestamp_millis()))
        }
        Err(error) => Err(error),
    }
}

/// The instant of the wall-clock time `local` in `zone`.
///
/// # Errors
///
/// See [`zone::resolve_local`].
#[inline]
pub fn from_local_date_time<Z>(
    local: &NaiveDateTime,
    zone: &Z,
) -> Result<LegacyTimestamp, ConvertError>
where
    Z: TimeZone,
{
    Ok(LegacyTimestamp::from_date_time(&zone::resolve_local(local, zone)?))
}

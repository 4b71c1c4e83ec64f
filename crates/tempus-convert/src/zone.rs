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

//! Time zones and offsets.
//!
//! Wall-clock times are mapped onto a zone with the primitives `chrono`
//! provides: a time that occurs twice (the hour repeated when clocks go
//! back) resolves to the earlier instant, a time that never occurs (the hour
//! skipped when clocks go forward) is rejected.

use crate::error::ConvertError;
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Looks up an IANA time zone such as `"Europe/Paris"`.
///
/// # Errors
///
/// Returns `ConvertError::UnknownTimeZone` if the name is not in the
/// time zone database.
///
/// # Examples
///
/// ```rust
/// # use tempus_convert::zone::parse_zone;
///
/// assert_eq!(parse_zone("Europe/Paris").unwrap().name(), "Europe/Paris");
/// assert!(parse_zone("Mars/Olympus_Mons").is_err());
/// ```
pub fn parse_zone(name: &str) -> Result<Tz, ConvertError> {
    name.parse::<Tz>().map_err(|_| {
        tracing::debug!(zone = name, "unknown time zone");
        ConvertError::UnknownTimeZone(name.to_owned())
    })
}

/// Returns the offset from UTC in effect in `zone` at `instant`.
#[inline]
pub fn offset_at<Z>(instant: &DateTime<Utc>, zone: &Z) -> FixedOffset
where
    Z: TimeZone,
{
    zone.offset_from_utc_datetime(&instant.naive_utc()).fix()
}

/// Maps the wall-clock time `local` onto `zone`.
///
/// # Errors
///
/// Returns `ConvertError::NonexistentLocalTime` if `local` falls into a gap
/// of the zone.
pub fn resolve_local<Z>(local: &NaiveDateTime, zone: &Z) -> Result<DateTime<Z>, ConvertError>
where
    Z: TimeZone,
{
    match zone.from_local_datetime(local) {
        LocalResult::Single(resolved) => Ok(resolved),
        LocalResult::Ambiguous(earliest, latest) => {
            tracing::debug!(
                %local,
                earliest = %earliest.offset().fix(),
                latest = %latest.offset().fix(),
                "ambiguous local time, using the earliest instant"
            );
            Ok(earliest)
        }
        LocalResult::None => {
            tracing::debug!(%local, "local time does not exist in the time zone");
            Err(ConvertError::NonexistentLocalTime(*local))
        }
    }
}

/// Maps `local` onto `zone` and returns it with the offset in effect there.
///
/// # Errors
///
/// See [`resolve_local`].
///
/// # Examples
///
/// ```rust
/// # use tempus_convert::zone::{parse_zone, to_offset_date_time};
/// # use chrono::NaiveDate;
///
/// let paris = parse_zone("Europe/Paris").unwrap();
/// let local = NaiveDate::from_ymd_opt(2000, 9, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let dt = to_offset_date_time(&local, &paris).unwrap();
/// assert_eq!(dt.to_rfc3339(), "2000-09-01T00:00:00+02:00");
/// ```
#[inline]
pub fn to_offset_date_time<Z>(
    local: &NaiveDateTime,
    zone: &Z,
) -> Result<DateTime<FixedOffset>, ConvertError>
where
    Z: TimeZone,
{
    Ok(resolve_local(local, zone)?.fixed_offset())
}

/// Attaches a fixed `offset` to the wall-clock time `local`.
///
/// # Errors
///
/// Returns `ConvertError::NonexistentLocalTime` only when the resulting
/// instant is outside the representable range.
#[inline]
pub fn with_offset(
    local: &NaiveDateTime,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, ConvertError> {
    local
        .and_local_timezone(offset)
        .single()
        .ok_or(ConvertError::NonexistentLocalTime(*local))
}

/// Re-expresses `date_time` in `zone`, keeping the instant.
#[inline]
pub fn to_zoned<Z, O>(date_time: &DateTime<O>, zone: &Z) -> DateTime<Z>
where
    Z: TimeZone,
    O: TimeZone,
{
    date_time.with_timezone(zone)
}

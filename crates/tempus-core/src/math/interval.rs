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

use crate::{error::InvalidArgument, relation::IntervalRelation};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use std::{
    cmp::{Ordering, max, min},
    ops::{BitAnd, BitOr},
};

/// An immutable interval `(start, end)` on a totally ordered time axis.
///
/// The interval is read as `[start, end)` by `contains`, but the relation
/// predicates only ever compare endpoints, so the same value serves callers
/// that think of their windows as closed.
///
/// # Invariants
///
/// `start <= end` is *not* enforced by [`Interval::new`]. Callers are
/// responsible for meaningful ranges; [`Interval::try_new`] validates and
/// [`Interval::is_well_formed`] can be checked afterwards.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

/// An interval of UTC instants.
pub type Period = Interval<DateTime<Utc>>;

impl<T> Interval<T>
where
    T: Copy + Ord,
{
    /// Creates a new `Interval` from two instants.
    ///
    /// The endpoints are taken as given; a reversed pair is accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.start(), 0);
    /// assert_eq!(iv.end(), 10);
    /// ```
    #[inline]
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Creates a new `Interval` if `start <= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// assert!(Interval::try_new(0, 10).is_some());
    /// assert!(Interval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates a new `Interval` from endpoints that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming `"start"` or `"end"` if that endpoint
    /// is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::from_endpoints(Some(1), Some(2)), Ok(Interval::new(1, 2)));
    /// assert!(Interval::from_endpoints(Some(1), None).is_err());
    /// ```
    #[inline]
    pub fn from_endpoints(start: Option<T>, end: Option<T>) -> Result<Self, InvalidArgument> {
        let start = InvalidArgument::require(start, "start")?;
        let end = InvalidArgument::require(end, "end")?;
        Ok(Self::new(start, end))
    }

    /// Returns the start instant.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the end instant.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if `start <= end`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Returns `true` if the interval is empty (`start == end`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies in `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(0, 10);
    /// assert!(iv.contains(0));
    /// assert!(!iv.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value < self.end
    }

    /// Returns `true` if the two intervals share any instant.
    ///
    /// Touching at a single endpoint is not an overlap, unless the two
    /// intervals are equal (which makes an empty interval overlap itself).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.overlaps(Interval::new(5, 15)));
    /// assert!(!a.overlaps(Interval::new(10, 20)));
    /// assert!(Interval::new(3, 3).overlaps(Interval::new(3, 3)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        *self == other || (self.start < other.end && other.start < self.end)
    }

    /// Returns `true` if `self` fully contains `other`, shared endpoints included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.encloses(Interval::new(0, 10)));
    /// assert!(a.encloses(Interval::new(2, 8)));
    /// assert!(!a.encloses(Interval::new(5, 11)));
    /// ```
    #[inline]
    pub fn encloses(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if exactly one pair of endpoints coincides:
    /// `self.end == other.start` or `self.start == other.end`, but not both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.adjoins(Interval::new(10, 20)));
    /// assert!(a.adjoins(Interval::new(-5, 0)));
    /// assert!(!a.adjoins(Interval::new(9, 11)));
    /// ```
    #[inline]
    pub fn adjoins(&self, other: Self) -> bool {
        (self.end == other.start) ^ (self.start == other.end)
    }

    /// Returns `true` if the intervals overlap, adjoin or are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.is_connected(Interval::new(10, 20)));
    /// assert!(a.is_connected(Interval::new(5, 15)));
    /// assert!(!a.is_connected(Interval::new(11, 20)));
    /// ```
    #[inline]
    pub fn is_connected(&self, other: Self) -> bool {
        *self == other || (self.start <= other.end && other.start <= self.end)
    }

    /// Returns `true` if `self` ends at or before `other` starts.
    ///
    /// An interval is never before itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert!(a.is_before(Interval::new(10, 20)));
    /// assert!(!a.is_before(Interval::new(9, 20)));
    /// ```
    #[inline]
    pub fn is_before(&self, other: Self) -> bool {
        self.end <= other.start && *self != other
    }

    /// Returns `true` if `self` starts at or after `other` ends.
    ///
    /// An interval is never after itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::new(10, 20);
    /// assert!(a.is_after(Interval::new(0, 10)));
    /// assert!(!a.is_after(Interval::new(0, 11)));
    /// ```
    #[inline]
    pub fn is_after(&self, other: Self) -> bool {
        self.start >= other.end && *self != other
    }

    /// Returns `true` if `self` strictly encloses `other` on both sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// assert!(Interval::new(0, 10).is_between(Interval::new(2, 8)));
    /// assert!(!Interval::new(0, 10).is_between(Interval::new(0, 8)));
    /// ```
    #[inline]
    pub fn is_between(&self, other: Self) -> bool {
        self.start < other.start && self.end > other.end
    }

    /// Returns `true` if `self` starts earlier and ends earlier than `other`.
    #[inline]
    pub fn is_overlapping_before(&self, other: Self) -> bool {
        self.start < other.start && self.end < other.end
    }

    /// Returns `true` if `self` starts later and ends later than `other`.
    #[inline]
    pub fn is_overlapping_after(&self, other: Self) -> bool {
        self.start > other.start && self.end > other.end
    }

    /// Returns `true` if `self` is strictly nested inside `other`.
    #[inline]
    pub fn is_overlapping_before_and_after(&self, other: Self) -> bool {
        self.start > other.start && self.end < other.end
    }

    /// Returns `true` if `self` starts where `other` ends.
    #[inline]
    pub fn is_bordering_on_end_to_start(&self, other: Self) -> bool {
        self.start == other.end
    }

    /// Returns `true` if `self` ends where `other` starts.
    #[inline]
    pub fn is_bordering_on_start_to_end(&self, other: Self) -> bool {
        self.end == other.start
    }

    /// Returns `true` if both endpoints are equal.
    #[inline]
    pub fn is_equal(&self, other: Self) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Returns `true` if `self` is nested at the end of `other`, sharing its end.
    #[inline]
    pub fn is_smaller_and_overlapping_and_bordering_on_end(&self, other: Self) -> bool {
        self.start > other.start && self.end == other.end
    }

    /// Returns `true` if `self` reaches past the start of `other` and shares its end.
    #[inline]
    pub fn is_larger_and_overlapping_and_bordering_on_end(&self, other: Self) -> bool {
        self.start < other.start && self.end == other.end
    }

    /// Returns `true` if `self` is nested at the start of `other`, sharing its start.
    #[inline]
    pub fn is_smaller_and_overlapping_and_bordering_on_start(&self, other: Self) -> bool {
        self.start == other.start && self.end < other.end
    }

    /// Returns `true` if `self` shares the start of `other` and reaches past its end.
    #[inline]
    pub fn is_larger_and_overlapping_and_bordering_on_start(&self, other: Self) -> bool {
        self.start == other.start && self.end > other.end
    }

    /// Classifies how `self` lies relative to `other`.
    ///
    /// Exactly one layout is returned. `Equal` is tested first, then `Before`
    /// and `After` (which include touching endpoints), and finally the
    /// combination of start and end comparisons.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    /// # use tempus_core::relation::IntervalRelation;
    ///
    /// let a = Interval::new(0, 10);
    /// assert_eq!(a.relation_to(Interval::new(10, 20)), IntervalRelation::Before);
    /// assert_eq!(a.relation_to(Interval::new(2, 8)), IntervalRelation::Between);
    /// assert_eq!(a.relation_to(Interval::new(5, 15)), IntervalRelation::OverlappingBefore);
    /// ```
    pub fn relation_to(&self, other: Self) -> IntervalRelation {
        if self.is_equal(other) {
            return IntervalRelation::Equal;
        }
        if self.is_before(other) {
            return IntervalRelation::Before;
        }
        if self.is_after(other) {
            return IntervalRelation::After;
        }

        match (self.start.cmp(&other.start), self.end.cmp(&other.end)) {
            (Ordering::Less, Ordering::Greater) => IntervalRelation::Between,
            (Ordering::Less, Ordering::Less) => IntervalRelation::OverlappingBefore,
            (Ordering::Less, Ordering::Equal) => IntervalRelation::LargerBorderingOnEnd,
            (Ordering::Greater, Ordering::Less) => IntervalRelation::Within,
            (Ordering::Greater, Ordering::Greater) => IntervalRelation::OverlappingAfter,
            (Ordering::Greater, Ordering::Equal) => IntervalRelation::SmallerBorderingOnEnd,
            (Ordering::Equal, Ordering::Less) => IntervalRelation::SmallerBorderingOnStart,
            (Ordering::Equal, Ordering::Greater) => IntervalRelation::LargerBorderingOnStart,
            (Ordering::Equal, Ordering::Equal) => IntervalRelation::Equal,
        }
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals do not share a non-empty stretch of time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert_eq!(a.intersection(Interval::new(5, 15)), Some(Interval::new(5, 10)));
    /// assert_eq!(a.intersection(Interval::new(10, 15)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let start = max(self.start, other.start);
        let end = min(self.end, other.end);

        if start < end {
            Some(Self::new(start, end))
        } else {
            None
        }
    }

    /// Calculates the smallest interval covering both intervals.
    ///
    /// Returns `None` if the intervals are not connected (separated by a gap).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// assert_eq!(a.span(Interval::new(10, 20)), Some(Interval::new(0, 20)));
    /// assert_eq!(a.span(Interval::new(11, 20)), None);
    /// ```
    #[inline]
    pub fn span(&self, other: Self) -> Option<Self> {
        if self.is_connected(other) {
            Some(Self::new(
                min(self.start, other.start),
                max(self.end, other.end),
            ))
        } else {
            None
        }
    }

    /// Returns the interval between two disjoint intervals.
    ///
    /// Returns `None` if the intervals overlap or touch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 5);
    /// assert_eq!(a.gap(Interval::new(10, 15)), Some(Interval::new(5, 10)));
    /// assert_eq!(Interval::new(10, 15).gap(a), Some(Interval::new(5, 10)));
    /// ```
    #[inline]
    pub fn gap(&self, other: Self) -> Option<Self> {
        if self.end < other.start {
            Some(Self::new(self.end, other.start))
        } else if other.end < self.start {
            Some(Self::new(other.end, self.start))
        } else {
            None
        }
    }
}

impl Interval<DateTime<Utc>> {
    /// Creates a `Period` spanning from midnight UTC of `start` to midnight
    /// UTC of `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::math::interval::Period;
    /// # use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2007, 11, 3).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2007, 11, 4).unwrap();
    /// let p = Period::of_dates(start, end);
    /// assert_eq!(p.duration().num_hours(), 24);
    /// ```
    #[inline]
    pub fn of_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(
            start.and_time(NaiveTime::MIN).and_utc(),
            end.and_time(NaiveTime::MIN).and_utc(),
        )
    }

    /// Returns the signed length `end - start`.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }
}

impl<T> BitAnd for Interval<T>
where
    T: Copy + Ord,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for Interval<T>
where
    T: Copy + Ord,
{
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.span(rhs)
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.end)
    }
}

impl<T> From<std::ops::Range<T>> for Interval<T> {
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl<T> From<Interval<T>> for std::ops::Range<T> {
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        std::ops::Range {
            start: iv.start,
            end: iv.end,
        }
    }
}

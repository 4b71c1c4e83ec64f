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

//! Checked interval relation predicates.
//!
//! Every predicate takes the *given* interval `A` first and the *reference*
//! interval `B` second; the order matters for all of them except
//! `is_equal`. Arguments are optional so that values coming from loosely
//! typed sources can be classified directly: an absent argument is reported
//! as `InvalidArgument` naming either `"given"` or `"reference"`.
//!
//! | Predicate | Holds when |
//! |---|---|
//! | `is_between` | `A.s < B.s && A.e > B.e` |
//! | `is_overlapping_before` | `A.s < B.s && A.e < B.e` |
//! | `is_overlapping_after` | `A.s > B.s && A.e > B.e` |
//! | `is_overlapping_before_and_after` | `A.s > B.s && A.e < B.e` |
//! | `is_before` | `A.e <= B.s && A != B` |
//! | `is_after` | `A.s >= B.e && A != B` |
//! | `is_bordering_on_end_to_start` | `A.s == B.e` |
//! | `is_bordering_on_start_to_end` | `A.e == B.s` |
//! | `is_equal` | `A.s == B.s && A.e == B.e` |
//! | `is_smaller_and_overlapping_and_bordering_on_end` | `A.s > B.s && A.e == B.e` |
//! | `is_larger_and_overlapping_and_bordering_on_end` | `A.s < B.s && A.e == B.e` |
//! | `is_smaller_and_overlapping_and_bordering_on_start` | `A.s == B.s && A.e < B.e` |
//! | `is_larger_and_overlapping_and_bordering_on_start` | `A.s == B.s && A.e > B.e` |

use crate::{error::InvalidArgument, math::interval::Interval};

/// The layout of a given interval relative to a reference interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalRelation {
    /// Both endpoints coincide.
    Equal,
    /// The given interval ends at or before the reference starts.
    Before,
    /// The given interval starts at or after the reference ends.
    After,
    /// The given interval strictly encloses the reference.
    Between,
    /// The given interval is strictly nested inside the reference.
    Within,
    /// The given interval starts and ends earlier, and the two intersect.
    OverlappingBefore,
    /// The given interval starts and ends later, and the two intersect.
    OverlappingAfter,
    /// Nested at the end of the reference, sharing its end.
    SmallerBorderingOnEnd,
    /// Reaches past the start of the reference, sharing its end.
    LargerBorderingOnEnd,
    /// Nested at the start of the reference, sharing its start.
    SmallerBorderingOnStart,
    /// Shares the start of the reference and reaches past its end.
    LargerBorderingOnStart,
}

impl IntervalRelation {
    /// Returns the relation obtained by swapping the given and the reference
    /// interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::relation::IntervalRelation;
    ///
    /// assert_eq!(IntervalRelation::Before.inverse(), IntervalRelation::After);
    /// assert_eq!(IntervalRelation::Between.inverse(), IntervalRelation::Within);
    /// ```
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Equal => Self::Equal,
            Self::Before => Self::After,
            Self::After => Self::Before,
            Self::Between => Self::Within,
            Self::Within => Self::Between,
            Self::OverlappingBefore => Self::OverlappingAfter,
            Self::OverlappingAfter => Self::OverlappingBefore,
            Self::SmallerBorderingOnEnd => Self::LargerBorderingOnEnd,
            Self::LargerBorderingOnEnd => Self::SmallerBorderingOnEnd,
            Self::SmallerBorderingOnStart => Self::LargerBorderingOnStart,
            Self::LargerBorderingOnStart => Self::SmallerBorderingOnStart,
        }
    }

    /// Returns `true` if the two intervals share a non-empty stretch of time.
    #[inline]
    pub const fn is_overlapping(self) -> bool {
        !matches!(self, Self::Before | Self::After)
    }
}

impl std::fmt::Display for IntervalRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Equal => "equal",
            Self::Before => "before",
            Self::After => "after",
            Self::Between => "between",
            Self::Within => "within",
            Self::OverlappingBefore => "overlapping before",
            Self::OverlappingAfter => "overlapping after",
            Self::SmallerBorderingOnEnd => "smaller, bordering on end",
            Self::LargerBorderingOnEnd => "larger, bordering on end",
            Self::SmallerBorderingOnStart => "smaller, bordering on start",
            Self::LargerBorderingOnStart => "larger, bordering on start",
        };
        f.write_str(name)
    }
}

#[inline(always)]
fn require_both<T>(
    given: Option<&Interval<T>>,
    reference: Option<&Interval<T>>,
) -> Result<(Interval<T>, Interval<T>), InvalidArgument>
where
    T: Copy + Ord,
{
    let given = InvalidArgument::require(given, "given")?;
    let reference = InvalidArgument::require(reference, "reference")?;
    Ok((*given, *reference))
}

macro_rules! checked_relation {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// Returns `InvalidArgument` if either interval is absent.
        #[inline]
        pub fn $name<T>(
            given: Option<&Interval<T>>,
            reference: Option<&Interval<T>>,
        ) -> Result<bool, InvalidArgument>
        where
            T: Copy + Ord,
        {
            let (given, reference) = require_both(given, reference)?;
            Ok(given.$name(reference))
        }
    };
}

checked_relation!(
    /// Checks whether `given` strictly encloses `reference` on both sides.
    is_between
);
checked_relation!(
    /// Checks whether `given` starts earlier and ends earlier than `reference`.
    is_overlapping_before
);
checked_relation!(
    /// Checks whether `given` starts later and ends later than `reference`.
    is_overlapping_after
);
checked_relation!(
    /// Checks whether `given` is strictly nested inside `reference`.
    is_overlapping_before_and_after
);
checked_relation!(
    /// Checks whether `given` ends at or before `reference` starts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::{math::interval::Interval, relation};
    ///
    /// let a = Interval::new(0, 10);
    /// let b = Interval::new(10, 20);
    /// assert_eq!(relation::is_before(Some(&a), Some(&b)), Ok(true));
    /// assert!(relation::is_before(Some(&a), None).is_err());
    /// ```
    is_before
);
checked_relation!(
    /// Checks whether `given` starts at or after `reference` ends.
    is_after
);
checked_relation!(
    /// Checks whether the start of `given` coincides with the end of `reference`.
    is_bordering_on_end_to_start
);
checked_relation!(
    /// Checks whether the end of `given` coincides with the start of `reference`.
    is_bordering_on_start_to_end
);
checked_relation!(
    /// Checks whether both endpoints coincide.
    is_equal
);
checked_relation!(
    /// Checks whether `given` is nested at the end of `reference`, sharing its end.
    is_smaller_and_overlapping_and_bordering_on_end
);
checked_relation!(
    /// Checks whether `given` reaches past the start of `reference` and shares its end.
    is_larger_and_overlapping_and_bordering_on_end
);
checked_relation!(
    /// Checks whether `given` is nested at the start of `reference`, sharing its start.
    is_smaller_and_overlapping_and_bordering_on_start
);
checked_relation!(
    /// Checks whether `given` shares the start of `reference` and reaches past its end.
    is_larger_and_overlapping_and_bordering_on_start
);

/// Classifies how `given` lies relative to `reference`.
///
/// # Errors
///
/// Returns `InvalidArgument` if either interval is absent.
///
/// # Examples
///
/// ```rust
/// # use tempus_core::{math::interval::Interval, relation::{self, IntervalRelation}};
///
/// let a = Interval::new(5, 15);
/// let b = Interval::new(10, 20);
/// assert_eq!(relation::classify(Some(&a), Some(&b)), Ok(IntervalRelation::OverlappingBefore));
/// ```
#[inline]
pub fn classify<T>(
    given: Option<&Interval<T>>,
    reference: Option<&Interval<T>>,
) -> Result<IntervalRelation, InvalidArgument>
where
    T: Copy + Ord,
{
    let (given, reference) = require_both(given, reference)?;
    Ok(given.relation_to(reference))
}

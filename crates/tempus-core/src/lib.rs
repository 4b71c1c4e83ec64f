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

//! # Tempus Core
//!
//! The interval algebra underneath the Tempus date/time helpers. This crate
//! defines an immutable interval value type over any totally ordered instant
//! and the family of predicates that classify how one interval lies relative
//! to another: before, after, overlapping, bordering, enclosing, equal.
//!
//! ## Modules
//!
//! - `math`: The `Interval<T>` value type with the general relations
//!   (`overlaps`, `encloses`, `adjoins`, `is_connected`, `is_before`,
//!   `is_after`), the named layout predicates, set operations
//!   (intersection/span/gap) and the `Period` alias over UTC instants.
//! - `relation`: Checked free-function forms of every predicate which accept
//!   possibly absent intervals and report them as `InvalidArgument`, plus the
//!   `IntervalRelation` layout classification.
//! - `error`: The `InvalidArgument` error type.
//!
//! ## Purpose
//!
//! Scheduling and calendar code needs to decide how a candidate window
//! relates to an existing one (containment, overlap direction, exact
//! adjacency) without computing generic set differences. Each named
//! predicate corresponds to one visually distinguishable layout.
//!
//! All operations are pure, allocation free and run in constant time.

pub mod error;
pub mod math;
pub mod relation;

pub use error::InvalidArgument;
pub use math::interval::{Interval, Period};
pub use relation::IntervalRelation;

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

//! # Math Primitives
//!
//! Interval math for time-window logic.
//!
//! ## Submodules
//!
//! - `interval`: A generic `(start, end)` interval over any `Ord` instant
//!   type with relation predicates, layout classification, set operations
//!   (intersection/span/gap), conversions from `std::ops::Range` and a
//!   `RangeBounds` implementation. `Period` specializes it to
//!   `DateTime<Utc>`.
//!
//! ## Motivation
//!
//! Calendar and booking systems routinely compare windows of time. Keeping the
//! comparisons on a single small value type makes the boundary conditions
//! (shared endpoints, nested windows) explicit and testable in one place.

pub mod interval;

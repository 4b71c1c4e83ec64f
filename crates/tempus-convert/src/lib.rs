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

//! # Tempus Convert
//!
//! Conversions around the interval and calendar crates: legacy
//! epoch-millisecond timestamps, time-zone and offset resolution, pattern
//! based parsing and formatting, the XML Schema `dateTime` lexical form, and
//! whole-unit time gap checks.
//!
//! ## Modules
//!
//! - `timestamp`: `LegacyTimestamp` and its conversions to local, offset and
//!   zoned date/time values (and back).
//! - `zone`: IANA zone lookup, offsets in effect at an instant, and mapping
//!   wall-clock times onto a zone.
//! - `pattern`: The `DatePattern` catalogue and the `FormatPattern` trait.
//! - `format`: Parsing and formatting against a `FormatPattern`.
//! - `xsd`: XML Schema `dateTime` strings.
//! - `gap`: `TimeUnit`, the `Temporal` trait and the time gap predicates.
//! - `error`: The `ConvertError` type.
//!
//! ## Logging
//!
//! Conversions emit `tracing` events at `debug`/`trace` level whenever they
//! resolve something the caller did not spell out, such as an ambiguous
//! local time. No subscriber is installed by this crate.

pub mod error;
pub mod format;
pub mod gap;
pub mod pattern;
pub mod timestamp;
pub mod xsd;
pub mod zone;

pub use error::ConvertError;
pub use gap::{Temporal, TimeUnit};
pub use pattern::{DatePattern, FormatPattern};
pub use timestamp::LegacyTimestamp;

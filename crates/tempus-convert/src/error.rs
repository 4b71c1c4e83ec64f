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

use crate::gap::TimeUnit;
use chrono::NaiveDateTime;
use std::fmt::{Display, Formatter};
use tempus_core::error::InvalidArgument;

/// Details about a failed parse of a date/time string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateError {
    /// The string that failed to parse.
    pub input: String,
    /// The format string it was parsed against.
    pub pattern: String,
    /// The underlying `chrono` error.
    pub source: chrono::ParseError,
}

impl Display for ParseDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse '{}' with pattern '{}': {}",
            self.input, self.pattern, self.source
        )
    }
}

impl std::error::Error for ParseDateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// The error type for conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A required argument was absent.
    InvalidArgument(InvalidArgument),
    /// A string did not match the expected pattern.
    Parse(ParseDateError),
    /// A value could not be rendered with the given pattern, either because
    /// the pattern is malformed or it asks for fields the value lacks.
    Format { pattern: String },
    /// The name is not a known IANA time zone.
    UnknownTimeZone(String),
    /// The wall-clock time falls into a gap of the zone (e.g. a DST jump).
    NonexistentLocalTime(NaiveDateTime),
    /// The epoch milliseconds lie outside the representable range.
    TimestampOutOfRange(i64),
    /// The unit cannot measure the given kind of temporal.
    UnsupportedUnit {
        unit: TimeUnit,
        temporal: &'static str,
    },
    /// The amount does not fit into 64 bits in the requested unit.
    Overflow,
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(e) => write!(f, "{}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Format { pattern } => write!(f, "Could not format with pattern '{}'", pattern),
            Self::UnknownTimeZone(name) => write!(f, "Unknown time zone '{}'", name),
            Self::NonexistentLocalTime(local) => {
                write!(f, "Local time {} does not exist in the time zone", local)
            }
            Self::TimestampOutOfRange(millis) => {
                write!(f, "Timestamp {}ms is outside the supported range", millis)
            }
            Self::UnsupportedUnit { unit, temporal } => {
                write!(f, "Unit {} is not supported for {}", unit, temporal)
            }
            Self::Overflow => write!(f, "Amount overflows the requested unit"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidArgument> for ConvertError {
    fn from(e: InvalidArgument) -> Self {
        Self::InvalidArgument(e)
    }
}

impl From<ParseDateError> for ConvertError {
    fn from(e: ParseDateError) -> Self {
        Self::Parse(e)
    }
}

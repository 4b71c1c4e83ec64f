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

use std::fmt::{Display, Formatter};

/// The error returned when a required argument is absent.
///
/// The relation predicates, the interval construction interface and the
/// calendar queries only ever fail for this reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidArgument {
    /// The name of the absent argument (e.g. `"reference"`).
    pub argument: &'static str,
}

impl InvalidArgument {
    /// Creates an error naming the absent `argument`.
    #[inline]
    pub const fn absent(argument: &'static str) -> Self {
        Self { argument }
    }

    /// Unwraps `value`, or fails naming `argument` when it is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tempus_core::error::InvalidArgument;
    ///
    /// assert_eq!(InvalidArgument::require(Some(3), "start"), Ok(3));
    /// assert_eq!(
    ///     InvalidArgument::require(None::<i32>, "start"),
    ///     Err(InvalidArgument::absent("start"))
    /// );
    /// ```
    #[inline]
    pub fn require<T>(value: Option<T>, argument: &'static str) -> Result<T, Self> {
        value.ok_or(Self::absent(argument))
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid argument: '{}' must not be absent", self.argument)
    }
}

impl std::error::Error for InvalidArgument {}

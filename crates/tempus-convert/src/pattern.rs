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

//! Date/time patterns.
//!
//! Patterns are `chrono` strftime format strings. `DatePattern` names the
//! layouts that come up again and again in legacy data; any `&str` or
//! `String` works as a pattern too.

/// A source of a `chrono` strftime format string.
pub trait FormatPattern {
    /// Returns the format string.
    fn format_str(&self) -> &str;
}

impl FormatPattern for str {
    #[inline]
    fn format_str(&self) -> &str {
        self
    }
}

impl FormatPattern for String {
    #[inline]
    fn format_str(&self) -> &str {
        self.as_str()
    }
}

impl<P> FormatPattern for &P
where
    P: FormatPattern + ?Sized,
{
    #[inline]
    fn format_str(&self) -> &str {
        (**self).format_str()
    }
}

/// Well-known date/time layouts.
///
/// Month and weekday names are English. The 12-hour layouts carry no AM/PM
/// marker, so they format fine but cannot be parsed back into a date/time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePattern {
    /// `2019-04-21T10:15:30`
    IsoDateTime,
    /// `Sunday Apr 21, 2019`
    WeekdayMonthDayYear,
    /// `2019-04-21 10:15:30` on a 12-hour clock
    DateTime12Hour,
    /// `21-Apr-19`
    DayMonthNameShortYear,
    /// `2019.04.21.10.15.30`
    DottedDateTimeCompact,
    /// `Sun Apr 21 10:15:30 UTC 2019` on a 12-hour clock
    UnixDate,
    /// `2019-04-21 10:15:30.500` on a 12-hour clock
    DateTime12HourFraction,
    /// `21.04`
    DottedDayMonth,
    /// `20190421101530`
    Compact,
    /// `22:15:30`
    Time24,
    /// `22:15`
    Time24Short,
    /// `10:15:30` on a 12-hour clock
    Time12,
    /// `21.04.2019`
    DottedDate,
    /// `21.04.2019 22:15:30`
    DottedDateTime,
    /// `22:15, 21.04.2019`
    TimeCommaDottedDate,
    /// `22:15, 21.4.2019`
    TimeCommaDottedDateShortMonth,
    /// `2019-04-21`
    IsoDate,
    /// `21.04.19`
    DottedDateShortYear,
}

impl DatePattern {
    /// Every pattern, in declaration order.
    pub const ALL: [DatePattern; 18] = [
        Self::IsoDateTime,
        Self::WeekdayMonthDayYear,
        Self::DateTime12Hour,
        Self::DayMonthNameShortYear,
        Self::DottedDateTimeCompact,
        Self::UnixDate,
        Self::DateTime12HourFraction,
        Self::DottedDayMonth,
        Self::Compact,
        Self::Time24,
        Self::Time24Short,
        Self::Time12,
        Self::DottedDate,
        Self::DottedDateTime,
        Self::TimeCommaDottedDate,
        Self::TimeCommaDottedDateShortMonth,
        Self::IsoDate,
        Self::DottedDateShortYear,
    ];

    /// Returns the strftime format string of the pattern.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IsoDateTime => "%Y-%m-%dT%H:%M:%S",
            Self::WeekdayMonthDayYear => "%A %b %d, %Y",
            Self::DateTime12Hour => "%Y-%m-%d %I:%M:%S",
            Self::DayMonthNameShortYear => "%d-%b-%y",
            Self::DottedDateTimeCompact => "%Y.%m.%d.%H.%M.%S",
            Self::UnixDate => "%a %b %d %I:%M:%S %Z %Y",
            Self::DateTime12HourFraction => "%Y-%m-%d %I:%M:%S%.3f",
            Self::DottedDayMonth => "%d.%m",
            Self::Compact => "%Y%m%d%H%M%S",
            Self::Time24 => "%H:%M:%S",
            Self::Time24Short => "%H:%M",
            Self::Time12 => "%I:%M:%S",
            Self::DottedDate => "%d.%m.%Y",
            Self::DottedDateTime => "%d.%m.%Y %H:%M:%S",
            Self::TimeCommaDottedDate => "%H:%M, %d.%m.%Y",
            Self::TimeCommaDottedDateShortMonth => "%H:%M, %d.%-m.%Y",
            Self::IsoDate => "%Y-%m-%d",
            Self::DottedDateShortYear => "%d.%m.%y",
        }
    }
}

impl FormatPattern for DatePattern {
    #[inline]
    fn format_str(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for DatePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::format::{Item, StrftimeItems};

    #[test]
    fn test_every_pattern_is_well_formed() {
        for pattern in DatePattern::ALL {
            let malformed = StrftimeItems::new(pattern.as_str()).any(|i| matches!(i, Item::Error));
            assert!(!malformed, "{:?}", pattern);
        }
    }

    #[test]
    fn test_format_pattern_sources_agree() {
        let owned = String::from("%Y-%m-%d");
        assert_eq!(DatePattern::IsoDate.format_str(), "%Y-%m-%d");
        assert_eq!(owned.format_str(), "%Y-%m-%d");
        assert_eq!("%Y-%m-%d".format_str(), "%Y-%m-%d");
        assert_eq!((&DatePattern::IsoDate).format_str(), "%Y-%m-%d");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DatePattern::DottedDate), "%d.%m.%Y");
    }
}

//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// Formats a date as a heading, e.g. `Monday, January 6`.
pub struct DayHeading<'a>(pub &'a Date);

impl fmt::Display for DayHeading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%A, %B %-d"))
    }
}

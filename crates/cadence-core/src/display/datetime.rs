//! DateTime display utilities.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ` with
/// zero-padded components and the timezone abbreviation (e.g., UTC, JST).
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

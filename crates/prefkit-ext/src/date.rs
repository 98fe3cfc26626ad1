//! Timestamp construction from calendar components.

use chrono::{DateTime, TimeZone, Utc};

/// Calendar components for constructing a timestamp.
///
/// Day, month and year are required; the time-of-day components default to
/// zero. Resolution happens in a caller-supplied time zone, and combinations
/// that name no valid instant (day 31 of February, nonexistent local times)
/// yield `None`.
///
/// ```rust
/// use chrono::Utc;
/// use prefkit_ext::DateComponents;
///
/// let date = DateComponents::new(23, 2, 1999)
///     .at(9, 41, 0)
///     .resolve(&Utc)
///     .expect("valid date");
/// assert_eq!(date.to_rfc3339(), "1999-02-23T09:41:00+00:00");
///
/// assert!(DateComponents::new(31, 2, 1999).resolve(&Utc).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateComponents {
    /// Day of month, 1-based.
    pub day: u32,
    /// Month of year, 1-based.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Hour of day, defaults to 0.
    pub hour: u32,
    /// Minute, defaults to 0.
    pub minute: u32,
    /// Second, defaults to 0.
    pub second: u32,
}

impl DateComponents {
    /// Components for midnight on the given day.
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self {
            day,
            month,
            year,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Set the time-of-day components.
    pub fn at(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// Resolve the components to an instant in `tz`.
    ///
    /// Returns `None` if no valid (unambiguous) instant matches.
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        tz.with_ymd_and_hms(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
        .single()
    }

    /// Resolve the components in UTC.
    pub fn resolve_utc(&self) -> Option<DateTime<Utc>> {
        self.resolve(&Utc)
    }
}

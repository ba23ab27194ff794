//! Wall-clock times as printed on PATH timetables.
//!
//! The timetable pages and the watch client both speak 12-hour tokens such
//! as "5:15AM" or "12:05PM". Internally a time is minutes since midnight so
//! comparisons and differences are plain integer arithmetic on a 24-hour
//! circle.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned when parsing an invalid time token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day without a date.
///
/// # Examples
///
/// ```
/// use path_server::domain::ClockTime;
///
/// let t = ClockTime::parse("5:15AM").unwrap();
/// assert_eq!(t.minutes(), 5 * 60 + 15);
/// assert_eq!(t.to_string(), "5:15AM");
///
/// let noon = ClockTime::parse("12:00PM").unwrap();
/// assert_eq!(noon.minutes(), 720);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Create a time from minutes since midnight. Returns `None` past 23:59.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Parse a `H:MMAM` / `HH:MMPM` token.
    ///
    /// The hour is 1-12 with an optional leading zero, the minute is exactly
    /// two digits, and the upper-case suffix follows the minutes directly.
    ///
    /// ```
    /// use path_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse("12:05PM").is_ok());
    /// assert!(ClockTime::parse("09:30AM").is_ok());
    ///
    /// assert!(ClockTime::parse("13:00PM").is_err());
    /// assert!(ClockTime::parse("5:15 AM").is_err());
    /// assert!(ClockTime::parse("5:15am").is_err());
    /// assert!(ClockTime::parse("---").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();
        if bytes.len() < 6 || bytes.len() > 7 {
            return Err(TimeError::new("expected H:MMAM or H:MMPM"));
        }

        let (clock, suffix) = bytes.split_at(bytes.len() - 2);
        let pm = match suffix {
            b"AM" => false,
            b"PM" => true,
            _ => return Err(TimeError::new("expected AM or PM suffix")),
        };

        let colon = clock.len() - 3;
        if clock[colon] != b':' {
            return Err(TimeError::new("expected colon before minutes"));
        }

        let hour = parse_digits(&clock[..colon]).ok_or_else(|| TimeError::new("invalid hour"))?;
        if !(1..=12).contains(&hour) {
            return Err(TimeError::new("hour must be 1-12"));
        }

        let minute =
            parse_digits(&clock[colon + 1..]).ok_or_else(|| TimeError::new("invalid minute"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };

        Ok(Self(hour * 60 + minute))
    }

    /// Minutes since midnight (0-1439).
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour on the 24-hour clock.
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute within the hour.
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Whole minutes from `self` until the next occurrence of `later`.
    ///
    /// A `later` that is earlier on the clock is taken to be tomorrow.
    ///
    /// ```
    /// use path_server::domain::ClockTime;
    ///
    /// let now = ClockTime::parse("11:55PM").unwrap();
    /// let next = ClockTime::parse("12:10AM").unwrap();
    /// assert_eq!(now.minutes_until(next), 15);
    /// assert_eq!(now.minutes_until(now), 0);
    /// ```
    pub fn minutes_until(&self, later: ClockTime) -> u16 {
        if later.0 >= self.0 {
            later.0 - self.0
        } else {
            later.0 + MINUTES_PER_DAY - self.0
        }
    }
}

impl From<NaiveTime> for ClockTime {
    /// Seconds are truncated.
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({self})")
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = match self.hour() % 12 {
            0 => 12,
            h => h,
        };
        let suffix = if self.hour() < 12 { "AM" } else { "PM" };
        write!(f, "{}:{:02}{}", hour, self.minute(), suffix)
    }
}

/// Parse one or two ASCII digits.
fn parse_digits(bytes: &[u8]) -> Option<u16> {
    if bytes.is_empty() || bytes.len() > 2 {
        return None;
    }
    bytes.iter().try_fold(0u16, |acc, &b| {
        let d = (b as char).to_digit(10)?;
        Some(acc * 10 + d as u16)
    })
}

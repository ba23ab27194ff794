//! Choosing the next departures after a reference time.

use std::fmt;

use serde::Serialize;

use crate::domain::{ClockTime, MINUTES_PER_DAY};

/// One upcoming departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Departure {
    /// Scheduled departure time.
    #[serde(serialize_with = "serialize_token")]
    pub time: ClockTime,

    /// Whole minutes from the reference time until departure.
    pub minutes_until: u16,
}

impl fmt::Display for Departure {
    /// Wire form for the watch client: `6:00AM,0 mins left;`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} mins left;", self.time, self.minutes_until)
    }
}

fn serialize_token<S: serde::Serializer>(time: &ClockTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(time)
}

/// Why no departures could be selected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// The time list is empty
    #[error("no departures scheduled")]
    Empty,

    /// Every departure of the service day is before the reference time
    #[error("no departure at or after {0}")]
    NoUpcoming(ClockTime),
}

/// The next `limit` departures at or after `reference`.
///
/// `times` is in timetable order. Once the clock goes backwards in that
/// order the remaining entries belong to the following day, so the first
/// entry not before `reference` on that service day starts the answer.
/// From there entries are taken circularly, wrapping to the start of the
/// list for the next day's first trains.
///
/// ```
/// use path_server::domain::ClockTime;
/// use path_server::timetable::next_arrivals;
///
/// let t = |s| ClockTime::parse(s).unwrap();
/// let times = [t("5:15AM"), t("6:00AM"), t("7:30AM")];
///
/// let next = next_arrivals(&times, t("6:00AM"), 2).unwrap();
/// assert_eq!(next[0].to_string(), "6:00AM,0 mins left;");
/// assert_eq!(next[1].to_string(), "7:30AM,90 mins left;");
/// ```
pub fn next_arrivals(
    times: &[ClockTime],
    reference: ClockTime,
    limit: usize,
) -> Result<Vec<Departure>, SelectError> {
    if times.is_empty() {
        return Err(SelectError::Empty);
    }

    let mut day_offset = 0u32;
    let mut previous: Option<ClockTime> = None;
    let start = times
        .iter()
        .position(|&time| {
            if previous.is_some_and(|p| time < p) {
                day_offset += u32::from(MINUTES_PER_DAY);
            }
            previous = Some(time);
            u32::from(time.minutes()) + day_offset >= u32::from(reference.minutes())
        })
        .ok_or(SelectError::NoUpcoming(reference))?;

    Ok(times
        .iter()
        .cycle()
        .skip(start)
        .take(limit)
        .map(|&time| Departure {
            time,
            minutes_until: reference.minutes_until(time),
        })
        .collect())
}

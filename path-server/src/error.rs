//! Query error taxonomy.
//!
//! Every way a station listing or departure query can fail. The web layer
//! turns these into status codes and `error: ` prefixed bodies.

use crate::domain::{ClockTime, TimeError};

/// Errors from schedule lookups and departure queries.
///
/// `Clone` so one failed population of the cache can be handed to every
/// caller that waited on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The direction has no configured timetable page
    #[error("unable to find loc: {0:?}")]
    DirectionUnknown(String),

    /// Fetching the timetable page failed or timed out
    #[error("failed to fetch {location}: {message}")]
    FetchFailed { location: String, message: String },

    /// The page has no table element
    #[error("no table element found on page")]
    ScheduleNotFound,

    /// The table could not be turned into a consistent schedule
    #[error("malformed schedule: {0}")]
    MalformedSchedule(String),

    /// The station is not part of the direction
    #[error("invalid stn: {0:?}")]
    UnknownStation(String),

    /// Requested number of departures is out of range
    #[error("invalid limit for times provided: {0} (must be 1-{max})", max = crate::timetable::MAX_TIMES_LIMIT)]
    InvalidLimit(usize),

    /// The reference time token could not be parsed
    #[error("invalid 'time': {0}")]
    InvalidTimeToken(#[from] TimeError),

    /// No departure at or after the reference time
    #[error("no departure from {station:?} at or after {reference}")]
    NoUpcomingTime {
        station: String,
        reference: ClockTime,
    },

    /// The station has no departures at all
    #[error("no departures scheduled at {0:?}")]
    StationHasNoSchedule(String),
}

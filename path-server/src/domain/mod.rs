//! Domain types for the PATH schedule server.
//!
//! Times, directions and per-direction station schedules. All types
//! enforce their invariants at construction time.

mod direction;
mod schedule;
mod time;

pub use direction::{DirectionParseError, Directions};
pub use schedule::StationSchedule;
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};

//! Timetable extraction and next-departure selection.
//!
//! A timetable page holds one table: a header row of station names and
//! body rows of departure times. Extraction finds the table, reads the
//! station names, then deals the body cells out to stations in order.

mod cells;
mod columns;
mod next;

use tracing::debug;

use crate::document::{Document, find_table};
use crate::domain::StationSchedule;
use crate::error::ScheduleError;

pub use cells::{PLACEHOLDER, assign_cells};
pub use columns::extract_columns;
pub use next::{Departure, SelectError, next_arrivals};

/// Upper bound on how many departures one query may ask for.
pub const MAX_TIMES_LIMIT: usize = 20;

/// Check a requested departure count against `1..=MAX_TIMES_LIMIT`.
pub fn validate_limit(limit: usize) -> Result<usize, ScheduleError> {
    if (1..=MAX_TIMES_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(ScheduleError::InvalidLimit(limit))
    }
}

/// Build the station schedule held in a timetable page.
pub fn extract_schedule(document: &Document) -> Result<StationSchedule, ScheduleError> {
    let table = find_table(document.root()).ok_or(ScheduleError::ScheduleNotFound)?;

    let stations = extract_columns(table);
    if stations.is_empty() {
        return Err(ScheduleError::MalformedSchedule(
            "table has no header row of station names".to_string(),
        ));
    }

    let columns = assign_cells(table, stations.len());
    let schedule = StationSchedule::new(stations, columns)?;

    debug!(
        stations = schedule.stations().len(),
        departures = schedule.departure_count(),
        "extracted timetable"
    );

    Ok(schedule)
}

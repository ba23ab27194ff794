//! Per-direction station schedules.

use std::collections::HashMap;

use crate::error::ScheduleError;

use super::ClockTime;

/// Station order and departure times for one direction.
///
/// Every station in the order list has exactly one entry in the time map
/// and vice versa. Times keep the order they appeared in the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSchedule {
    stations: Vec<String>,
    times: HashMap<String, Vec<ClockTime>>,
}

impl StationSchedule {
    /// Build a schedule from station names and the per-position time lists.
    ///
    /// Fails if there are no stations, if a station name repeats, or if
    /// the number of time lists differs from the number of stations.
    pub fn new(stations: Vec<String>, columns: Vec<Vec<ClockTime>>) -> Result<Self, ScheduleError> {
        if stations.is_empty() {
            return Err(ScheduleError::MalformedSchedule(
                "no station names in table header".to_string(),
            ));
        }

        if stations.len() != columns.len() {
            return Err(ScheduleError::MalformedSchedule(format!(
                "{} stations but {} time columns",
                stations.len(),
                columns.len()
            )));
        }

        let mut times = HashMap::with_capacity(stations.len());
        for (station, column) in stations.iter().zip(columns) {
            if times.insert(station.clone(), column).is_some() {
                return Err(ScheduleError::MalformedSchedule(format!(
                    "duplicate station {station:?}"
                )));
            }
        }

        Ok(Self { stations, times })
    }

    /// Station names in timetable order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Departure times at a station, if the station exists.
    pub fn times_at(&self, station: &str) -> Option<&[ClockTime]> {
        self.times.get(station).map(Vec::as_slice)
    }

    /// Total number of departure times across all stations.
    pub fn departure_count(&self) -> usize {
        self.times.values().map(Vec::len).sum()
    }
}

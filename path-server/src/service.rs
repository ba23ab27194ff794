//! Station listings and departure queries.
//!
//! Ties the pieces together: resolve the direction to its timetable page,
//! fetch and extract it on first use, then answer from the cached schedule.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheConfig, ScheduleCache};
use crate::domain::{ClockTime, Directions, StationSchedule};
use crate::error::ScheduleError;
use crate::source::DocumentSource;
use crate::timetable::{self, Departure, SelectError};

/// Answers schedule queries for the configured directions.
pub struct ScheduleService<S> {
    source: S,
    directions: Directions,
    cache: ScheduleCache,
}

impl<S: DocumentSource> ScheduleService<S> {
    /// Create a service reading pages from `source`.
    ///
    /// The cache has room for every direction, so a schedule is fetched at
    /// most once per process unless the fetch fails.
    pub fn new(source: S, directions: Directions) -> Self {
        let cache = ScheduleCache::new(&CacheConfig::for_directions(&directions));
        Self {
            source,
            directions,
            cache,
        }
    }

    /// The configured directions.
    pub fn directions(&self) -> &Directions {
        &self.directions
    }

    /// The schedule for a direction, fetching and extracting it on first use.
    pub async fn schedule(&self, direction: &str) -> Result<Arc<StationSchedule>, ScheduleError> {
        let page = self
            .directions
            .resolve(direction)
            .ok_or_else(|| ScheduleError::DirectionUnknown(direction.to_string()))?;

        self.cache
            .get_or_load(direction, async {
                debug!(direction, page, "loading timetable");
                let document =
                    self.source
                        .fetch(page)
                        .await
                        .map_err(|e| ScheduleError::FetchFailed {
                            location: self.source.location(page),
                            message: e.to_string(),
                        })?;
                timetable::extract_schedule(&document)
            })
            .await
    }

    /// Station names for a direction, in timetable order.
    pub async fn list_stations(&self, direction: &str) -> Result<Vec<String>, ScheduleError> {
        Ok(self.schedule(direction).await?.stations().to_vec())
    }

    /// The next `limit` departures from `station` at or after `reference`.
    pub async fn query_departures(
        &self,
        direction: &str,
        station: &str,
        reference: ClockTime,
        limit: usize,
    ) -> Result<Vec<Departure>, ScheduleError> {
        let limit = timetable::validate_limit(limit)?;
        let schedule = self.schedule(direction).await?;

        let times = schedule
            .times_at(station)
            .ok_or_else(|| ScheduleError::UnknownStation(station.to_string()))?;

        timetable::next_arrivals(times, reference, limit).map_err(|e| match e {
            SelectError::Empty => ScheduleError::StationHasNoSchedule(station.to_string()),
            SelectError::NoUpcoming(reference) => ScheduleError::NoUpcomingTime {
                station: station.to_string(),
                reference,
            },
        })
    }
}

/// Compact station list for the watch: `[name1,name2,...]`.
pub fn render_stations(stations: &[String]) -> String {
    format!("[{}]", stations.join(","))
}

/// Compact departure list for the watch: `6:00AM,0 mins left;7:30AM,90 mins left;`.
pub fn render_departures(departures: &[Departure]) -> String {
    departures.iter().map(Departure::to_string).collect()
}

//! Caching layer for extracted schedules.
//!
//! Timetables change a few times a year, so a schedule is extracted once
//! per direction and kept for the life of the process. There is no TTL;
//! restart the server to pick up a new timetable.
//!
//! Population goes through `try_get_with`, so concurrent queries for a
//! direction that is not cached yet wait on a single fetch. Failures are
//! not cached and the next query tries again.

use std::future::Future;
use std::sync::Arc;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Directions, StationSchedule};
use crate::error::ScheduleError;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached directions.
    pub max_capacity: u64,
}

impl CacheConfig {
    /// Room for every configured direction, so nothing is ever evicted.
    pub fn for_directions(directions: &Directions) -> Self {
        Self {
            max_capacity: directions.len().max(1) as u64,
        }
    }
}

/// Process-wide schedule memo, keyed by direction name.
#[derive(Clone)]
pub struct ScheduleCache {
    schedules: MokaCache<String, Arc<StationSchedule>>,
}

impl ScheduleCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let schedules = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .build();

        Self { schedules }
    }

    /// Get the schedule for `direction`, running `load` on a miss.
    ///
    /// Only one `load` runs at a time per direction; other callers for the
    /// same direction wait for its result.
    pub async fn get_or_load<F>(
        &self,
        direction: &str,
        load: F,
    ) -> Result<Arc<StationSchedule>, ScheduleError>
    where
        F: Future<Output = Result<StationSchedule, ScheduleError>>,
    {
        if let Some(cached) = self.schedules.get(direction).await {
            debug!(direction, "schedule cache hit");
            return Ok(cached);
        }

        debug!(direction, "schedule cache miss");
        self.schedules
            .try_get_with(direction.to_string(), async { load.await.map(Arc::new) })
            .await
            .map_err(|e| (*e).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClockTime;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn schedule() -> StationSchedule {
        StationSchedule::new(
            vec!["JSQ".to_string()],
            vec![vec![ClockTime::parse("5:15AM").unwrap()]],
        )
        .unwrap()
    }

    fn cache() -> ScheduleCache {
        ScheduleCache::new(&CacheConfig::for_directions(&Directions::default()))
    }

    /// Load `direction`, counting how often the loader actually runs.
    async fn load(cache: &ScheduleCache, direction: &str, loads: &AtomicUsize) {
        cache
            .get_or_load(direction, async {
                loads.fetch_add(1, Ordering::SeqCst);
                Ok(schedule())
            })
            .await
            .unwrap();
    }

    #[test]
    fn capacity_follows_directions() {
        assert_eq!(
            CacheConfig::for_directions(&Directions::default()).max_capacity,
            2
        );
        assert_eq!(CacheConfig::for_directions(&Directions::new()).max_capacity, 1);
    }

    #[tokio::test]
    async fn loads_once() {
        let cache = cache();
        let loads = AtomicUsize::new(0);

        for _ in 0..3 {
            let got = cache
                .get_or_load("jsq_33rd", async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok(schedule())
                })
                .await
                .unwrap();
            assert_eq!(got.stations(), &["JSQ"]);
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cache = cache();
        let loads = AtomicUsize::new(0);

        let err = cache
            .get_or_load("jsq_33rd", async { Err(ScheduleError::ScheduleNotFound) })
            .await
            .unwrap_err();
        assert_eq!(err, ScheduleError::ScheduleNotFound);

        load(&cache, "jsq_33rd", &loads).await;
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn directions_are_independent() {
        let cache = cache();
        let loads = AtomicUsize::new(0);

        load(&cache, "jsq_33rd", &loads).await;
        load(&cache, "33rd_jsq", &loads).await;
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn every_configured_direction_stays_cached() {
        let directions = (0..100).fold(Directions::new(), |directions, i| {
            directions.with(format!("dir_{i}"), format!("Page_{i}"))
        });
        let cache = ScheduleCache::new(&CacheConfig::for_directions(&directions));
        let loads = AtomicUsize::new(0);

        for name in directions.names() {
            load(&cache, name, &loads).await;
        }
        cache.schedules.run_pending_tasks().await;
        for name in directions.names() {
            load(&cache, name, &loads).await;
        }

        assert_eq!(loads.load(Ordering::SeqCst), 100);
    }

    #[tokio::test]
    async fn concurrent_misses_share_one_load() {
        let cache = cache();
        let loads = AtomicUsize::new(0);

        let queries = (0..8).map(|_| {
            cache.get_or_load("jsq_33rd", async {
                loads.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                Ok(schedule())
            })
        });
        let results = futures::future::join_all(queries).await;

        assert!(results.iter().all(Result::is_ok));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }
}

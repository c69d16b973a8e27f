//! Per-courier simulation parameters.

use ct_core::{EpochMs, TrackerConfig};
use ct_route::Route;

use crate::{PositionSnapshot, SimError, SimResult, simulate};

/// Everything needed to place one courier at any instant.
///
/// Immutable once built; the route is owned, never shared between couriers.
#[derive(Debug, Clone)]
pub struct SimulationParameters {
    route:             Route,
    start:             EpochMs,
    total_duration_ms: i64,
}

impl SimulationParameters {
    /// # Errors
    ///
    /// [`SimError::InvalidDuration`] if `total_duration_ms <= 0`.
    pub fn new(route: Route, start: EpochMs, total_duration_ms: i64) -> SimResult<Self> {
        if total_duration_ms <= 0 {
            return Err(SimError::InvalidDuration(total_duration_ms));
        }
        Ok(Self { route, start, total_duration_ms })
    }

    /// Parameters whose duration is the route's real travel time shrunk by
    /// the configured speed multiplier.
    pub fn scaled(route: Route, start: EpochMs, config: &TrackerConfig) -> SimResult<Self> {
        let total = config.simulated_duration_ms(route.total_duration_secs());
        Self::new(route, start, total)
    }

    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[inline]
    pub fn start(&self) -> EpochMs {
        self.start
    }

    #[inline]
    pub fn total_duration_ms(&self) -> i64 {
        self.total_duration_ms
    }

    /// Instant at which the courier reaches the last geometry point.
    #[inline]
    pub fn arrival_at(&self) -> EpochMs {
        self.start + self.total_duration_ms
    }

    /// Snapshot at `now`.  See [`simulate`].
    pub fn snapshot_at(&self, now: EpochMs) -> SimResult<PositionSnapshot> {
        simulate(&self.route, self.start, self.total_duration_ms, now)
    }
}

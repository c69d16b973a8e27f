//! Order creation and courier queries.

use tracing::{info, warn};

use ct_core::{Clock, CourierId, TrackerConfig};
use ct_route::{RouteError, RouteProvider};
use ct_sim::SimulationParameters;

use crate::report::ORDER_CREATED;
use crate::{
    CourierRegistry, CourierReport, DriverPool, NewCourier, OrderReceipt, RouteSummary,
    TrackerResult,
};

/// The tracker's request-facing API.
///
/// Owns the registry; an HTTP layer holds one `TrackingService` (typically in
/// an `Arc`) and calls [`create_order`](Self::create_order) and
/// [`courier`](Self::courier) from its handlers.
///
/// # Type parameters
///
/// - `P: RouteProvider`: turns two addresses into a route.
/// - `C: Clock`: source of "now" for simulation start and queries.
pub struct TrackingService<P: RouteProvider, C: Clock> {
    provider: P,
    clock:    C,
    config:   TrackerConfig,
    drivers:  DriverPool,
    registry: CourierRegistry,
}

impl<P: RouteProvider, C: Clock> TrackingService<P, C> {
    pub fn new(provider: P, clock: C, config: TrackerConfig) -> Self {
        Self {
            provider,
            clock,
            config,
            drivers:  DriverPool::new(),
            registry: CourierRegistry::new(),
        }
    }

    /// Replace the driver pool (e.g. with a seeded one).
    pub fn with_drivers(mut self, drivers: DriverPool) -> Self {
        self.drivers = drivers;
        self
    }

    pub fn registry(&self) -> &CourierRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Accept an order from `from` to `to` and start its courier.
    ///
    /// # Errors
    ///
    /// - [`RouteError::MissingAddress`] if either address is blank.
    /// - Any error from the route provider.
    /// - [`ct_sim::SimError::InvalidDuration`] if the route's scaled duration
    ///   rounds to zero.
    pub fn create_order(&self, from: &str, to: &str) -> TrackerResult<OrderReceipt> {
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(RouteError::MissingAddress.into());
        }

        let route = self.provider.fetch(from, to).inspect_err(|e| {
            warn!(%from, %to, error = %e, "route lookup failed");
        })?;
        let route_info = RouteSummary::new(&route, from, to);

        let params = SimulationParameters::scaled(route, self.clock.now(), &self.config)?;
        let duration_ms = params.total_duration_ms();
        let driver = self.drivers.pick();

        let id = self.registry.create(NewCourier {
            params,
            driver:        driver.clone(),
            start_address: from.to_owned(),
            end_address:   to.to_owned(),
        });

        info!(courier = %id, %from, %to, driver = %driver.name, duration_ms, "order created");

        Ok(OrderReceipt { id, driver, status: ORDER_CREATED, route_info })
    }

    /// Where courier `id` is right now.
    ///
    /// # Errors
    ///
    /// [`TrackerError::NotFound`][crate::TrackerError::NotFound] for an
    /// unknown id.
    pub fn courier(&self, id: CourierId) -> TrackerResult<CourierReport> {
        let entry = self.registry.require(id)?;
        let position = entry.snapshot_at(self.clock.now())?;

        Ok(CourierReport {
            id,
            driver:     entry.driver().clone(),
            status:     position.status,
            position,
            route_info: RouteSummary::new(
                entry.params().route(),
                entry.start_address(),
                entry.end_address(),
            ),
        })
    }
}

//! Route-provider trait.
//!
//! # Pluggability
//!
//! Turning two free-text addresses into a [`Route`] (geocoding, a directions
//! request, retries) is I/O plumbing that lives with the hosting application.
//! The tracking service only sees this trait, so the HTTP-backed provider can
//! be swapped for a canned one in tests without touching the core.

use crate::{Route, RouteError, RouteResult};

/// Source of routes between two addresses.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; one provider is shared by every
/// order-creation request.
pub trait RouteProvider: Send + Sync {
    /// Resolve `from` and `to` and return the driving route between them.
    ///
    /// Implementations report unresolvable addresses as
    /// [`RouteError::Geocode`], upstream failures (after their own retries) as
    /// [`RouteError::Unavailable`], and malformed upstream payloads as
    /// [`RouteError::InvalidRouteData`].
    fn fetch(&self, from: &str, to: &str) -> RouteResult<Route>;
}

impl<P: RouteProvider + ?Sized> RouteProvider for std::sync::Arc<P> {
    fn fetch(&self, from: &str, to: &str) -> RouteResult<Route> {
        (**self).fetch(from, to)
    }
}

/// Serves the same pre-fetched route for every pair of addresses.
///
/// Used by tests and the replay demo.
#[derive(Clone, Debug)]
pub struct StaticRouteProvider {
    route: Route,
}

impl StaticRouteProvider {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    /// Build from a stored directions response body.
    pub fn from_geojson(body: &str) -> RouteResult<Self> {
        Route::from_geojson(body).map(Self::new)
    }
}

impl RouteProvider for StaticRouteProvider {
    fn fetch(&self, from: &str, to: &str) -> RouteResult<Route> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(RouteError::MissingAddress);
        }
        Ok(self.route.clone())
    }
}

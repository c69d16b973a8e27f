//! `ct-route`: the immutable route a simulated courier follows.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`route`]      | `Route`, `Step`, `WayPointRange`: validated, read-only     |
//! | [`directions`] | Serde mirror of a directions-service GeoJSON response      |
//! | [`provider`]   | `RouteProvider` trait, `StaticRouteProvider`               |
//! | [`error`]      | `RouteError`, `RouteResult<T>`                             |
//!
//! A `Route` can only be obtained through validation ([`Route::new`] or one
//! of the decoding constructors), so every consumer may rely on at least two
//! finite coordinates and steps that tile the geometry in order.

pub mod directions;
pub mod error;
pub mod provider;
pub mod route;

#[cfg(test)]
mod tests;

pub use directions::{DirectionsFeature, FeatureCollection};
pub use error::{RouteError, RouteResult};
pub use provider::{RouteProvider, StaticRouteProvider};
pub use route::{Route, Step, WayPointRange};

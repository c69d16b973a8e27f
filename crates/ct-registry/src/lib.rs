//! `ct-registry`: courier bookkeeping on top of the position simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`state`]    | `CourierState`: `Active -> Arrived` one-way state machine        |
//! | [`driver`]   | `DriverProfile`, `DriverPool`: synthetic driver assignment       |
//! | [`registry`] | `CourierRegistry`, `CourierEntry`: keyed, thread-safe store      |
//! | [`service`]  | `TrackingService<P, C>`: create-order / query-courier API        |
//! | [`report`]   | `OrderReceipt`, `CourierReport`, `RouteSummary`: API payloads    |
//! | [`error`]    | `TrackerError`, `ErrorKind`, `TrackerResult<T>`                  |
//!
//! # Lifecycle of a courier
//!
//! 1. `TrackingService::create_order` fetches a route through a
//!    [`RouteProvider`][ct_route::RouteProvider], scales its duration, and
//!    registers a new `Active` entry under a fresh [`CourierId`][ct_core::CourierId].
//! 2. Every `TrackingService::courier` query runs the simulator at the
//!    clock's current instant.
//! 3. The first query that sees 100 % progress flips the entry to `Arrived`.
//!    From then on the simulator is bypassed and a fixed arrival snapshot is
//!    returned, whatever the clock says.
//!
//! Entries are never evicted.

pub mod driver;
pub mod error;
pub mod registry;
pub mod report;
pub mod service;
pub mod state;


pub use driver::{DriverPool, DriverProfile};
pub use error::{ErrorKind, TrackerError, TrackerResult};
pub use registry::{CourierEntry, CourierRegistry, NewCourier};
pub use report::{CourierReport, OrderReceipt, RouteSummary};
pub use service::TrackingService;
pub use state::CourierState;

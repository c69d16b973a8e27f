//! `ct-sim`: where is the courier right now?
//!
//! # Movement model (time-proportional point walk)
//!
//! A courier leaves the first geometry point when its order is created and
//! reaches the last one exactly `total_duration_ms` later.  In between it
//! advances through the geometry *points* at a constant rate, regardless of
//! the distance between them:
//!
//! ```text
//! fraction = clamp((now - start) / total_duration_ms, 0, 1)
//! p        = fraction * (points - 1)
//! position = lerp(geometry[floor(p)], geometry[floor(p) + 1], p - floor(p))
//! ```
//!
//! Directions services emit points more densely on winding streets, so the
//! courier visibly slows down in town and speeds up on straight roads.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`params`]    | `SimulationParameters`: route + start + duration           |
//! | [`simulator`] | `simulate`, `arrived_snapshot`: pure snapshot functions    |
//! | [`snapshot`]  | `PositionSnapshot`, `Status`, `format_remaining`           |
//! | [`error`]     | `SimError`, `SimResult<T>`                                 |

pub mod error;
pub mod params;
pub mod simulator;
pub mod snapshot;


pub use error::{SimError, SimResult};
pub use params::SimulationParameters;
pub use simulator::{arrived_snapshot, simulate};
pub use snapshot::{PositionSnapshot, Status, format_remaining};

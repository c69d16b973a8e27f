//! `ct-core`: foundational types for the courier tracker.
//!
//! This crate is a dependency of every other `ct-*` crate.  It intentionally
//! has no `ct-*` dependencies and few external ones (`chrono`, `uuid`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Coordinate` (lon/lat), `LatLng`                      |
//! | [`ids`]         | `CourierId`                                           |
//! | [`time`]        | `EpochMs`, `Clock`, `SystemClock`, `ManualClock`      |
//! | [`config`]      | `TrackerConfig`                                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrackerConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, LatLng};
pub use ids::CourierId;
pub use time::{Clock, EpochMs, ManualClock, SystemClock};

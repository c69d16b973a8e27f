//! Response payloads for the two tracker operations.
//!
//! Field names follow what the tracking client reads, hence the camelCase
//! renames and the flattened driver fields (`name`, `licensePlate`).

use serde::Serialize;

use ct_core::CourierId;
use ct_route::Route;
use ct_sim::{PositionSnapshot, Status};

use crate::DriverProfile;

/// Order lifecycle marker returned when an order is accepted.
pub const ORDER_CREATED: &str = "created";

/// Real-world route totals and the two address labels.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub start_address:  String,
    pub end_address:    String,
    /// Whole kilometres, e.g. `"12 km"`.
    pub total_distance: String,
    /// Whole minutes of real driving time (not simulated time).
    pub total_duration: String,
}

impl RouteSummary {
    pub fn new(route: &Route, start_address: &str, end_address: &str) -> Self {
        Self {
            start_address:  start_address.to_owned(),
            end_address:    end_address.to_owned(),
            total_distance: format!("{} km", (route.total_distance_m() / 1000.0).round() as i64),
            total_duration: format!("{} minutes", (route.total_duration_secs() / 60.0).round() as i64),
        }
    }
}

/// Answer to a successful order submission.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub id:         CourierId,
    #[serde(flatten)]
    pub driver:     DriverProfile,
    pub status:     &'static str,
    pub route_info: RouteSummary,
}

/// Answer to a courier query.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourierReport {
    pub id:         CourierId,
    #[serde(flatten)]
    pub driver:     DriverProfile,
    pub status:     Status,
    pub position:   PositionSnapshot,
    pub route_info: RouteSummary,
}

//! Pure snapshot computation.

use ct_core::{Coordinate, EpochMs, LatLng};
use ct_route::Route;

use crate::{PositionSnapshot, SimError, SimResult, Status, format_remaining};

/// Remaining-time text of every arrived snapshot.
pub const ARRIVED_REMAINING: &str = "0 minutes";

/// Compute where a courier that left `route`'s first point at `start`, and
/// takes `total_duration_ms` to reach its last point, is at `now`.
///
/// Deterministic and side-effect free.  Queries before `start` report the
/// first point; queries at or after `start + total_duration_ms` report the
/// exact last point with [`Status::Completed`].
///
/// # Errors
///
/// - [`SimError::InvalidDuration`] if `total_duration_ms <= 0`.
/// - [`SimError::EmptyRoute`] if the geometry has fewer than two points.
pub fn simulate(
    route:             &Route,
    start:             EpochMs,
    total_duration_ms: i64,
    now:               EpochMs,
) -> SimResult<PositionSnapshot> {
    if total_duration_ms <= 0 {
        return Err(SimError::InvalidDuration(total_duration_ms));
    }

    let elapsed_ms = now - start;
    let fraction = (elapsed_ms as f64 / total_duration_ms as f64).clamp(0.0, 1.0);

    let (position, current_index) = locate(route.geometry(), fraction)?;

    let address = route
        .step_containing(current_index)
        .map(|s| s.name.as_str())
        .filter(|name| !name.is_empty())
        .map(str::to_owned);

    let remaining_ms = total_duration_ms.saturating_sub(elapsed_ms).max(0);

    Ok(PositionSnapshot {
        position,
        progress_percent:    (fraction * 100.0).round() as u8,
        current_step_number: current_index + 1,
        total_steps:         route.point_count(),
        address,
        remaining_time:      format_remaining(remaining_ms),
        status:              if fraction >= 1.0 { Status::Completed } else { Status::InProgress },
    })
}

/// The fixed snapshot reported once a courier has arrived.
///
/// Independent of any clock: repeated calls return equal values.
pub fn arrived_snapshot(route: &Route, destination: &str) -> PositionSnapshot {
    let points = route.point_count();
    PositionSnapshot {
        position:            route.last().to_lat_lng(),
        progress_percent:    100,
        current_step_number: points,
        total_steps:         points,
        address:             Some(destination.to_owned()).filter(|d| !d.is_empty()),
        remaining_time:      ARRIVED_REMAINING.to_owned(),
        status:              Status::Completed,
    }
}

/// Interpolated position for `fraction ∈ [0, 1]` and the index of the last
/// point passed.
pub(crate) fn locate(geometry: &[Coordinate], fraction: f64) -> SimResult<(LatLng, usize)> {
    let n = geometry.len();
    if n < 2 {
        return Err(SimError::EmptyRoute { points: n });
    }
    let last = n - 1;

    // Exact terminal point; no reliance on floor() landing on `last`.
    if fraction >= 1.0 {
        return Ok((geometry[last].to_lat_lng(), last));
    }

    let p = fraction * last as f64;
    let current = (p.floor() as usize).min(last);
    let next = (current + 1).min(last);
    let segment_fraction = if current == last { 0.0 } else { p - current as f64 };

    Ok((geometry[current].lerp(geometry[next], segment_fraction), current))
}

//! Route model: geometry plus turn-by-turn steps.
//!
//! # Data layout
//!
//! The geometry is one flat `Vec<Coordinate>`.  Each [`Step`] refers to a
//! contiguous, inclusive index range of it:
//!
//! ```text
//! geometry:  p0  p1  p2  p3  p4  p5
//! step 0:   [0 ........ 2]
//! step 1:               [2 ........ 5]     (shared endpoint)
//! ```
//!
//! Adjacent steps either share their boundary point (directions-service
//! output) or start right after it.  Concatenating every step's slice always
//! yields a continuous polyline from the first to the last point.

use serde::Serialize;

use ct_core::Coordinate;

use crate::{RouteError, RouteResult};

// ── WayPointRange ─────────────────────────────────────────────────────────────

/// Inclusive `[start, end]` index range into a route's geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "[usize; 2]")]
pub struct WayPointRange {
    pub start: usize,
    pub end: usize,
}

impl WayPointRange {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Inclusive on both ends.
    #[inline]
    pub fn contains(self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Number of geometry points covered (endpoints included).
    #[inline]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.end < self.start
    }
}

impl From<WayPointRange> for [usize; 2] {
    fn from(r: WayPointRange) -> Self {
        [r.start, r.end]
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

/// One turn-by-turn instruction and the stretch of geometry it covers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step {
    pub way_points: WayPointRange,
    pub distance_m: f64,
    pub duration_secs: f64,
    pub instruction: String,
    /// Street name; empty when the directions service has none.
    pub name: String,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A validated, immutable route.
///
/// Fields are private so that a `Route` can only exist in a validated state.
/// Construct with [`Route::new`], [`Route::from_feature`] or
/// [`Route::from_geojson`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
    geometry: Vec<Coordinate>,
    steps: Vec<Step>,
    total_distance_m: f64,
    total_duration_secs: f64,
}

impl Route {
    /// Validate and assemble a route.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidRouteData`] when the geometry has fewer than two
    /// points or a non-finite coordinate, when there are no steps, when a
    /// step range is inverted or out of bounds, when steps are out of order,
    /// overlap backwards, leave a gap, or fail to span the whole geometry,
    /// or when a total is negative or non-finite.
    pub fn new(
        geometry:            Vec<Coordinate>,
        steps:               Vec<Step>,
        total_distance_m:    f64,
        total_duration_secs: f64,
    ) -> RouteResult<Self> {
        let n = geometry.len();
        if n < 2 {
            return Err(RouteError::invalid(format!(
                "geometry needs at least 2 coordinates, got {n}"
            )));
        }
        if let Some(i) = geometry.iter().position(|c| !c.is_finite()) {
            return Err(RouteError::invalid(format!("coordinate {i} is not finite")));
        }
        for (what, v) in [("distance", total_distance_m), ("duration", total_duration_secs)] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(RouteError::invalid(format!("total {what} {v} is not a non-negative number")));
            }
        }

        validate_steps(&steps, n)?;

        Ok(Self { geometry, steps, total_distance_m, total_duration_secs })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn geometry(&self) -> &[Coordinate] {
        &self.geometry
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of geometry points.  Always `>= 2`.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.geometry.len()
    }

    #[inline]
    pub fn first(&self) -> Coordinate {
        self.geometry[0]
    }

    #[inline]
    pub fn last(&self) -> Coordinate {
        self.geometry[self.geometry.len() - 1]
    }

    #[inline]
    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    #[inline]
    pub fn total_duration_secs(&self) -> f64 {
        self.total_duration_secs
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The first step, in step order, whose range contains `index`.
    ///
    /// A boundary point shared by two steps belongs to the earlier one.
    /// Returns `None` for an index past the end of the geometry.
    pub fn step_containing(&self, index: usize) -> Option<&Step> {
        self.steps.iter().find(|s| s.way_points.contains(index))
    }

    /// The geometry covered by `step`, endpoints included.
    ///
    /// Returns `None` if `step`'s range does not fit this route (a step taken
    /// from a different route).
    pub fn coordinates_for_step(&self, step: &Step) -> Option<&[Coordinate]> {
        let r = step.way_points;
        if r.is_empty() {
            return None;
        }
        self.geometry.get(r.start..=r.end)
    }
}

fn validate_steps(steps: &[Step], point_count: usize) -> RouteResult<()> {
    let last_index = point_count - 1;

    let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
        return Err(RouteError::invalid("route has no steps"));
    };

    for (i, step) in steps.iter().enumerate() {
        let r = step.way_points;
        if r.start > r.end {
            return Err(RouteError::invalid(format!(
                "step {i} range [{}, {}] is inverted", r.start, r.end
            )));
        }
        if r.end > last_index {
            return Err(RouteError::invalid(format!(
                "step {i} range [{}, {}] exceeds geometry of {point_count} points",
                r.start, r.end
            )));
        }
    }

    for (i, pair) in steps.windows(2).enumerate() {
        let (prev, next) = (pair[0].way_points, pair[1].way_points);
        if next.start < prev.start || next.end < prev.end {
            return Err(RouteError::invalid(format!("step {} goes backwards", i + 1)));
        }
        if next.start > prev.end + 1 {
            return Err(RouteError::invalid(format!(
                "gap between step {i} (ends {}) and step {} (starts {})",
                prev.end, i + 1, next.start
            )));
        }
    }

    if first.way_points.start != 0 || last.way_points.end != last_index {
        return Err(RouteError::invalid(format!(
            "steps span [{}, {}], geometry spans [0, {last_index}]",
            first.way_points.start, last.way_points.end
        )));
    }

    Ok(())
}

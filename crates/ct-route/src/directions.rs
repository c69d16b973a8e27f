//! Decoding of directions-service responses.
//!
//! The upstream service answers a driving-directions request with a GeoJSON
//! `FeatureCollection`.  Only the first feature and its first segment are
//! used; orders are single-leg.
//!
//! ```text
//! features[0]
//!   geometry.coordinates        [[lon, lat], ...]
//!   properties.segments[0]
//!     distance, duration        metres, seconds
//!     steps[]                   distance, duration, instruction, name,
//!                               way_points: [start, end]
//! ```
//!
//! The types here mirror that JSON loosely (unknown fields are ignored,
//! optional ones default) and are converted into a validated [`Route`].

use serde::Deserialize;

use ct_core::Coordinate;

use crate::{Route, RouteError, RouteResult, Step, WayPointRange};

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<DirectionsFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsFeature {
    pub geometry: LineString,
    pub properties: RouteProperties,
}

/// GeoJSON `LineString`.  Positions may carry a third (elevation) component,
/// which is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LineString {
    pub coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteProperties {
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub steps: Vec<SegmentStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentStep {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub name: String,
    pub way_points: [usize; 2],
}

impl From<SegmentStep> for Step {
    fn from(s: SegmentStep) -> Self {
        Step {
            way_points:    WayPointRange::new(s.way_points[0], s.way_points[1]),
            distance_m:    s.distance,
            duration_secs: s.duration,
            instruction:   s.instruction,
            name:          s.name,
        }
    }
}

impl Route {
    /// Convert one decoded directions feature into a validated route.
    pub fn from_feature(feature: DirectionsFeature) -> RouteResult<Self> {
        let geometry = feature
            .geometry
            .coordinates
            .into_iter()
            .enumerate()
            .map(|(i, pos)| match pos.as_slice() {
                [lon, lat, ..] => Ok(Coordinate::new(*lon, *lat)),
                _ => Err(RouteError::invalid(format!(
                    "position {i} has {} components", pos.len()
                ))),
            })
            .collect::<RouteResult<Vec<_>>>()?;

        let segment = feature
            .properties
            .segments
            .into_iter()
            .next()
            .ok_or_else(|| RouteError::invalid("feature has no segments"))?;

        let steps = segment.steps.into_iter().map(Step::from).collect();
        Route::new(geometry, steps, segment.distance, segment.duration)
    }

    /// Decode a whole directions response body and validate its first route.
    pub fn from_geojson(body: &str) -> RouteResult<Self> {
        let collection: FeatureCollection = serde_json::from_str(body)
            .map_err(|e| RouteError::invalid(format!("malformed directions response: {e}")))?;
        let feature = collection
            .features
            .into_iter()
            .next()
            .ok_or_else(|| RouteError::invalid("no route found"))?;
        Route::from_feature(feature)
    }
}

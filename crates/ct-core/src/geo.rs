//! Geographic coordinate types.
//!
//! Directions services hand out positions as `[longitude, latitude]` pairs
//! (GeoJSON order) while map clients expect `{ lat, lng }` objects.  The two
//! orders get separate types so a swapped axis is a type error rather than a
//! courier drawn in the ocean.

/// A position in upstream GeoJSON order: longitude first, then latitude.
///
/// Values are not range-checked; the route source is trusted.  Only
/// finiteness is enforced, by the route model.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// `true` when neither component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// The same position in map-client order.
    #[inline]
    pub fn to_lat_lng(self) -> LatLng {
        LatLng { lat: self.lat, lng: self.lon }
    }

    /// Linear blend towards `other`; `fraction = 0` is `self`, `1` is `other`.
    ///
    /// Interpolation is per axis in degree space, which is what the tracking
    /// client renders; no great-circle correction is applied.
    pub fn lerp(self, other: Coordinate, fraction: f64) -> LatLng {
        LatLng {
            lat: self.lat + (other.lat - self.lat) * fraction,
            lng: self.lon + (other.lon - self.lon) * fraction,
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lon, c.lat]
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

/// A position in map-client order, as exposed in position snapshots.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinate> for LatLng {
    #[inline]
    fn from(c: Coordinate) -> Self {
        c.to_lat_lng()
    }
}

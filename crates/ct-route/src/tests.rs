//! Unit tests for ct-route.
//!
//! All tests use hand-built routes or inline JSON, so they run without any
//! network access.

#[cfg(test)]
mod helpers {
    use ct_core::Coordinate;

    use crate::{Step, WayPointRange};

    pub fn step(start: usize, end: usize, name: &str) -> Step {
        Step {
            way_points:    WayPointRange::new(start, end),
            distance_m:    100.0,
            duration_secs: 10.0,
            instruction:   format!("Continue onto {name}"),
            name:          name.to_string(),
        }
    }

    /// Six points along the equator, 0.001° apart.
    pub fn six_points() -> Vec<Coordinate> {
        (0..6).map(|i| Coordinate::new(i as f64 * 0.001, 0.0)).collect()
    }

    /// Two-step directions response in upstream format, shared endpoint at 2.
    pub const SAMPLE_RESPONSE: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "bbox": [8.681495, 49.41461, 8.690123, 49.420318],
            "geometry": {
                "type": "LineString",
                "coordinates": [
                    [8.681495, 49.41461], [8.68147, 49.414599], [8.681488, 49.41455],
                    [8.682092, 49.415205], [8.690123, 49.420318]
                ]
            },
            "properties": {
                "segments": [{
                    "distance": 1250.4,
                    "duration": 281.9,
                    "steps": [
                        {"distance": 1.9, "duration": 0.4, "type": 11,
                         "instruction": "Head west on Gerhart-Hauptmann-Straße",
                         "name": "Gerhart-Hauptmann-Straße", "way_points": [0, 2]},
                        {"distance": 1248.5, "duration": 281.5, "type": 10,
                         "instruction": "Arrive at Wielandtstraße, on the left",
                         "name": "-", "way_points": [2, 4]}
                    ]
                }],
                "summary": {"distance": 1250.4, "duration": 281.9},
                "way_points": [0, 4]
            }
        }]
    }"#;
}

// ── Construction & validation ─────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use ct_core::Coordinate;

    use super::helpers::{six_points, step};
    use crate::{Route, RouteError};

    fn invalid(result: Result<Route, RouteError>) -> bool {
        matches!(result, Err(RouteError::InvalidRouteData(_)))
    }

    #[test]
    fn valid_contiguous_steps() {
        let route = Route::new(six_points(), vec![step(0, 2, "A"), step(3, 5, "B")], 500.0, 60.0)
            .unwrap();
        assert_eq!(route.point_count(), 6);
        assert_eq!(route.steps().len(), 2);
        assert_eq!(route.first(), Coordinate::new(0.0, 0.0));
        assert_eq!(route.last(), Coordinate::new(0.005, 0.0));
    }

    #[test]
    fn valid_shared_endpoint_steps() {
        assert!(Route::new(six_points(), vec![step(0, 2, "A"), step(2, 5, "B")], 0.0, 0.0).is_ok());
    }

    #[test]
    fn empty_and_single_point_rejected() {
        assert!(invalid(Route::new(vec![], vec![step(0, 0, "A")], 0.0, 0.0)));
        assert!(invalid(Route::new(
            vec![Coordinate::new(1.0, 1.0)],
            vec![step(0, 0, "A")],
            0.0,
            0.0
        )));
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let mut pts = six_points();
        pts[3] = Coordinate::new(f64::NAN, 0.0);
        assert!(invalid(Route::new(pts, vec![step(0, 5, "A")], 0.0, 0.0)));
    }

    #[test]
    fn no_steps_rejected() {
        assert!(invalid(Route::new(six_points(), vec![], 0.0, 0.0)));
    }

    #[test]
    fn out_of_bounds_range_rejected() {
        assert!(invalid(Route::new(six_points(), vec![step(0, 6, "A")], 0.0, 0.0)));
    }

    #[test]
    fn inverted_range_rejected() {
        assert!(invalid(Route::new(
            six_points(),
            vec![step(0, 3, "A"), step(5, 4, "B")],
            0.0,
            0.0
        )));
    }

    #[test]
    fn gap_rejected() {
        assert!(invalid(Route::new(
            six_points(),
            vec![step(0, 1, "A"), step(3, 5, "B")],
            0.0,
            0.0
        )));
    }

    #[test]
    fn backwards_steps_rejected() {
        assert!(invalid(Route::new(
            six_points(),
            vec![step(2, 5, "B"), step(0, 2, "A")],
            0.0,
            0.0
        )));
    }

    #[test]
    fn partial_span_rejected() {
        assert!(invalid(Route::new(six_points(), vec![step(0, 4, "A")], 0.0, 0.0)));
        assert!(invalid(Route::new(six_points(), vec![step(1, 5, "A")], 0.0, 0.0)));
    }

    #[test]
    fn negative_totals_rejected() {
        assert!(invalid(Route::new(six_points(), vec![step(0, 5, "A")], -1.0, 0.0)));
        assert!(invalid(Route::new(six_points(), vec![step(0, 5, "A")], 0.0, f64::NAN)));
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use super::helpers::{six_points, step};
    use crate::Route;

    #[test]
    fn boundary_belongs_to_earlier_step() {
        let route = Route::new(six_points(), vec![step(0, 2, "A"), step(2, 5, "B")], 0.0, 0.0)
            .unwrap();
        assert_eq!(route.step_containing(2).unwrap().name, "A");
        assert_eq!(route.step_containing(3).unwrap().name, "B");
    }

    #[test]
    fn contiguous_ranges_attribute_by_order() {
        let route = Route::new(six_points(), vec![step(0, 2, "A"), step(3, 5, "B")], 0.0, 0.0)
            .unwrap();
        assert_eq!(route.step_containing(0).unwrap().name, "A");
        assert_eq!(route.step_containing(2).unwrap().name, "A");
        assert_eq!(route.step_containing(3).unwrap().name, "B");
        assert_eq!(route.step_containing(5).unwrap().name, "B");
    }

    #[test]
    fn out_of_range_index_has_no_step() {
        let route = Route::new(six_points(), vec![step(0, 5, "A")], 0.0, 0.0).unwrap();
        assert!(route.step_containing(6).is_none());
    }

    #[test]
    fn step_coordinates_concatenate_into_polyline() {
        let pts = six_points();
        let route = Route::new(pts.clone(), vec![step(0, 2, "A"), step(2, 5, "B")], 0.0, 0.0)
            .unwrap();

        let first = route.coordinates_for_step(&route.steps()[0]).unwrap();
        let second = route.coordinates_for_step(&route.steps()[1]).unwrap();
        assert_eq!(first, &pts[0..=2]);
        assert_eq!(second, &pts[2..=5]);
        assert_eq!(first.last(), second.first());
    }

    #[test]
    fn foreign_step_has_no_coordinates() {
        let route = Route::new(six_points(), vec![step(0, 5, "A")], 0.0, 0.0).unwrap();
        assert!(route.coordinates_for_step(&step(4, 9, "X")).is_none());
    }
}

// ── Directions decoding ───────────────────────────────────────────────────────

#[cfg(test)]
mod directions {
    use ct_core::Coordinate;

    use super::helpers::SAMPLE_RESPONSE;
    use crate::{Route, RouteError};

    #[test]
    fn decodes_sample_response() {
        let route = Route::from_geojson(SAMPLE_RESPONSE).unwrap();
        assert_eq!(route.point_count(), 5);
        assert_eq!(route.first(), Coordinate::new(8.681495, 49.41461));
        assert_eq!(route.last(), Coordinate::new(8.690123, 49.420318));
        assert_eq!(route.total_distance_m(), 1250.4);
        assert_eq!(route.total_duration_secs(), 281.9);

        let steps = route.steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].name, "Gerhart-Hauptmann-Straße");
        assert_eq!(steps[1].way_points.start, 2);
        assert_eq!(steps[1].way_points.end, 4);
    }

    #[test]
    fn elevation_component_ignored() {
        let body = r#"{"features": [{
            "geometry": {"coordinates": [[1.0, 2.0, 110.5], [3.0, 4.0, 112.0]]},
            "properties": {"segments": [{"distance": 10, "duration": 2,
                "steps": [{"name": "", "instruction": "Go", "way_points": [0, 1]}]}]}
        }]}"#;
        let route = Route::from_geojson(body).unwrap();
        assert_eq!(route.last(), Coordinate::new(3.0, 4.0));
    }

    #[test]
    fn empty_collection_rejected() {
        let result = Route::from_geojson(r#"{"type": "FeatureCollection", "features": []}"#);
        assert!(matches!(result, Err(RouteError::InvalidRouteData(_))));
    }

    #[test]
    fn missing_segment_rejected() {
        let body = r#"{"features": [{
            "geometry": {"coordinates": [[1.0, 2.0], [3.0, 4.0]]},
            "properties": {"segments": []}
        }]}"#;
        assert!(matches!(Route::from_geojson(body), Err(RouteError::InvalidRouteData(_))));
    }

    #[test]
    fn short_position_rejected() {
        let body = r#"{"features": [{
            "geometry": {"coordinates": [[1.0], [3.0, 4.0]]},
            "properties": {"segments": [{"steps": [{"way_points": [0, 1]}]}]}
        }]}"#;
        assert!(matches!(Route::from_geojson(body), Err(RouteError::InvalidRouteData(_))));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            Route::from_geojson("{\"features\": [}"),
            Err(RouteError::InvalidRouteData(_))
        ));
    }

    #[test]
    fn single_point_geometry_rejected() {
        let body = r#"{"features": [{
            "geometry": {"coordinates": [[1.0, 2.0]]},
            "properties": {"segments": [{"steps": [{"way_points": [0, 0]}]}]}
        }]}"#;
        assert!(matches!(Route::from_geojson(body), Err(RouteError::InvalidRouteData(_))));
    }
}

// ── Provider ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod provider {
    use super::helpers::SAMPLE_RESPONSE;
    use crate::{RouteError, RouteProvider, StaticRouteProvider};

    #[test]
    fn static_provider_serves_route() {
        let provider = StaticRouteProvider::from_geojson(SAMPLE_RESPONSE).unwrap();
        let route = provider.fetch("Bergheimer Str. 1", "Wielandtstr. 9").unwrap();
        assert_eq!(route.point_count(), 5);
    }

    #[test]
    fn blank_address_rejected() {
        let provider = StaticRouteProvider::from_geojson(SAMPLE_RESPONSE).unwrap();
        assert!(matches!(provider.fetch("", "Somewhere"), Err(RouteError::MissingAddress)));
        assert!(matches!(provider.fetch("Somewhere", "   "), Err(RouteError::MissingAddress)));
    }

    #[test]
    fn error_classification() {
        assert!(RouteError::MissingAddress.is_bad_input());
        assert!(RouteError::Geocode("x".into()).is_bad_input());
        assert!(RouteError::InvalidRouteData("x".into()).is_bad_input());
        assert!(!RouteError::Unavailable("timeout".into()).is_bad_input());
    }
}

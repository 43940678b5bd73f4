use proptest::prelude::*;
use wirebend_core::units::{normalize_degrees, round_angle, round_distance};
use wirebend_core::{Point, Polyline};

proptest! {
    #[test]
    fn prop_normalized_angle_in_range(angle in -1.0e5..1.0e5f64) {
        let wrapped = normalize_degrees(angle);
        prop_assert!((-180.0..=180.0).contains(&wrapped));
        // same direction as the input
        let turns = (angle - wrapped) / 360.0;
        prop_assert!((turns - turns.round()).abs() < 1e-6);
    }

    #[test]
    fn prop_rounding_is_close(value in -1.0e6..1.0e6f64) {
        prop_assert!((round_distance(value) - value).abs() <= 0.0005 + 1e-9);
        prop_assert!((round_angle(value) - value).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn prop_closed_edges_form_a_loop(
        coords in prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 2..10)
    ) {
        let vertices: Vec<Point> = coords.into_iter().map(Point::from).collect();
        let polyline = Polyline::new(vertices.clone(), true);
        let edges: Vec<_> = polyline.edges().collect();
        prop_assert_eq!(edges.len(), vertices.len());
        for pair in edges.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        prop_assert_eq!(edges[edges.len() - 1].end, vertices[0]);
    }
}

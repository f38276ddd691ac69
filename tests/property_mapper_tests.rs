use proptest::prelude::*;

use sparkline_rs::api::project_geometry;
use sparkline_rs::{RawSample, SparklineConfig, Window};

proptest! {
    #[test]
    fn range_extremes_land_on_padding_inset_edges(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 2..48),
        padding in 0.0f64..20.0
    ) {
        let samples: Vec<RawSample> = values
            .iter()
            .enumerate()
            .map(|(i, &y)| RawSample::new(i as f64, y))
            .collect();
        let config = SparklineConfig::default()
            .with_size(300.0, 120.0)
            .with_padding(padding);

        let geometry = project_geometry(&samples, &config)
            .expect("project")
            .expect("geometry");
        let first = geometry.points[0];
        let last = geometry.points[geometry.points.len() - 1];
        prop_assert!((first.x - padding).abs() <= 1e-9);
        prop_assert!((last.x - (300.0 - padding)).abs() <= 1e-9);

        let min_y = geometry.points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = geometry.points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        for point in &geometry.points {
            prop_assert!(point.y >= padding - 1e-9);
            prop_assert!(point.y <= 120.0 - padding + 1e-9);
        }
        let flat = values.iter().all(|&v| v == values[0]);
        if !flat {
            prop_assert!((min_y - padding).abs() <= 1e-9);
            prop_assert!((max_y - (120.0 - padding)).abs() <= 1e-9);
        }
    }

    #[test]
    fn window_bounds_are_inclusive(
        count in 3usize..40,
        lo in 0usize..20,
        width in 1usize..20
    ) {
        let hi = lo + width;
        let samples: Vec<RawSample> = (0..count)
            .map(|i| RawSample::new(i as f64, (i % 5) as f64))
            .collect();
        let config = SparklineConfig::default()
            .with_window(Window::between(lo as f64, hi as f64));

        let geometry = project_geometry(&samples, &config)
            .expect("project")
            .expect("geometry");
        let expected = (0..count).filter(|&i| i >= lo && i <= hi).count();
        prop_assert_eq!(geometry.points.len(), expected);
    }
}

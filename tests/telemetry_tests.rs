use sparkline_rs::telemetry::init_default_tracing;
use sparkline_rs::{RawSample, SparklineConfig, render_chart};

#[test]
fn tracing_setup_matches_feature_flag() {
    let installed = init_default_tracing();
    assert_eq!(installed, cfg!(feature = "telemetry"));

    // A second install never succeeds.
    assert!(!init_default_tracing());

    let document = render_chart(
        &[RawSample::new(0.0, 1.0), RawSample::new(1.0, 1.0)],
        &SparklineConfig::default(),
    )
    .expect("render with tracing active");
    assert!(document.as_str().contains("<path"));
}

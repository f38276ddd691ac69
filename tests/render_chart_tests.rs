use chrono::NaiveTime;

use sparkline_rs::api::{AreaOptions, LineOptions, project_geometry};
use sparkline_rs::core::ViewportPoint;
use sparkline_rs::render::NullRenderer;
use sparkline_rs::{
    ChartError, ErrorKind, RawSample, Sparkline, SparklineConfig, Window, render_chart,
};

fn numeric(pairs: &[(f64, f64)]) -> Vec<RawSample> {
    pairs.iter().map(|&(x, y)| RawSample::new(x, y)).collect()
}

#[test]
fn flat_series_with_window_maps_to_inset_edges() {
    let config = SparklineConfig::default()
        .with_size(200.0, 50.0)
        .with_padding(2.0)
        .with_window(Window::from_min(1.0));
    let samples = numeric(&[(0.0, 2.0), (1.0, 2.0), (2.0, 2.0)]);

    let geometry = project_geometry(&samples, &config)
        .expect("project")
        .expect("non-empty geometry");
    assert_eq!(
        geometry.points,
        vec![ViewportPoint::new(2.0, 25.0), ViewportPoint::new(198.0, 25.0)]
    );
}

#[test]
fn two_point_chart_renders_exact_markup() {
    let config = SparklineConfig::default().with_smoothing(0.0);
    let document = render_chart(&numeric(&[(0.0, 0.0), (1.0, 1.0)]), &config).expect("render");

    let expected = concat!(
        r#"<svg width="100%" height="100%" viewBox="0 0 200 100" xmlns="http://www.w3.org/2000/svg">"#,
        "\n",
        r#"<path d="M6,94 C6,94 194,6 194,6" fill="none" stroke="black" stroke-width="0.25" />"#,
        "\n",
        r#"<circle cx="6" cy="94" r="1" fill="black" />"#,
        "\n",
        r#"<circle cx="194" cy="6" r="1" fill="black" />"#,
        "\n",
        "</svg>\n",
    );
    assert_eq!(document.as_str(), expected);
}

#[test]
fn empty_input_renders_placeholder() {
    let document = render_chart(&[], &SparklineConfig::default()).expect("render");
    assert!(document.as_str().contains(
        r#"<text x="100" y="50" text-anchor="middle" dominant-baseline="middle">No data</text>"#
    ));
    assert!(!document.as_str().contains("<path"));
}

#[test]
fn placeholder_text_is_escaped() {
    let config = SparklineConfig::default().with_placeholder("<none> & co");
    let document = render_chart(&[], &config).expect("render");
    assert!(document.as_str().contains(">&lt;none&gt; &amp; co</text>"));
}

#[test]
fn single_sample_renders_flat_line_and_one_dot() {
    let sparkline = Sparkline::new(numeric(&[(5.0, 3.0)]), SparklineConfig::default());

    let frame = sparkline.build_render_frame().expect("frame");
    assert!(frame.paths.is_empty());
    assert_eq!(frame.lines.len(), 1);
    assert_eq!(frame.circles.len(), 1);
    assert_eq!(frame.lines[0].y1, frame.lines[0].y2);
    assert_eq!(frame.lines[0].y1, frame.circles[0].cy);

    let document = sparkline.to_svg().expect("svg");
    assert!(document.as_str().contains(
        r#"<line x1="6" y1="50" x2="194" y2="50" stroke="black" stroke-width="0.25" />"#
    ));
    assert!(document.as_str().contains(r#"<circle cx="100" cy="50" r="1" fill="black" />"#));
}

#[test]
fn area_closes_down_to_viewport_bottom() {
    let config = SparklineConfig::default()
        .with_smoothing(0.0)
        .with_area(AreaOptions {
            show: true,
            color: "rgba(0, 0, 0, 0.1)".to_owned(),
        });
    let document = render_chart(&numeric(&[(0.0, 0.0), (1.0, 1.0)]), &config).expect("render");

    assert!(document.as_str().contains(
        r#"<path d="M6,94 C6,94 194,6 194,6 V100 H6 Z" fill="rgba(0, 0, 0, 0.1)" />"#
    ));
}

#[test]
fn layers_toggle_independently() {
    let config = SparklineConfig::default()
        .with_line(LineOptions {
            show: false,
            ..LineOptions::default()
        })
        .with_area(AreaOptions {
            show: true,
            ..AreaOptions::default()
        });
    let sparkline = Sparkline::new(numeric(&[(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)]), config);

    let mut renderer = NullRenderer::default();
    sparkline.render(&mut renderer).expect("render");
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_circle_count, 3);
    assert_eq!(renderer.last_line_count, 0);
    assert_eq!(renderer.last_text_count, 0);
}

#[test]
fn window_excluding_all_samples_renders_placeholder() {
    let config = SparklineConfig::default().with_window(Window::from_max(-5.0));
    let samples = numeric(&[(0.0, 1.0), (10.0, 2.0)]);

    let geometry = project_geometry(&samples, &config)
        .expect("project")
        .expect("geometry");
    assert!(geometry.points.is_empty());

    let document = render_chart(&samples, &config).expect("render");
    assert!(document.as_str().contains("No data"));
}

#[test]
fn invalid_dimensions_fail_before_normalization() {
    let config = SparklineConfig::default().with_size(10.0, 100.0);
    let err = render_chart(&[RawSample::new(1.0, f64::NAN)], &config).expect_err("too narrow");
    assert_eq!(
        err,
        ChartError::InvalidDimension {
            axis: "width",
            size: 10.0,
            padding: 6.0,
        }
    );
}

#[test]
fn mismatched_window_kind_fails() {
    let time = NaiveTime::from_hms_opt(9, 30, 0).expect("time");
    let samples = vec![
        RawSample::new(time, 1.0),
        RawSample::new(time + chrono::Duration::hours(1), 2.0),
    ];
    let config = SparklineConfig::default().with_window(Window::from_min(0.0));

    let err = render_chart(&samples, &config).expect_err("mixed window");
    assert_eq!(err.kind(), ErrorKind::MixedAxisTypes);
}

#[test]
fn invalid_style_numbers_are_rejected() {
    let config = SparklineConfig::default().with_smoothing(-0.1);
    let err = render_chart(&[], &config).expect_err("negative smoothing");
    assert_eq!(err.kind(), ErrorKind::InvalidData);

    let config = SparklineConfig::default().with_precision(11);
    let err = render_chart(&[], &config).expect_err("precision");
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn style_strings_pass_through_verbatim() {
    let config = SparklineConfig::default().with_line(LineOptions {
        color: "var(--accent)".to_owned(),
        ..LineOptions::default()
    });
    let document = render_chart(&numeric(&[(0.0, 0.0), (1.0, 1.0)]), &config).expect("render");
    assert!(document.as_str().contains(r#"stroke="var(--accent)""#));
}

#[test]
fn window_min_at_data_max_draws_only_the_last_sample() {
    let config = SparklineConfig::default().with_window(Window::from_min(2.0));
    let samples = numeric(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);

    let geometry = project_geometry(&samples, &config)
        .expect("project")
        .expect("geometry");
    assert_eq!(geometry.points, vec![ViewportPoint::new(100.0, 6.0)]);

    let frame = Sparkline::new(samples, config)
        .build_render_frame()
        .expect("frame");
    assert!(frame.paths.is_empty());
    assert_eq!(frame.lines.len(), 1);
    assert_eq!(frame.circles.len(), 1);
}

#[test]
fn collapsed_window_keeps_only_samples_on_the_bound() {
    let samples = numeric(&[(0.0, 1.0), (10.0, 2.0)]);
    let config = SparklineConfig::default().with_window(Window::between(4.0, 4.0));
    let geometry = project_geometry(&samples, &config)
        .expect("project")
        .expect("geometry");
    assert!(geometry.points.is_empty());

    let samples = numeric(&[(0.0, 1.0), (4.0, 3.0), (10.0, 2.0)]);
    let geometry = project_geometry(&samples, &config)
        .expect("project")
        .expect("geometry");
    assert_eq!(geometry.points.len(), 1);
    assert_eq!(geometry.points[0].x, 100.0);
}

#[test]
fn headless_renderer_counts_single_sample_layers() {
    let sparkline = Sparkline::new(numeric(&[(5.0, 3.0)]), SparklineConfig::default());

    let mut renderer = NullRenderer::default();
    sparkline.render(&mut renderer).expect("render");
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_circle_count, 1);
    assert_eq!(renderer.last_path_count, 0);
    assert_eq!(renderer.last_rect_count, 0);
    assert_eq!(renderer.last_text_count, 0);
}

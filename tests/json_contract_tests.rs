use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::json;

use sparkline_rs::api::samples_from_json_str;
use sparkline_rs::extensions::{Marker, RefLineKind};
use sparkline_rs::{ErrorKind, RawPosition, RawSample, Sparkline, SparklineConfig, Window};

#[test]
fn partial_config_takes_defaults() {
    let config = SparklineConfig::from_json_str(
        r#"{
            "width": 300,
            "line": { "smoothing": 0 },
            "area": { "show": true },
            "window": { "min": 1 }
        }"#,
    )
    .expect("config");

    assert_eq!(config.width, 300.0);
    assert_eq!(config.height, 100.0);
    assert_eq!(config.padding, 6.0);
    assert_eq!(config.line.smoothing, 0.0);
    assert_eq!(config.line.width, 0.25);
    assert_eq!(config.line.color, "black");
    assert!(config.area.show);
    assert!(config.dot.show);
    assert_eq!(config.placeholder, "No data");
    assert_eq!(config.window, Some(Window::from_min(1.0)));
    assert_eq!(config.precision, 3);
}

#[test]
fn empty_config_document_equals_default() {
    let config = SparklineConfig::from_json_str("{}").expect("config");
    assert_eq!(config, SparklineConfig::default());
}

#[test]
fn config_reads_markers_and_ref_lines() {
    let config = SparklineConfig::from_json_str(
        r#"{
            "markers": [{ "at": 5 }, { "start": "2024-01-01", "end": "2024-01-03" }],
            "ref_lines": [{ "kind": "median", "color": "blue" }]
        }"#,
    )
    .expect("config");

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
    let end = NaiveDate::from_ymd_opt(2024, 1, 3).expect("date");
    assert_eq!(config.markers, vec![Marker::at(5.0), Marker::span(start, end)]);
    assert_eq!(config.ref_lines[0].kind, RefLineKind::Median);
    assert_eq!(config.ref_lines[0].color, "blue");
    assert_eq!(config.ref_lines[0].width, 0.25);
}

#[test]
fn config_survives_serialization() {
    let config = SparklineConfig::default()
        .with_window(Window::between(
            NaiveTime::from_hms_opt(8, 0, 0).expect("time"),
            NaiveTime::from_hms_opt(17, 30, 0).expect("time"),
        ))
        .with_marker(Marker::at(NaiveTime::from_hms_opt(12, 0, 0).expect("time")));

    let json = config.to_json_pretty().expect("json");
    let parsed = SparklineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn positions_parse_by_shape() {
    assert_eq!(
        RawPosition::from_json(&json!(1.5)).expect("number"),
        RawPosition::Number(1.5)
    );
    assert_eq!(
        RawPosition::from_json(&json!("2023-11-14T22:13:20Z")).expect("instant"),
        RawPosition::DateTime(Utc.timestamp_opt(1_700_000_000, 0).single().expect("ts"))
    );
    assert_eq!(
        RawPosition::from_json(&json!("2023-11-14T22:13:20")).expect("naive instant"),
        RawPosition::DateTime(Utc.timestamp_opt(1_700_000_000, 0).single().expect("ts"))
    );
    assert_eq!(
        RawPosition::from_json(&json!("2024-02-29")).expect("date"),
        RawPosition::Date(NaiveDate::from_ymd_opt(2024, 2, 29).expect("date"))
    );
    assert_eq!(
        RawPosition::from_json(&json!("07:45")).expect("time"),
        RawPosition::Time(NaiveTime::from_hms_opt(7, 45, 0).expect("time"))
    );
}

#[test]
fn unsupported_positions_fail() {
    for value in [json!(true), json!(null), json!("yesterday"), json!([1, 2])] {
        let err = RawPosition::from_json(&value).expect_err("unsupported");
        assert_eq!(err.kind(), ErrorKind::InvalidPositionType, "{value}");
    }
}

#[test]
fn samples_parse_from_pairs_and_objects() {
    let samples =
        samples_from_json_str(r#"[[0, 1.5], {"x": 2, "y": -3}]"#).expect("samples");
    assert_eq!(
        samples,
        vec![RawSample::new(0.0, 1.5), RawSample::new(2.0, -3.0)]
    );
}

#[test]
fn non_numeric_value_fails() {
    let err = samples_from_json_str(r#"[[0, "high"]]"#).expect_err("value");
    assert_eq!(err.kind(), ErrorKind::InvalidValueType);
}

#[test]
fn malformed_samples_fail() {
    let err = samples_from_json_str(r#"{"x": 1}"#).expect_err("not an array");
    assert_eq!(err.kind(), ErrorKind::InvalidData);

    let err = samples_from_json_str(r#"[[1, 2, 3]]"#).expect_err("triple");
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn sparkline_renders_from_json_samples() {
    let sparkline = Sparkline::from_json_str(
        r#"[["2024-01-01", 3], ["2024-01-02", 5], ["2024-01-03", 4]]"#,
        SparklineConfig::default(),
    )
    .expect("sparkline");

    let document = sparkline.to_svg().expect("svg");
    assert!(document.as_str().contains("<path"));
    assert_eq!(document.as_str().matches("<circle").count(), 3);
}

#[test]
fn mixed_json_positions_fail() {
    let sparkline = Sparkline::from_json_str(
        r#"[["12:00", 3], ["2024-01-02T12:00:00Z", 5]]"#,
        SparklineConfig::default(),
    )
    .expect("sparkline");
    let err = sparkline.to_svg().expect_err("mixed");
    assert_eq!(err.kind(), ErrorKind::MixedAxisTypes);
}

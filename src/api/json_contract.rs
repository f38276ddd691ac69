use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::core::{RawPosition, RawSample};
use crate::error::{ChartError, ChartResult};

use super::SparklineConfig;

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

impl TryFrom<Value> for RawPosition {
    type Error = ChartError;

    fn try_from(value: Value) -> ChartResult<Self> {
        Self::from_json(&value)
    }
}

impl From<RawPosition> for Value {
    fn from(position: RawPosition) -> Self {
        match position {
            RawPosition::Number(number) => serde_json::Number::from_f64(number)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            RawPosition::DateTime(time) => {
                Value::String(time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            RawPosition::Date(date) => Value::String(date.format("%Y-%m-%d").to_string()),
            RawPosition::Time(time) => Value::String(time.format("%H:%M:%S%.f").to_string()),
        }
    }
}

impl RawPosition {
    /// Reads a position from JSON.
    ///
    /// Numbers are numeric positions. Strings are tried, in order, as an
    /// RFC 3339 instant, a zone-less date-time (taken as UTC), a `YYYY-MM-DD`
    /// date and an `HH:MM[:SS[.fff]]` time of day.
    pub fn from_json(value: &Value) -> ChartResult<Self> {
        match value {
            Value::Number(number) => number.as_f64().map(Self::Number).ok_or_else(|| {
                ChartError::InvalidPositionType(format!("{number} is not representable as f64"))
            }),
            Value::String(text) => parse_temporal(text).ok_or_else(|| {
                ChartError::InvalidPositionType(format!(
                    "`{text}` is not a number, date-time, date or time of day"
                ))
            }),
            other => Err(ChartError::InvalidPositionType(format!(
                "unsupported position {other}"
            ))),
        }
    }
}

fn parse_temporal(text: &str) -> Option<RawPosition> {
    let text = text.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Some(RawPosition::DateTime(time.with_timezone(&Utc)));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(text, format) {
            return Some(RawPosition::DateTime(time.and_utc()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(RawPosition::Date(date));
    }
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
        .map(RawPosition::Time)
}

impl RawSample {
    /// Reads one sample from `[position, value]` or `{"x": position, "y": value}`.
    pub fn from_json(sample: &Value) -> ChartResult<Self> {
        let (position, value) = match sample {
            Value::Array(pair) if pair.len() == 2 => (&pair[0], &pair[1]),
            Value::Object(fields) => match (fields.get("x"), fields.get("y")) {
                (Some(position), Some(value)) => (position, value),
                _ => {
                    return Err(ChartError::InvalidData(
                        "sample object needs `x` and `y` fields".to_owned(),
                    ));
                }
            },
            other => {
                return Err(ChartError::InvalidData(format!(
                    "sample must be a [position, value] pair or an {{x, y}} object, got {other}"
                )));
            }
        };

        let position = RawPosition::from_json(position)?;
        let value = value.as_f64().ok_or_else(|| {
            ChartError::InvalidValueType(format!("sample value must be a number, got {value}"))
        })?;
        Ok(Self { position, value })
    }
}

/// Parses a JSON array of samples.
pub fn samples_from_json_str(input: &str) -> ChartResult<Vec<RawSample>> {
    let payload: Value = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse samples json: {e}")))?;
    let Value::Array(items) = payload else {
        return Err(ChartError::InvalidData(
            "samples json must be an array".to_owned(),
        ));
    };
    items.iter().map(RawSample::from_json).collect()
}

impl SparklineConfig {
    /// Parses a configuration document; missing keys take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse sparkline config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize sparkline config: {e}"))
        })
    }
}

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    date_to_unix_seconds, datetime_to_unix_seconds, decimal_to_f64, time_to_seconds_of_day,
};
use crate::error::{ChartError, ChartResult};

/// Discriminant of the position axis shared by every sample of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    Number,
    DateTime,
    Date,
    Time,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "numeric",
            Self::DateTime => "date-time",
            Self::Date => "date",
            Self::Time => "time-of-day",
        };
        f.write_str(name)
    }
}

/// Position of a raw sample before normalization.
///
/// Serialized as a JSON number or an ISO-8601 string, see
/// [`crate::api::json_contract`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum RawPosition {
    Number(f64),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl RawPosition {
    #[must_use]
    pub fn kind(self) -> AxisKind {
        match self {
            Self::Number(_) => AxisKind::Number,
            Self::DateTime(_) => AxisKind::DateTime,
            Self::Date(_) => AxisKind::Date,
            Self::Time(_) => AxisKind::Time,
        }
    }

    /// Converts the position onto the linear numeric axis.
    ///
    /// Instants and dates become Unix epoch seconds (dates at midnight UTC),
    /// times of day become seconds since midnight.
    pub fn to_linear(self) -> ChartResult<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Ok(value),
            Self::Number(value) => Err(ChartError::InvalidPositionType(format!(
                "numeric position must be finite, got {value}"
            ))),
            Self::DateTime(time) => Ok(datetime_to_unix_seconds(time)),
            Self::Date(date) => Ok(date_to_unix_seconds(date)),
            Self::Time(time) => Ok(time_to_seconds_of_day(time)),
        }
    }

    /// Converts the position, rejecting a kind other than `expected`.
    pub fn to_linear_on(self, expected: AxisKind) -> ChartResult<f64> {
        let found = self.kind();
        if found != expected {
            return Err(ChartError::MixedAxisTypes { expected, found });
        }
        self.to_linear()
    }
}

impl From<f64> for RawPosition {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for RawPosition {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDate> for RawPosition {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveTime> for RawPosition {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

/// Input pair as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub position: RawPosition,
    pub value: f64,
}

impl RawSample {
    #[must_use]
    pub fn new(position: impl Into<RawPosition>, value: f64) -> Self {
        Self {
            position: position.into(),
            value,
        }
    }

    pub fn from_decimal(position: impl Into<RawPosition>, value: Decimal) -> ChartResult<Self> {
        let value = decimal_to_f64(value, "value")
            .map_err(|_| ChartError::InvalidValueType(format!("{value} does not fit in f64")))?;
        Ok(Self::new(position, value))
    }
}

/// Canonical numeric sample in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Sample mapped into output coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewportPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Output coordinate box with a uniform inset on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Checks that both axes keep a positive drawable span after padding.
    pub fn validate(self) -> ChartResult<Self> {
        for (axis, size) in [("width", self.width), ("height", self.height)] {
            let inner = size - 2.0 * self.padding;
            if !size.is_finite() || !self.padding.is_finite() || self.padding < 0.0 || inner <= 0.0
            {
                return Err(ChartError::InvalidDimension {
                    axis,
                    size,
                    padding: self.padding,
                });
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.width - 2.0 * self.padding
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        self.height - 2.0 * self.padding
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.width - self.padding
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.height - self.padding
    }
}

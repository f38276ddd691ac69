use thiserror::Error;

use crate::core::AxisKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid dimension: {axis}={size} leaves no drawable space with padding={padding}")]
    InvalidDimension {
        axis: &'static str,
        size: f64,
        padding: f64,
    },

    #[error("mixed axis types: expected {expected} positions, found {found}")]
    MixedAxisTypes { expected: AxisKind, found: AxisKind },

    #[error("invalid position type: {0}")]
    InvalidPositionType(String),

    #[error("invalid value type: {0}")]
    InvalidValueType(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Fieldless tag for matching on the error family without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidDimension,
    MixedAxisTypes,
    InvalidPositionType,
    InvalidValueType,
    InvalidData,
}

impl ChartError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimension { .. } => ErrorKind::InvalidDimension,
            Self::MixedAxisTypes { .. } => ErrorKind::MixedAxisTypes,
            Self::InvalidPositionType(_) => ErrorKind::InvalidPositionType,
            Self::InvalidValueType(_) => ErrorKind::InvalidValueType,
            Self::InvalidData(_) => ErrorKind::InvalidData,
        }
    }
}

use std::num::ParseIntError;

use super::thumb::ThumbKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeSliderError {
    /// The upper bound is not strictly greater than the lower bound.
    InvalidRange { min: i64, max: i64 },
    /// A textual bound attribute is not a base-10 integer.
    ParseBound(ParseIntError),
    /// A configured initial value lies outside the price bounds.
    InitialValueOutOfRange {
        kind: ThumbKind,
        value: i64,
        min: i64,
        max: i64,
    },
    /// The configured initial min value is greater than the initial max value.
    InitialValuesOutOfOrder { min: i64, max: i64 },
}

impl std::fmt::Display for RangeSliderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid price range: max ({max}) must be greater than min ({min})")
            }
            Self::ParseBound(err) => write!(f, "price bound is not an integer: {err}"),
            Self::InitialValueOutOfRange {
                kind,
                value,
                min,
                max,
            } => write!(
                f,
                "initial {} value {value} is outside the price range {min}..={max}",
                kind.as_str()
            ),
            Self::InitialValuesOutOfOrder { min, max } => write!(
                f,
                "initial min value ({min}) is greater than initial max value ({max})"
            ),
        }
    }
}

impl std::error::Error for RangeSliderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ParseBound(err) => Some(err),
            Self::InvalidRange { .. }
            | Self::InitialValueOutOfRange { .. }
            | Self::InitialValuesOutOfOrder { .. } => None,
        }
    }
}

impl From<ParseIntError> for RangeSliderError {
    fn from(err: ParseIntError) -> Self {
        Self::ParseBound(err)
    }
}

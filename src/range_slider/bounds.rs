use super::error::RangeSliderError;

/// The inclusive domain range a [`super::RangeSlider`] selects from.
///
/// Always satisfies `min < max` with `max - min` representable, so the per-unit step size is
/// finite and positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "(i64, i64)", into = "(i64, i64)")
)]
pub struct PriceBounds {
    min: i64,
    max: i64,
}

impl PriceBounds {
    /// # Errors
    /// [`RangeSliderError::InvalidRange`] if `max <= min` or `max - min` overflows `i64`.
    pub fn new(min: i64, max: i64) -> Result<Self, RangeSliderError> {
        match max.checked_sub(min) {
            Some(span) if span > 0 => Ok(Self { min, max }),
            _ => Err(RangeSliderError::InvalidRange { min, max }),
        }
    }

    /// Parse the host's textual bound attributes (e.g. `data-minprice="0"`).
    ///
    /// # Errors
    /// [`RangeSliderError::ParseBound`] if either attribute is not a base-10 integer, and
    /// [`RangeSliderError::InvalidRange`] if the parsed range is empty.
    pub fn from_attributes(min: &str, max: &str) -> Result<Self, RangeSliderError> {
        let min = min.trim().parse::<i64>()?;
        let max = max.trim().parse::<i64>()?;
        Self::new(min, max)
    }

    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// `max - min`; always positive.
    #[inline]
    pub fn span(&self) -> i64 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl TryFrom<(i64, i64)> for PriceBounds {
    type Error = RangeSliderError;

    fn try_from((min, max): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<PriceBounds> for (i64, i64) {
    fn from(bounds: PriceBounds) -> Self {
        (bounds.min, bounds.max)
    }
}

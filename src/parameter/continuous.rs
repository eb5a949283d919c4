//! Continuous range parameter.

use crate::error::{Error, Result};
use crate::parameter::Parameter;
use crate::types::ParameterType;

/// A parameter taking any real value on `[low, high]`, optionally sampled
/// in log space.
///
/// The optimizer-facing encoding is the normalized unit interval: an
/// optimizer proposes `u` in `[0, 1]` and
/// [`from_unit`](ContinuousParameter::from_unit) decodes it to a concrete
/// value; [`to_unit`](ContinuousParameter::to_unit) is the inverse.
///
/// # Example
///
/// ```
/// use searchspace::parameter::{ContinuousParameter, Parameter};
///
/// let lr = ContinuousParameter::new("learning_rate", 1e-5, 1e-1).log_scale();
/// lr.validate().unwrap();
///
/// assert_eq!(lr.from_unit(0.0).unwrap(), 1e-5);
/// assert_eq!(lr.from_unit(1.0).unwrap(), 1e-1);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousParameter {
    name: String,
    low: f64,
    high: f64,
    log_scale: bool,
}

impl ContinuousParameter {
    /// Creates a continuous parameter on `[low, high]`.
    #[must_use]
    pub fn new(name: impl Into<String>, low: f64, high: f64) -> Self {
        Self {
            name: name.into(),
            low,
            high,
            log_scale: false,
        }
    }

    /// Enables log-scale interpolation over the range.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns whether interpolation happens in log space.
    #[must_use]
    pub fn is_log_scale(&self) -> bool {
        self.log_scale
    }

    /// Decodes a normalized unit value into a concrete value on the range.
    ///
    /// `from_unit(0.0)` is exactly `low` and `from_unit(1.0)` is exactly
    /// `high`; interior points interpolate linearly, or exponentially when
    /// log scale is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnitOutOfRange`] if `u` lies outside `[0, 1]`.
    pub fn from_unit(&self, u: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&u) {
            return Err(Error::UnitOutOfRange {
                name: self.name.clone(),
                value: u,
            });
        }
        // Endpoints decode exactly; exp(ln(high)) need not equal high.
        if u <= 0.0 {
            return Ok(self.low);
        }
        if u >= 1.0 {
            return Ok(self.high);
        }
        let value = if self.log_scale {
            let log_low = self.low.ln();
            let log_high = self.high.ln();
            (log_low + u * (log_high - log_low)).exp()
        } else {
            self.low + u * (self.high - self.low)
        };
        Ok(value.clamp(self.low, self.high))
    }

    /// Encodes a concrete value on the range as a normalized unit value,
    /// clamped to `[0, 1]`. Inverse of
    /// [`from_unit`](ContinuousParameter::from_unit) within floating-point
    /// tolerance.
    #[must_use]
    pub fn to_unit(&self, value: f64) -> f64 {
        let u = if self.log_scale {
            let log_low = self.low.ln();
            (value.ln() - log_low) / (self.high.ln() - log_low)
        } else {
            (value - self.low) / (self.high - self.low)
        };
        u.clamp(0.0, 1.0)
    }
}

impl Parameter for ContinuousParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_type(&self) -> ParameterType {
        ParameterType::Continuous
    }

    fn validate(&self) -> Result<()> {
        self.validate_identity()?;
        if self.low >= self.high {
            return Err(Error::InvalidBounds {
                param: self.label(),
            });
        }
        if self.log_scale && self.low <= 0.0 {
            return Err(Error::InvalidLogBounds {
                param: self.label(),
            });
        }
        Ok(())
    }
}

//! Discrete interval parameter.

use crate::error::{Error, Result};
use crate::parameter::Parameter;
use crate::types::{DiscreteRepresentationType, ParameterType, StepType};

/// A parameter taking discrete values on a numeric interval.
///
/// The interval `[low, high]` is traversed from `low` by a step rule:
/// arithmetic (`value += step_size`) or geometric (`value *= step_size`).
/// `high` is inclusive when reachable, otherwise the last value is the
/// nearest reachable step below it.
///
/// Negative intervals are expressed with positive magnitude bounds plus
/// [`negative`](DiscreteParameter::negative), which sign-flips every
/// produced value. Specifying `[-8, -4, -2, -1]` directly would need a
/// fractional geometric step; as `[1, 2, 4, 8]` with step 2 and the sign
/// flag it keeps the step rule uniform.
///
/// # Example
///
/// ```
/// use searchspace::parameter::{DiscreteParameter, Parameter};
///
/// let batch = DiscreteParameter::new("batch_size", 1.0, 128.0).geometric(2.0);
/// batch.validate().unwrap();
///
/// assert_eq!(batch.interval_list(), vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0]);
/// assert_eq!(batch.map_to_interval(3).unwrap(), 8.0);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteParameter {
    name: String,
    low: f64,
    high: f64,
    step_type: StepType,
    step_size: f64,
    repr_type: DiscreteRepresentationType,
    is_negative: bool,
}

impl DiscreteParameter {
    /// Creates an arithmetic parameter on `[low, high]` with step size 1.
    #[must_use]
    pub fn new(name: impl Into<String>, low: f64, high: f64) -> Self {
        Self {
            name: name.into(),
            low,
            high,
            step_type: StepType::Arithmetic,
            step_size: 1.0,
            repr_type: DiscreteRepresentationType::Default,
            is_negative: false,
        }
    }

    /// Sets the step size, keeping the current step type.
    #[must_use]
    pub fn step(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Switches to geometric stepping with the given step size.
    #[must_use]
    pub fn geometric(mut self, step_size: f64) -> Self {
        self.step_type = StepType::Geometric;
        self.step_size = step_size;
        self
    }

    /// Sets how the parameter is presented to an external optimizer.
    #[must_use]
    pub fn representation(mut self, repr_type: DiscreteRepresentationType) -> Self {
        self.repr_type = repr_type;
        self
    }

    /// Sign-flips every value on the interval. Bounds stay positive
    /// magnitudes.
    #[must_use]
    pub fn negative(mut self) -> Self {
        self.is_negative = true;
        self
    }

    /// Returns the inclusive lower bound (unsigned magnitude).
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the inclusive upper bound (unsigned magnitude).
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the step rule.
    #[must_use]
    pub fn step_type(&self) -> StepType {
        self.step_type
    }

    /// Returns the step size.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the optimizer-facing representation type.
    #[must_use]
    pub fn repr_type(&self) -> DiscreteRepresentationType {
        self.repr_type
    }

    /// Returns whether interval values are sign-flipped.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    /// The unsigned magnitude of the nth interval value, unchecked.
    fn magnitude_at(&self, n: u32) -> f64 {
        match self.step_type {
            StepType::Arithmetic => self.low + self.step_size * f64::from(n),
            StepType::Geometric => self.low * self.step_size.powi(i32::try_from(n).unwrap_or(i32::MAX)),
        }
    }

    fn signed(&self, magnitude: f64) -> f64 {
        if self.is_negative { -magnitude } else { magnitude }
    }

    /// Returns the largest `n` such that the nth interval magnitude does
    /// not exceed `high`.
    ///
    /// The closed-form inverse (`floor((high - low) / step_size)` for
    /// arithmetic, `floor(log_step(high / low))` for geometric) can lose a
    /// representable boundary value to floating-point rounding, so the
    /// estimate is corrected by probing the neighboring indices against
    /// `high`. This defines the valid domain of
    /// [`map_to_interval`](DiscreteParameter::map_to_interval) and the
    /// length of [`interval_list`](DiscreteParameter::interval_list)
    /// (`max_n() + 1` elements).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn max_n(&self) -> u32 {
        let estimate = match self.step_type {
            StepType::Arithmetic => ((self.high - self.low) / self.step_size).floor(),
            StepType::Geometric => (self.high / self.low).log(self.step_size).floor(),
        };
        let mut n = if estimate.is_finite() && estimate > 0.0 {
            estimate as u32
        } else {
            0
        };
        // Roundoff at the boundary: trust the probes, not the estimate.
        // The estimate cast saturates, so the probe index must too.
        if self.magnitude_at(n.saturating_add(1)) <= self.high {
            n = n.saturating_add(1);
        }
        while n > 0 && self.magnitude_at(n) > self.high {
            n -= 1;
        }
        n
    }

    /// Returns the number of values on the interval, `max_n() + 1`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn n_values(&self) -> usize {
        self.max_n() as usize + 1
    }

    /// Returns the nth value on the interval (0-indexed) in O(1).
    ///
    /// Arithmetic: `low + step_size * n`. Geometric: `low * step_size^n`.
    /// Sign-flipped when the parameter is negative. Agrees index-for-index
    /// with [`interval_list`](DiscreteParameter::interval_list) without
    /// materializing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `n > max_n()`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn map_to_interval(&self, n: u32) -> Result<f64> {
        let max_n = self.max_n();
        if n > max_n {
            return Err(Error::IndexOutOfRange {
                name: self.name.clone(),
                index: n as usize,
                max: max_n as usize,
            });
        }
        Ok(self.signed(self.magnitude_at(n)))
    }

    /// Materializes the values on the interval, in index order.
    ///
    /// Deterministic and restartable: repeated calls yield the identical
    /// sequence, computed through the same closed form as
    /// [`map_to_interval`](DiscreteParameter::map_to_interval).
    #[must_use]
    pub fn interval_list(&self) -> Vec<f64> {
        (0..=self.max_n())
            .map(|n| self.signed(self.magnitude_at(n)))
            .collect()
    }

    /// Returns the index of `value` on the interval, or `None` when the
    /// value does not lie on it (within floating-point tolerance).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn index_of(&self, value: f64) -> Option<u32> {
        let magnitude = if self.is_negative { -value } else { value };
        let estimate = match self.step_type {
            StepType::Arithmetic => (magnitude - self.low) / self.step_size,
            StepType::Geometric => (magnitude / self.low).log(self.step_size),
        };
        if !estimate.is_finite() || estimate < -0.5 {
            return None;
        }
        let n = estimate.round().max(0.0) as u32;
        if n > self.max_n() {
            return None;
        }
        let found = self.magnitude_at(n);
        let tolerance = 1e-9 * magnitude.abs().max(1.0);
        ((found - magnitude).abs() <= tolerance).then_some(n)
    }
}

impl Parameter for DiscreteParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_type(&self) -> ParameterType {
        ParameterType::Discrete
    }

    fn validate(&self) -> Result<()> {
        self.validate_identity()?;
        if self.low < 0.0 {
            return Err(Error::NegativeLow {
                param: self.label(),
            });
        }
        if self.low >= self.high {
            return Err(Error::InvalidBounds {
                param: self.label(),
            });
        }
        if self.step_size <= 0.0 {
            return Err(Error::InvalidStep {
                param: self.label(),
            });
        }
        match self.step_type {
            StepType::Arithmetic => {}
            StepType::Geometric => {
                if self.step_size <= 1.0 {
                    return Err(Error::GeometricStep {
                        param: self.label(),
                    });
                }
                if self.low == 0.0 || self.high == 0.0 {
                    return Err(Error::GeometricZeroBound {
                        param: self.label(),
                    });
                }
                if (self.low < 0.0 && self.high > 0.0) || (self.low > 0.0 && self.high < 0.0) {
                    return Err(Error::GeometricSignMismatch {
                        param: self.label(),
                    });
                }
            }
        }
        Ok(())
    }
}

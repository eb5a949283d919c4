#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a parameter is constructed with an empty name.
    #[error("parameter name cannot be empty: {param}")]
    EmptyName {
        /// Rendering of the offending parameter.
        param: String,
    },

    /// Returned when a discrete parameter has a negative lower bound.
    /// Negative intervals are expressed through `is_negative` with positive
    /// magnitude bounds.
    #[error("negative lower bound; express negative intervals via `negative()`: {param}")]
    NegativeLow {
        /// Rendering of the offending parameter.
        param: String,
    },

    /// Returned when the lower bound is not strictly below the upper bound.
    #[error("invalid bounds: low must be less than high: {param}")]
    InvalidBounds {
        /// Rendering of the offending parameter.
        param: String,
    },

    /// Returned when the step size is not positive.
    #[error("invalid step: step size must be positive: {param}")]
    InvalidStep {
        /// Rendering of the offending parameter.
        param: String,
    },

    /// Returned when a geometric step size cannot progress toward the upper
    /// bound.
    #[error("geometric step size must be greater than 1: {param}")]
    GeometricStep {
        /// Rendering of the offending parameter.
        param: String,
    },

    /// Returned when a geometric interval has a zero bound.
    #[error("geometric interval cannot have a bound of 0: {param}")]
    GeometricZeroBound {
        /// Rendering of the offending parameter.
        param: String,
    },

    /// Returned when the bounds of a geometric interval differ in sign.
    ///
    /// The negative-lower-bound check runs first and already rejects every
    /// input that could differ in sign, so this variant is shadowed by
    /// [`Error::NegativeLow`]; it completes the geometric invariant set.
    #[error("geometric interval bounds must share the same sign: {param}")]
    GeometricSignMismatch {
        /// Rendering of the offending parameter.
        param: String,
    },

    /// Returned when log scale is used with non-positive bounds.
    #[error("invalid log bounds: low must be positive for log scale: {param}")]
    InvalidLogBounds {
        /// Rendering of the offending parameter.
        param: String,
    },

    /// Returned when categorical choices are empty.
    #[error("categorical choices cannot be empty: {param}")]
    EmptyChoices {
        /// Rendering of the offending parameter.
        param: String,
    },

    /// Returned when an optimizer-facing index lies outside the parameter's
    /// valid domain.
    #[error("index {index} out of range for '{name}' (max valid index {max})")]
    IndexOutOfRange {
        /// The name of the parameter.
        name: String,
        /// The rejected index.
        index: usize,
        /// The largest valid index.
        max: usize,
    },

    /// Returned when a unit-interval encoding lies outside `[0, 1]`.
    #[error("unit value {value} outside [0, 1] for '{name}'")]
    UnitOutOfRange {
        /// The name of the parameter.
        name: String,
        /// The rejected unit value.
        value: f64,
    },

    /// Returned when a parameter is added under a name already present in
    /// the search space.
    #[error("duplicate parameter name '{0}'")]
    DuplicateParameter(String),

    /// Returned when looking up a parameter name the search space does not
    /// contain.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),
}

pub type Result<T> = core::result::Result<T, Error>;

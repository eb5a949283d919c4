//! Central parameter trait and built-in parameter types.
//!
//! The [`Parameter`] trait carries the identity, type tag, and validation
//! contract shared by every parameter in a search space. Built-in
//! implementations cover discrete numeric intervals, continuous ranges,
//! and categorical choice sets.
//!
//! # Example
//!
//! ```
//! use searchspace::parameter::{ContinuousParameter, DiscreteParameter, Parameter};
//!
//! let units = DiscreteParameter::new("units", 32.0, 512.0).step(32.0);
//! let dropout = ContinuousParameter::new("dropout", 0.0, 0.5);
//!
//! units.validate().unwrap();
//! dropout.validate().unwrap();
//! ```

use core::fmt::Debug;

use crate::error::{Error, Result};
use crate::types::ParameterType;

mod categorical;
mod continuous;
mod discrete;

pub use categorical::CategoricalParameter;
pub use continuous::ContinuousParameter;
pub use discrete::DiscreteParameter;

/// The contract every parameter of a search space implements.
///
/// A parameter is an immutable value object: all methods are pure queries,
/// and a single instance may be shared freely across concurrent search
/// workers.
pub trait Parameter: Debug {
    /// Returns the parameter's name, unique within a search space.
    fn name(&self) -> &str;

    /// Returns the parameter's type tag, fixed at construction.
    fn parameter_type(&self) -> ParameterType;

    /// Returns a deterministic, complete rendering of the parameter's
    /// fields for diagnostics and error messages.
    ///
    /// Defaults to the `Debug` output of the parameter.
    fn label(&self) -> String {
        format!("{self:?}")
    }

    /// Validates the parameter configuration.
    ///
    /// Implementors first invoke [`Parameter::validate_identity`] and then
    /// check their own invariants. Called eagerly when a search space is
    /// constructed; an invalid definition is a configuration bug and stops
    /// space construction.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated invariant, carrying
    /// the parameter's full rendering.
    fn validate(&self) -> Result<()>;

    /// Validates the base invariant shared by all parameters: a non-empty
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`] if the name is empty.
    fn validate_identity(&self) -> Result<()> {
        if self.name().is_empty() {
            return Err(Error::EmptyName {
                param: self.label(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Stub(&'static str);

    impl Parameter for Stub {
        fn name(&self) -> &str {
            self.0
        }

        fn parameter_type(&self) -> ParameterType {
            ParameterType::Continuous
        }

        fn validate(&self) -> Result<()> {
            self.validate_identity()
        }
    }

    #[test]
    fn identity_accepts_nonempty_name() {
        assert!(Stub("x").validate().is_ok());
    }

    #[test]
    fn identity_rejects_empty_name() {
        assert!(matches!(
            Stub("").validate(),
            Err(Error::EmptyName { .. })
        ));
    }

    #[test]
    fn label_defaults_to_debug() {
        let stub = Stub("x");
        assert_eq!(stub.label(), format!("{stub:?}"));
    }
}

//! Search-space container.
//!
//! A [`SearchSpace`] maps parameter names to parameter definitions and is
//! validated as a whole before a search driver starts proposing trials.
//! Validation is eager: the first invalid definition aborts space
//! construction, since an invalid parameter is a configuration bug rather
//! than a recoverable condition.
//!
//! # Example
//!
//! ```
//! use searchspace::prelude::*;
//!
//! let mut space = SearchSpace::new();
//! space
//!     .add(DiscreteParameter::new("batch_size", 1.0, 128.0).geometric(2.0))
//!     .unwrap();
//! space
//!     .add(ContinuousParameter::new("learning_rate", 1e-5, 1e-1).log_scale())
//!     .unwrap();
//! space
//!     .add(CategoricalParameter::new(
//!         "activation",
//!         vec!["relu".to_string(), "tanh".to_string()],
//!     ))
//!     .unwrap();
//!
//! space.validate().unwrap();
//! assert_eq!(space.len(), 3);
//! ```

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::parameter::{CategoricalParameter, ContinuousParameter, DiscreteParameter, Parameter};
use crate::types::ParameterType;

/// Type-erased storage form of a parameter inside a [`SearchSpace`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpaceParameter {
    /// A discrete interval parameter.
    Discrete(DiscreteParameter),
    /// A continuous range parameter.
    Continuous(ContinuousParameter),
    /// A categorical parameter over string choices.
    Categorical(CategoricalParameter<String>),
}

impl Parameter for SpaceParameter {
    fn name(&self) -> &str {
        match self {
            Self::Discrete(p) => p.name(),
            Self::Continuous(p) => p.name(),
            Self::Categorical(p) => p.name(),
        }
    }

    fn parameter_type(&self) -> ParameterType {
        match self {
            Self::Discrete(p) => p.parameter_type(),
            Self::Continuous(p) => p.parameter_type(),
            Self::Categorical(p) => p.parameter_type(),
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Discrete(p) => p.label(),
            Self::Continuous(p) => p.label(),
            Self::Categorical(p) => p.label(),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::Discrete(p) => p.validate(),
            Self::Continuous(p) => p.validate(),
            Self::Categorical(p) => p.validate(),
        }
    }
}

impl From<DiscreteParameter> for SpaceParameter {
    fn from(param: DiscreteParameter) -> Self {
        Self::Discrete(param)
    }
}

impl From<ContinuousParameter> for SpaceParameter {
    fn from(param: ContinuousParameter) -> Self {
        Self::Continuous(param)
    }
}

impl From<CategoricalParameter<String>> for SpaceParameter {
    fn from(param: CategoricalParameter<String>) -> Self {
        Self::Categorical(param)
    }
}

impl SpaceParameter {
    /// Returns the contained discrete parameter, if any.
    #[must_use]
    pub fn as_discrete(&self) -> Option<&DiscreteParameter> {
        match self {
            Self::Discrete(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the contained continuous parameter, if any.
    #[must_use]
    pub fn as_continuous(&self) -> Option<&ContinuousParameter> {
        match self {
            Self::Continuous(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the contained categorical parameter, if any.
    #[must_use]
    pub fn as_categorical(&self) -> Option<&CategoricalParameter<String>> {
        match self {
            Self::Categorical(p) => Some(p),
            _ => None,
        }
    }
}

/// A named collection of parameters defining a hyperparameter search space.
///
/// Parameters are keyed by name and iterated in name order, so repeated
/// traversals of the same space are deterministic.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSpace {
    params: BTreeMap<String, SpaceParameter>,
}

impl SearchSpace {
    /// Creates an empty search space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter to the space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateParameter`] if a parameter with the same
    /// name is already present.
    pub fn add(&mut self, param: impl Into<SpaceParameter>) -> Result<()> {
        let param = param.into();
        let name = param.name().to_owned();
        if self.params.contains_key(&name) {
            return Err(Error::DuplicateParameter(name));
        }
        trace_debug!(name = %name, "parameter added to search space");
        self.params.insert(name, param);
        Ok(())
    }

    /// Returns the parameter with the given name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SpaceParameter> {
        self.params.get(name)
    }

    /// Returns the parameter with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] if the space does not contain
    /// the name.
    pub fn require(&self, name: &str) -> Result<&SpaceParameter> {
        self.params
            .get(name)
            .ok_or_else(|| Error::UnknownParameter(name.to_owned()))
    }

    /// Returns the number of parameters in the space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns whether the space contains no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates over the parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = &SpaceParameter> {
        self.params.values()
    }

    /// Iterates over the parameter names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Validates every parameter in the space.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure encountered, in name order.
    pub fn validate(&self) -> Result<()> {
        for param in self.params.values() {
            param.validate()?;
        }
        trace_info!(n_params = self.params.len(), "search space validated");
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SearchSpace {
    type Item = &'a SpaceParameter;
    type IntoIter = std::collections::btree_map::Values<'a, String, SpaceParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.values()
    }
}

//! Categorical choice parameter.

use core::fmt::Debug;

use crate::error::{Error, Result};
use crate::parameter::Parameter;
use crate::types::ParameterType;

/// A parameter selecting from a finite, unordered list of choices.
///
/// The optimizer-facing encoding is the choice index `0..n_choices()`;
/// [`map_to_choice`](CategoricalParameter::map_to_choice) decodes an index
/// and [`index_of`](CategoricalParameter::index_of) recovers it.
///
/// # Example
///
/// ```
/// use searchspace::parameter::{CategoricalParameter, Parameter};
///
/// let act = CategoricalParameter::new("activation", vec!["relu", "sigmoid", "tanh"]);
/// act.validate().unwrap();
///
/// assert_eq!(*act.map_to_choice(1).unwrap(), "sigmoid");
/// assert_eq!(act.index_of(&"tanh"), Some(2));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoricalParameter<T: Clone> {
    name: String,
    choices: Vec<T>,
}

impl<T: Clone> CategoricalParameter<T> {
    /// Creates a categorical parameter with the given choices.
    #[must_use]
    pub fn new(name: impl Into<String>, choices: Vec<T>) -> Self {
        Self {
            name: name.into(),
            choices,
        }
    }

    /// Returns the number of choices.
    #[must_use]
    pub fn n_choices(&self) -> usize {
        self.choices.len()
    }

    /// Returns the choices in index order.
    #[must_use]
    pub fn choices(&self) -> &[T] {
        &self.choices
    }

    /// Decodes a choice index into the corresponding choice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= n_choices()`.
    pub fn map_to_choice(&self, index: usize) -> Result<&T> {
        self.choices.get(index).ok_or_else(|| Error::IndexOutOfRange {
            name: self.name.clone(),
            index,
            max: self.choices.len().saturating_sub(1),
        })
    }

    /// Returns the index of `choice`, or `None` when it is not among the
    /// choices.
    #[must_use]
    pub fn index_of(&self, choice: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.choices.iter().position(|c| c == choice)
    }
}

impl<T: Clone + Debug> Parameter for CategoricalParameter<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_type(&self) -> ParameterType {
        ParameterType::Categorical
    }

    fn validate(&self) -> Result<()> {
        self.validate_identity()?;
        if self.choices.is_empty() {
            return Err(Error::EmptyChoices {
                param: self.label(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_to_choice_decodes() {
        let param = CategoricalParameter::new("opt", vec!["sgd", "adam", "rmsprop"]);
        assert_eq!(*param.map_to_choice(0).unwrap(), "sgd");
        assert_eq!(*param.map_to_choice(2).unwrap(), "rmsprop");
    }

    #[test]
    fn map_to_choice_rejects_out_of_range() {
        let param = CategoricalParameter::new("opt", vec!["sgd", "adam"]);
        assert!(matches!(
            param.map_to_choice(2),
            Err(Error::IndexOutOfRange { index: 2, max: 1, .. })
        ));
    }

    #[test]
    fn index_roundtrip() {
        let param = CategoricalParameter::new("opt", vec!["sgd", "adam", "rmsprop"]);
        for index in 0..param.n_choices() {
            let choice = param.map_to_choice(index).unwrap().clone();
            assert_eq!(param.index_of(&choice), Some(index));
        }
    }

    #[test]
    fn validate_rejects_empty_choices() {
        let param = CategoricalParameter::<&str>::new("opt", vec![]);
        assert!(matches!(param.validate(), Err(Error::EmptyChoices { .. })));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let param = CategoricalParameter::new("", vec!["a"]);
        assert!(matches!(param.validate(), Err(Error::EmptyName { .. })));
    }
}

//! Core enumerated types for the search-space model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rule for advancing from one point of a discrete interval to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepType {
    /// Additive stepping: `value += step_size`.
    Arithmetic,
    /// Multiplicative stepping: `value *= step_size`.
    Geometric,
}

/// The kind of a parameter, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParameterType {
    /// A finite numeric interval traversed by a step rule.
    Discrete,
    /// A real-valued range.
    Continuous,
    /// A finite set of unordered choices.
    Categorical,
}

/// How a discrete parameter is presented to an external optimizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiscreteRepresentationType {
    /// The optimizer works with the raw interval values.
    #[default]
    Default,
    /// The optimizer works with the integer index `0..=max_n` and decodes
    /// each proposal through `map_to_interval`.
    Index,
}

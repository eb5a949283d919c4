#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Typed hyperparameter search-space model for asynchronous hyperparameter
//! and neural-architecture search.
//!
//! The crate provides a small set of immutable parameter types — discrete
//! numeric intervals, continuous ranges, and categorical choice sets — with
//! a deterministic, reversible mapping between the encoding an external
//! optimizer works with (an integer index or a normalized unit value) and
//! the semantic value a benchmark consumes. Every invalid configuration is
//! rejected eagerly at space-construction time via [`Parameter::validate`],
//! never deferred to search time.
//!
//! # Getting Started
//!
//! ```
//! use searchspace::prelude::*;
//!
//! // Powers of two from 1 to 128.
//! let batch = DiscreteParameter::new("batch_size", 1.0, 128.0).geometric(2.0);
//! batch.validate().unwrap();
//!
//! assert_eq!(batch.max_n(), 7);
//! assert_eq!(batch.map_to_interval(3).unwrap(), 8.0);
//! assert_eq!(batch.interval_list().len(), 8);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Parameter`](parameter::Parameter) | Identity, type tag, and validation contract shared by every parameter. |
//! | [`DiscreteParameter`](parameter::DiscreteParameter) | Finite numeric interval stepped arithmetically or geometrically, indexed in O(1). |
//! | [`ContinuousParameter`](parameter::ContinuousParameter) | Real range with a normalized unit-interval encoding, optionally log-scaled. |
//! | [`CategoricalParameter`](parameter::CategoricalParameter) | Finite choice set encoded as an index. |
//! | [`SearchSpace`](space::SearchSpace) | Named collection of parameters, validated as a whole before a search starts. |
//!
//! # Encoding Contract
//!
//! A discrete parameter exposes exactly `max_n() + 1` values. An optimizer
//! adapter sizes its internal representation from [`max_n`], then decodes
//! each proposed trial through [`map_to_interval`]; both are constant-time
//! and agree index-for-index with the materialized [`interval_list`].
//! Out-of-range indices are reported as [`Error::IndexOutOfRange`] instead
//! of silently producing a value outside the interval.
//!
//! [`max_n`]: parameter::DiscreteParameter::max_n
//! [`map_to_interval`]: parameter::DiscreteParameter::map_to_interval
//! [`interval_list`]: parameter::DiscreteParameter::interval_list
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on parameter types and [`SearchSpace`](space::SearchSpace) | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at space construction and validation | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
pub mod parameter;
pub mod space;
mod types;

pub use error::{Error, Result};
pub use parameter::{CategoricalParameter, ContinuousParameter, DiscreteParameter, Parameter};
pub use space::{SearchSpace, SpaceParameter};
pub use types::{DiscreteRepresentationType, ParameterType, StepType};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use searchspace::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::parameter::{
        CategoricalParameter, ContinuousParameter, DiscreteParameter, Parameter,
    };
    pub use crate::space::{SearchSpace, SpaceParameter};
    pub use crate::types::{DiscreteRepresentationType, ParameterType, StepType};
}

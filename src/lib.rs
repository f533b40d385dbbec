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

//! Hyperparameter search-space construction and sampling for declarative
//! training pipelines. Parameter domains are declared as typed specs
//! (float, int, category), expanded into ordered candidate sequences, and
//! consumed one configuration at a time through a pluggable
//! [`Strategy`](strategy::Strategy) — exhaustive [`GridStrategy`] or
//! budgeted [`RandomStrategy`].
//!
//! # Getting Started
//!
//! Enumerate a grid and drive a search loop:
//!
//! ```
//! use hypertune::prelude::*;
//!
//! let params = vec![
//!     (
//!         "learning_rate".to_string(),
//!         ParameterSpec::float(1e-4, 1e-1).log_scale().steps(4),
//!     ),
//!     ("num_layers".to_string(), ParameterSpec::int(1, 3)),
//! ];
//!
//! let grid = GridStrategy::new(Goal::Minimize, params)?;
//! assert_eq!(grid.combination_count(), 12);
//!
//! while let Ok(sample) = grid.sample() {
//!     let lr = sample["learning_rate"].as_f64().unwrap();
//!     let layers = sample["num_layers"].as_i64().unwrap();
//!     // evaluate the configuration ...
//!     let _ = (lr, layers);
//! }
//! assert!(grid.is_exhausted());
//! # Ok::<(), hypertune::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`ParameterSpec`] | Declarative description of one parameter's domain (bounds, steps, scale, or category values). |
//! | [`SearchSpace`](space::SearchSpace) | Ordered mapping from parameter name to its materialized candidate sequence. |
//! | [`Strategy`](strategy::Strategy) | Dispenses one [`Sample`](strategy::Sample) (name → value assignment) per call until exhausted. |
//! | [`Goal`] | Optimization direction, carried for downstream trial comparison; sampling itself is goal-agnostic. |
//!
//! # Determinism
//!
//! Grid enumeration is fully deterministic: candidate sequences are
//! materialized up front (linear or log spacing, integers rounded with
//! `f64::round` and deduplicated) and combinations are dispensed in
//! odometer order — the first declared parameter varies slowest, the last
//! varies fastest. Random search is reproducible via
//! [`RandomStrategy::with_seed`](strategy::RandomStrategy::with_seed).
//!
//! # Errors
//!
//! All spec validation happens eagerly at strategy construction, so a
//! search run never fails mid-way on a malformed spec. The only
//! sampling-time failure is [`Error::Exhausted`], the expected termination
//! condition of a search loop (see [`Error::is_exhausted`]).
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at strategy construction | off |

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
mod rng_util;
pub mod space;
pub mod spec;
pub mod strategy;
mod types;
mod value;

pub use error::{Error, Result};
pub use space::{SearchSpace, DEFAULT_FLOAT_STEPS};
pub use spec::{ParameterSpec, Scale};
pub use strategy::{build_strategy, GridStrategy, RandomStrategy, Sample, Strategy, StrategyKind};
pub use types::Goal;
pub use value::ParamValue;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use hypertune::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::space::SearchSpace;
    pub use crate::spec::{ParameterSpec, Scale};
    pub use crate::strategy::{
        build_strategy, GridStrategy, RandomStrategy, Sample, Strategy, StrategyKind,
    };
    pub use crate::types::Goal;
    pub use crate::value::ParamValue;
}

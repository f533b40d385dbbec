//! Search strategies: how samples are drawn from a parameter map.

pub mod grid;
pub mod random;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use grid::GridStrategy;
pub use random::RandomStrategy;

use crate::error::Result;
use crate::spec::ParameterSpec;
use crate::types::Goal;
use crate::value::ParamValue;

/// One full parameter assignment: name → concrete value.
///
/// A strategy's samples always carry exactly the key set of its input
/// parameter map, regardless of how the values were drawn.
pub type Sample = HashMap<String, ParamValue>;

/// Trait for pluggable sampling strategies.
///
/// Strategies are constructed once per search run against a validated
/// parameter map and then dispense one [`Sample`] per `sample()` call
/// until exhausted. `Send + Sync` so one strategy can feed concurrent
/// search workers.
pub trait Strategy: Send + Sync + std::fmt::Debug {
    /// The optimization direction downstream consumers compare trials with.
    fn goal(&self) -> Goal;

    /// Dispenses the next sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`](crate::Error::Exhausted) once every
    /// available (grid) or requested (random) sample has been dispensed.
    fn sample(&self) -> Result<Sample>;

    /// How many samples this strategy can still dispense.
    fn remaining(&self) -> usize;

    /// Returns `true` once `sample()` can only fail.
    fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

/// Which strategy a declarative configuration selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Exhaustive Cartesian-product enumeration.
    Grid,
    /// Independent random draws up to a fixed budget.
    Random,
}

/// Builds the strategy a configuration names.
///
/// `num_samples` is the random-search budget; grid search enumerates its
/// full Cartesian product and ignores it.
///
/// # Errors
///
/// Returns a spec-validation error for any malformed parameter spec.
pub fn build_strategy(
    kind: StrategyKind,
    goal: Goal,
    parameters: Vec<(String, ParameterSpec)>,
    num_samples: usize,
) -> Result<Box<dyn Strategy>> {
    match kind {
        StrategyKind::Grid => Ok(Box::new(GridStrategy::new(goal, parameters)?)),
        StrategyKind::Random => Ok(Box::new(RandomStrategy::new(goal, parameters, num_samples)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Vec<(String, ParameterSpec)> {
        vec![
            ("layers".to_string(), ParameterSpec::int(1, 2)),
            ("cell".to_string(), ParameterSpec::category(["rnn", "gru"])),
        ]
    }

    #[test]
    fn kind_deserializes_from_lowercase() {
        let kind: StrategyKind = serde_json::from_str("\"grid\"").unwrap();
        assert_eq!(kind, StrategyKind::Grid);
        let kind: StrategyKind = serde_json::from_str("\"random\"").unwrap();
        assert_eq!(kind, StrategyKind::Random);
    }

    #[test]
    fn build_grid_enumerates_everything() {
        let strategy = build_strategy(StrategyKind::Grid, Goal::Minimize, params(), 0).unwrap();
        assert_eq!(strategy.remaining(), 4);
        let mut dispensed = 0;
        while let Ok(sample) = strategy.sample() {
            assert_eq!(sample.len(), 2);
            dispensed += 1;
        }
        assert_eq!(dispensed, 4);
        assert!(strategy.is_exhausted());
    }

    #[test]
    fn build_random_honors_budget() {
        let strategy = build_strategy(StrategyKind::Random, Goal::Maximize, params(), 7).unwrap();
        assert_eq!(strategy.goal(), Goal::Maximize);
        for _ in 0..7 {
            strategy.sample().unwrap();
        }
        assert!(strategy.sample().unwrap_err().is_exhausted());
    }
}

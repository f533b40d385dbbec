//! Exhaustive grid search over the Cartesian product of all candidates.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};
use crate::space::SearchSpace;
use crate::spec::ParameterSpec;
use crate::strategy::{Sample, Strategy};
use crate::types::Goal;

/// Enumerates every combination of every parameter's grid candidates.
///
/// The full Cartesian product is materialized at construction and
/// dispensed in odometer order: the first declared parameter varies
/// slowest, the last varies fastest. Once the last combination has been
/// dispensed the strategy is exhausted for good; there is no wrap-around.
///
/// The cursor advance is an atomic fetch-and-increment, so a strategy
/// shared across worker threads dispenses each combination to exactly one
/// of them.
///
/// # Examples
///
/// ```
/// use hypertune::{Goal, GridStrategy, ParameterSpec};
///
/// let grid = GridStrategy::new(
///     Goal::Minimize,
///     vec![
///         ("layers".to_string(), ParameterSpec::int(1, 2)),
///         (
///             "cell".to_string(),
///             ParameterSpec::category(["rnn", "gru", "lstm"]),
///         ),
///     ],
/// )?;
/// assert_eq!(grid.combination_count(), 6);
/// # Ok::<(), hypertune::Error>(())
/// ```
#[derive(Debug)]
pub struct GridStrategy {
    goal: Goal,
    search_space: SearchSpace,
    samples: Vec<Sample>,
    cursor: AtomicUsize,
}

impl GridStrategy {
    /// Builds the search space and materializes all combinations.
    ///
    /// # Errors
    ///
    /// Returns a spec-validation error for any malformed spec or duplicate
    /// parameter name; nothing is deferred to `sample()`.
    pub fn new(goal: Goal, parameters: Vec<(String, ParameterSpec)>) -> Result<Self> {
        let search_space = SearchSpace::build(&parameters)?;
        let samples = cartesian_product(&search_space);
        debug_assert_eq!(samples.len(), search_space.combination_count());
        trace_debug!(
            combinations = samples.len(),
            parameters = search_space.len(),
            "grid search space materialized"
        );
        Ok(Self {
            goal,
            search_space,
            samples,
            cursor: AtomicUsize::new(0),
        })
    }

    /// The optimization direction this search was configured with.
    #[must_use]
    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// The materialized per-parameter candidate sequences.
    #[must_use]
    pub fn search_space(&self) -> &SearchSpace {
        &self.search_space
    }

    /// All combinations in dispensation order.
    #[must_use]
    pub fn combinations(&self) -> &[Sample] {
        &self.samples
    }

    /// Total number of combinations.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.samples.len()
    }

    /// Combinations not yet dispensed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.samples
            .len()
            .saturating_sub(self.cursor.load(Ordering::Relaxed))
    }

    /// Returns `true` once every combination has been dispensed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Dispenses the next combination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] once all combinations have been
    /// dispensed; the cursor never wraps around.
    pub fn sample(&self) -> Result<Sample> {
        // Bounded fetch-and-increment: concurrent callers each claim a
        // distinct index, and exhausted calls leave the cursor untouched.
        let claimed = self
            .cursor
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |cursor| {
                if cursor < self.samples.len() {
                    Some(cursor + 1)
                } else {
                    None
                }
            });

        match claimed {
            Ok(index) => Ok(self.samples[index].clone()),
            Err(_) => Err(Error::Exhausted {
                dispensed: self.samples.len(),
            }),
        }
    }
}

impl Strategy for GridStrategy {
    fn goal(&self) -> Goal {
        GridStrategy::goal(self)
    }

    fn sample(&self) -> Result<Sample> {
        GridStrategy::sample(self)
    }

    fn remaining(&self) -> usize {
        GridStrategy::remaining(self)
    }
}

/// Cartesian product in odometer order: first parameter slowest.
fn cartesian_product(space: &SearchSpace) -> Vec<Sample> {
    let mut result: Vec<Sample> = vec![Sample::new()];
    for (name, values) in space.entries() {
        let mut next = Vec::with_capacity(result.len().saturating_mul(values.len()));
        for existing in &result {
            for value in values {
                let mut combo = existing.clone();
                combo.insert(name.to_string(), value.clone());
                next.push(combo);
            }
        }
        result = next;
    }
    result
}

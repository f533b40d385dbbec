//! Search-space materialization.
//!
//! [`grid_candidates`] expands one [`ParameterSpec`] into its ordered
//! candidate sequence; [`SearchSpace`] holds one sequence per parameter,
//! in declaration order, fully materialized up front so grid enumeration
//! is deterministic.
//!
//! # Rounding rule
//!
//! Integer candidates are computed in `f64`, rounded with [`f64::round`]
//! (ties away from zero), clamped to `[low, high]`, and consecutive
//! duplicates collapsed while preserving ascending order. Float candidates
//! are the raw linearly (or ln-) spaced values with no decimal truncation.
//! The same spec always yields the same sequence.

use crate::error::Result;
use crate::spec::{validate_parameters, ParameterSpec, Scale};
use crate::value::ParamValue;

/// Grid resolution used for float specs that carry no explicit `steps`.
pub const DEFAULT_FLOAT_STEPS: usize = 10;

/// Ordered mapping from parameter name to its candidate sequence.
///
/// Insertion order equals the input parameter order; keys are unique.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSpace {
    entries: Vec<(String, Vec<ParamValue>)>,
}

impl SearchSpace {
    /// Builds the search space by expanding every spec in order.
    ///
    /// # Errors
    ///
    /// Returns a spec-validation error for any malformed spec or duplicate
    /// parameter name. Nothing is expanded lazily; a successful build means
    /// sampling cannot fail on the specs.
    pub fn build(parameters: &[(String, ParameterSpec)]) -> Result<Self> {
        validate_parameters(parameters)?;
        let mut entries = Vec::with_capacity(parameters.len());
        for (name, spec) in parameters {
            entries.push((name.clone(), grid_candidates(name, spec)?));
        }
        Ok(Self { entries })
    }

    /// Number of parameters in the space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the space has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameter names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// The candidate sequence for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[ParamValue]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterates `(name, candidates)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[ParamValue])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Product of all candidate-sequence lengths (saturating).
    ///
    /// The empty space has one combination: the empty assignment.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.entries
            .iter()
            .fold(1usize, |acc, (_, values)| acc.saturating_mul(values.len()))
    }
}

/// Expands one spec into its ordered candidate sequence.
///
/// - `float`, linear: `steps` evenly spaced values, first = `low`,
///   last = `high`.
/// - `float`, log: `steps` values evenly spaced in ln-space.
/// - `int`: same spacing, rounded per the module-level rounding rule;
///   `steps` defaults to `high - low + 1` (every integer).
/// - `category`: the declared values verbatim.
///
/// # Errors
///
/// Returns the same validation errors as [`ParameterSpec::validate`].
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn grid_candidates(name: &str, spec: &ParameterSpec) -> Result<Vec<ParamValue>> {
    spec.validate(name)?;

    match spec {
        ParameterSpec::Float {
            low,
            high,
            steps,
            scale,
        } => {
            if (high - low).abs() < f64::EPSILON {
                return Ok(vec![ParamValue::Float(*low)]);
            }
            let steps = steps.unwrap_or(DEFAULT_FLOAT_STEPS);
            let points = match scale {
                Scale::Linear => linear_points(*low, *high, steps),
                Scale::Log => log_points(*low, *high, steps),
            };
            Ok(points.into_iter().map(ParamValue::Float).collect())
        }
        ParameterSpec::Int {
            low,
            high,
            steps,
            scale,
        } => {
            if low == high {
                return Ok(vec![ParamValue::Int(*low)]);
            }
            let steps = match steps {
                Some(s) => *s,
                // Enumerate every integer by default.
                None => usize::try_from(high.saturating_sub(*low).saturating_add(1))
                    .unwrap_or(usize::MAX),
            };
            let points = match scale {
                Scale::Linear => linear_points(*low as f64, *high as f64, steps),
                Scale::Log => log_points(*low as f64, *high as f64, steps),
            };
            let mut ints: Vec<i64> = points
                .into_iter()
                .map(|p| (p.round() as i64).clamp(*low, *high))
                .collect();
            ints.dedup();
            Ok(ints.into_iter().map(ParamValue::Int).collect())
        }
        ParameterSpec::Category { values } => {
            Ok(values.iter().cloned().map(ParamValue::Category).collect())
        }
    }
}

/// `n` evenly spaced values from `low` to `high` inclusive.
#[allow(clippy::cast_precision_loss)]
fn linear_points(low: f64, high: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![low];
    }
    let range = high - low;
    (0..n)
        .map(|i| {
            let fraction = i as f64 / (n - 1) as f64;
            low + fraction * range
        })
        .collect()
}

/// `n` values evenly spaced in ln-space from `low` to `high` inclusive.
#[allow(clippy::cast_precision_loss)]
fn log_points(low: f64, high: f64, n: usize) -> Vec<f64> {
    debug_assert!(low > 0.0, "log spacing requires a positive low bound");

    if n == 1 {
        return vec![low];
    }
    let log_low = low.ln();
    let log_range = high.ln() - log_low;
    (0..n)
        .map(|i| {
            let fraction = i as f64 / (n - 1) as f64;
            (log_low + fraction * log_range).exp()
        })
        .collect()
}

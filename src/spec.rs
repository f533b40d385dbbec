//! Declarative parameter specifications and their validation.
//!
//! A [`ParameterSpec`] describes one hyperparameter's domain: a numeric
//! range with optional step count and scale, or an explicit category list.
//! Specs usually arrive from a declarative configuration (serde, tagged by
//! `type`) but can also be built in code:
//!
//! ```
//! use hypertune::spec::ParameterSpec;
//!
//! let lr = ParameterSpec::float(1e-4, 1e-1).log_scale().steps(4);
//! let layers = ParameterSpec::int(0, 4);
//! let cell = ParameterSpec::category(["rnn", "gru", "lstm"]);
//! # let _ = (lr, layers, cell);
//! ```
//!
//! Validation is eager: every strategy constructor checks all specs before
//! the first sample is drawn, so a malformed spec can never fail a run
//! mid-way.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Numeric spacing of candidate values and random draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Evenly spaced values / uniform draws.
    #[default]
    Linear,
    /// Evenly spaced in ln-space / log-uniform draws. Requires `low > 0`.
    Log,
}

/// A declarative description of one hyperparameter's domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterSpec {
    /// A continuous range `[low, high]`.
    Float {
        /// Lower bound (inclusive).
        low: f64,
        /// Upper bound (inclusive).
        high: f64,
        /// Grid resolution; defaults to [`DEFAULT_FLOAT_STEPS`](crate::DEFAULT_FLOAT_STEPS).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        steps: Option<usize>,
        /// Spacing of grid candidates and random draws.
        #[serde(default)]
        scale: Scale,
    },
    /// An integer range `[low, high]` (both inclusive).
    Int {
        /// Lower bound (inclusive).
        low: i64,
        /// Upper bound (inclusive).
        high: i64,
        /// Grid resolution; defaults to `high - low + 1` (every integer).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        steps: Option<usize>,
        /// Spacing of grid candidates.
        #[serde(default)]
        scale: Scale,
    },
    /// An explicit, ordered list of candidate values.
    Category {
        /// The candidate values, used verbatim.
        values: Vec<serde_json::Value>,
    },
}

impl ParameterSpec {
    /// Creates a linear float spec over `[low, high]`.
    #[must_use]
    pub fn float(low: f64, high: f64) -> Self {
        Self::Float {
            low,
            high,
            steps: None,
            scale: Scale::Linear,
        }
    }

    /// Creates a linear int spec over `[low, high]` (both inclusive).
    #[must_use]
    pub fn int(low: i64, high: i64) -> Self {
        Self::Int {
            low,
            high,
            steps: None,
            scale: Scale::Linear,
        }
    }

    /// Creates a category spec from the given values, order preserved.
    #[must_use]
    pub fn category<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        Self::Category {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Switches a numeric spec to log scale. No effect on categories.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        if let Self::Float { scale, .. } | Self::Int { scale, .. } = &mut self {
            *scale = Scale::Log;
        }
        self
    }

    /// Sets the grid step count of a numeric spec. No effect on categories.
    #[must_use]
    pub fn steps(mut self, steps: usize) -> Self {
        if let Self::Float { steps: s, .. } | Self::Int { steps: s, .. } = &mut self {
            *s = Some(steps);
        }
        self
    }

    /// Validates this spec under the given parameter name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] for inverted numeric bounds,
    /// [`Error::InvalidLogBounds`] for a non-positive log lower bound,
    /// [`Error::InvalidSteps`] for a zero step count, and
    /// [`Error::EmptyValues`] for an empty category list.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self, name: &str) -> Result<()> {
        match self {
            Self::Float {
                low,
                high,
                steps,
                scale,
            } => {
                if low > high {
                    return Err(Error::InvalidBounds {
                        name: name.to_string(),
                        low: *low,
                        high: *high,
                    });
                }
                if *scale == Scale::Log && *low <= 0.0 {
                    return Err(Error::InvalidLogBounds {
                        name: name.to_string(),
                    });
                }
                check_steps(name, *steps)
            }
            Self::Int {
                low,
                high,
                steps,
                scale,
            } => {
                if low > high {
                    return Err(Error::InvalidBounds {
                        name: name.to_string(),
                        low: *low as f64,
                        high: *high as f64,
                    });
                }
                if *scale == Scale::Log && *low <= 0 {
                    return Err(Error::InvalidLogBounds {
                        name: name.to_string(),
                    });
                }
                check_steps(name, *steps)
            }
            Self::Category { values } => {
                if values.is_empty() {
                    return Err(Error::EmptyValues {
                        name: name.to_string(),
                    });
                }
                Ok(())
            }
        }
    }
}

fn check_steps(name: &str, steps: Option<usize>) -> Result<()> {
    if steps == Some(0) {
        return Err(Error::InvalidSteps {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Validates a full parameter list: unique names, every spec well-formed.
pub(crate) fn validate_parameters(parameters: &[(String, ParameterSpec)]) -> Result<()> {
    let mut seen = HashSet::with_capacity(parameters.len());
    for (name, spec) in parameters {
        if !seen.insert(name.as_str()) {
            return Err(Error::DuplicateParameter(name.clone()));
        }
        spec.validate(name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_specs_validate() {
        assert!(ParameterSpec::float(0.0, 1.0).validate("x").is_ok());
        assert!(ParameterSpec::float(1e-4, 1e-1)
            .log_scale()
            .steps(4)
            .validate("lr")
            .is_ok());
        assert!(ParameterSpec::int(0, 4).validate("layers").is_ok());
        assert!(ParameterSpec::category(["rnn", "gru"]).validate("cell").is_ok());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = ParameterSpec::float(1.0, 0.0).validate("x").unwrap_err();
        assert!(matches!(err, Error::InvalidBounds { .. }));

        let err = ParameterSpec::int(10, 5).validate("n").unwrap_err();
        assert!(matches!(err, Error::InvalidBounds { .. }));
    }

    #[test]
    fn log_scale_requires_positive_low() {
        let err = ParameterSpec::float(0.0, 1.0)
            .log_scale()
            .validate("lr")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidLogBounds { .. }));

        let err = ParameterSpec::int(0, 100)
            .log_scale()
            .validate("units")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidLogBounds { .. }));
    }

    #[test]
    fn zero_steps_rejected() {
        let err = ParameterSpec::float(0.0, 1.0)
            .steps(0)
            .validate("x")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSteps { .. }));
    }

    #[test]
    fn empty_category_rejected() {
        let err = ParameterSpec::category(Vec::<&str>::new())
            .validate("cell")
            .unwrap_err();
        assert!(matches!(err, Error::EmptyValues { .. }));
    }

    #[test]
    fn duplicate_names_rejected() {
        let params = vec![
            ("lr".to_string(), ParameterSpec::float(0.0, 1.0)),
            ("lr".to_string(), ParameterSpec::int(0, 4)),
        ];
        let err = validate_parameters(&params).unwrap_err();
        assert!(matches!(err, Error::DuplicateParameter(name) if name == "lr"));
    }

    #[test]
    fn specs_deserialize_from_tagged_config() {
        let spec: ParameterSpec = serde_json::from_str(
            r#"{"type": "float", "low": 0.0001, "high": 0.1, "steps": 4, "scale": "log"}"#,
        )
        .unwrap();
        assert_eq!(spec, ParameterSpec::float(0.0001, 0.1).log_scale().steps(4));

        let spec: ParameterSpec =
            serde_json::from_str(r#"{"type": "int", "low": 0, "high": 4}"#).unwrap();
        assert_eq!(spec, ParameterSpec::int(0, 4));

        let spec: ParameterSpec =
            serde_json::from_str(r#"{"type": "category", "values": ["rnn", "gru", "lstm"]}"#)
                .unwrap();
        assert_eq!(spec, ParameterSpec::category(["rnn", "gru", "lstm"]));
    }

    #[test]
    fn unknown_type_tag_fails_to_parse() {
        let parsed: core::result::Result<ParameterSpec, _> =
            serde_json::from_str(r#"{"type": "boolean", "low": 0, "high": 1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn builder_is_noop_on_categories() {
        let cell = ParameterSpec::category(["rnn"]);
        assert_eq!(cell.clone().log_scale().steps(3), cell);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a numeric spec's lower bound is greater than its upper bound.
    #[error("invalid spec for '{name}': low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The name of the offending parameter.
        name: String,
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when log scale is used with a non-positive lower bound.
    #[error("invalid spec for '{name}': low must be positive for log scale")]
    InvalidLogBounds {
        /// The name of the offending parameter.
        name: String,
    },

    /// Returned when a spec requests zero steps.
    #[error("invalid spec for '{name}': steps must be at least 1")]
    InvalidSteps {
        /// The name of the offending parameter.
        name: String,
    },

    /// Returned when a category spec has no values.
    #[error("invalid spec for '{name}': category values cannot be empty")]
    EmptyValues {
        /// The name of the offending parameter.
        name: String,
    },

    /// Returned when the same parameter name appears twice in one search.
    #[error("duplicate parameter name '{0}'")]
    DuplicateParameter(String),

    /// Returned when a goal string is neither "minimize" nor "maximize".
    #[error("unknown goal '{0}': expected \"minimize\" or \"maximize\"")]
    UnknownGoal(String),

    /// Returned when `sample()` is called after every available sample has
    /// been dispensed. This is the expected termination condition of a
    /// search loop, not a fault.
    #[error("search exhausted: all {dispensed} samples have been dispensed")]
    Exhausted {
        /// How many samples the strategy dispensed in total.
        dispensed: usize,
    },
}

impl Error {
    /// Returns `true` if this error signals normal search-loop termination
    /// rather than a malformed spec.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

pub type Result<T> = core::result::Result<T, Error>;

//! Core types shared across strategies.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The direction a downstream trial-comparison loop optimizes toward.
///
/// Sampling itself is goal-agnostic: strategies store the goal and expose
/// it, but never consult it when building or drawing from the search space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Lower objective values are better.
    Minimize,
    /// Higher objective values are better.
    Maximize,
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimize" => Ok(Self::Minimize),
            "maximize" => Ok(Self::Maximize),
            other => Err(Error::UnknownGoal(other.to_string())),
        }
    }
}

impl core::fmt::Display for Goal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Minimize => write!(f, "minimize"),
            Self::Maximize => write!(f, "maximize"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_parses_exact_strings_only() {
        assert_eq!("minimize".parse::<Goal>().unwrap(), Goal::Minimize);
        assert_eq!("maximize".parse::<Goal>().unwrap(), Goal::Maximize);
        assert!(matches!(
            "Minimize".parse::<Goal>(),
            Err(Error::UnknownGoal(_))
        ));
        assert!(matches!("best".parse::<Goal>(), Err(Error::UnknownGoal(_))));
    }

    #[test]
    fn goal_display_round_trips() {
        for goal in [Goal::Minimize, Goal::Maximize] {
            assert_eq!(goal.to_string().parse::<Goal>().unwrap(), goal);
        }
    }

    #[test]
    fn goal_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&Goal::Maximize).unwrap(),
            "\"maximize\""
        );
        let goal: Goal = serde_json::from_str("\"minimize\"").unwrap();
        assert_eq!(goal, Goal::Minimize);
    }
}

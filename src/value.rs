//! Concrete parameter values produced by sampling.

use serde::{Deserialize, Serialize};

/// One concrete value drawn for a parameter.
///
/// Category values carry the declared JSON value verbatim, so a category
/// spec over strings yields exactly those strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// An integer parameter value.
    Int(i64),
    /// A floating-point parameter value.
    Float(f64),
    /// A categorical parameter value.
    Category(serde_json::Value),
}

impl ParamValue {
    /// Returns the numeric value as `f64`, widening integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            Self::Category(_) => None,
        }
    }

    /// Returns the integer value, if this is an `Int`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the category value as a string slice, if it is a JSON string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Category(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl core::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Category(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_serde_distinguishes_kinds() {
        let int: ParamValue = serde_json::from_str("3").unwrap();
        assert_eq!(int, ParamValue::Int(3));

        let float: ParamValue = serde_json::from_str("0.25").unwrap();
        assert_eq!(float, ParamValue::Float(0.25));

        let cat: ParamValue = serde_json::from_str("\"gru\"").unwrap();
        assert_eq!(cat.as_str(), Some("gru"));
    }

    #[test]
    fn accessors_are_kind_checked() {
        assert_eq!(ParamValue::Int(4).as_f64(), Some(4.0));
        assert_eq!(ParamValue::Float(0.1).as_i64(), None);
        assert_eq!(ParamValue::Float(0.1).as_str(), None);
    }

    #[test]
    fn display_is_bare() {
        assert_eq!(ParamValue::Int(7).to_string(), "7");
        assert_eq!(ParamValue::Float(0.5).to_string(), "0.5");
        assert_eq!(
            ParamValue::Category(serde_json::json!("lstm")).to_string(),
            "\"lstm\""
        );
    }
}

//! Numeric coercion for comparison groups.
//!
//! Claim values and thresholds may be serialized as numbers or as numeric
//! strings. Integers keep their exact value; everything else is
//! normalized to `f64`. Two integers always compare exactly, so values
//! above 2^53 that share an `f64` representation stay distinct.
//! Anything that does not normalize to a finite number is not comparable.

use std::cmp::Ordering;

use serde_json::Value;

/// A coerced claim value or threshold.
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    Integer(i128),
    Float(f64),
}

impl Numeric {
    /// Lossy view used when either side of a comparison is fractional.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Coerce a claim value or threshold to a finite number.
///
/// - integer numbers, and strings of decimal digits with an optional sign,
///   are kept exact
/// - other numbers are used as `f64`
/// - other strings are parsed as decimal floating point, without trimming
/// - empty or non-numeric strings, `NaN`/`inf` spellings, booleans, null,
///   arrays and objects yield `None`
pub fn coerce_number(value: &Value) -> Option<Numeric> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Numeric::Integer(i128::from(i)))
            } else if let Some(u) = n.as_u64() {
                Some(Numeric::Integer(i128::from(u)))
            } else {
                finite(n.as_f64()?)
            }
        }
        Value::String(s) => match s.parse::<i128>() {
            Ok(i) => Some(Numeric::Integer(i)),
            Err(_) => finite(s.parse::<f64>().ok()?),
        },
        _ => None,
    }
}

fn finite(number: f64) -> Option<Numeric> {
    number.is_finite().then_some(Numeric::Float(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TWO_POW_53: u64 = 9_007_199_254_740_992;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(coerce_number(&json!(9.5)), Some(Numeric::Float(9.5)));
        assert_eq!(coerce_number(&json!(8)), Some(Numeric::Integer(8)));
        assert_eq!(coerce_number(&json!(-3)), Some(Numeric::Integer(-3)));
        assert_eq!(coerce_number(&json!(0)), Some(Numeric::Integer(0)));
        assert_eq!(
            coerce_number(&json!(u64::MAX)),
            Some(Numeric::Integer(i128::from(u64::MAX)))
        );
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(coerce_number(&json!("9.5")), Some(Numeric::Float(9.5)));
        assert_eq!(coerce_number(&json!("8")), Some(Numeric::Integer(8)));
        assert_eq!(coerce_number(&json!("-0.25")), Some(Numeric::Float(-0.25)));
        assert_eq!(coerce_number(&json!("1e3")), Some(Numeric::Float(1000.0)));
    }

    #[test]
    fn test_string_and_number_same_magnitude() {
        assert_eq!(coerce_number(&json!("9.5")), coerce_number(&json!(9.5)));
        assert_eq!(coerce_number(&json!("8")), coerce_number(&json!(8)));
        assert_eq!(coerce_number(&json!("8")), coerce_number(&json!(8.0)));
    }

    #[test]
    fn test_large_integers_stay_distinct() {
        let below = coerce_number(&json!(TWO_POW_53)).unwrap();
        let above = coerce_number(&json!(TWO_POW_53 + 1)).unwrap();
        assert!(below < above);
        assert_ne!(below, above);

        let below = coerce_number(&json!(TWO_POW_53.to_string())).unwrap();
        let above = coerce_number(&json!((TWO_POW_53 + 1).to_string())).unwrap();
        assert!(below < above);
    }

    #[test]
    fn test_mixed_integer_and_float_ordering() {
        let eight = Numeric::Integer(8);
        assert!(eight < Numeric::Float(8.6));
        assert!(eight > Numeric::Float(7.9));
        assert_eq!(eight, Numeric::Float(8.0));
    }

    #[test]
    fn test_non_numeric_strings() {
        assert_eq!(coerce_number(&json!("")), None);
        assert_eq!(coerce_number(&json!("none")), None);
        assert_eq!(coerce_number(&json!("9.5abc")), None);
        assert_eq!(coerce_number(&json!(" 9.5")), None);
        assert_eq!(coerce_number(&json!(" 9")), None);
    }

    #[test]
    fn test_non_finite_strings() {
        assert_eq!(coerce_number(&json!("NaN")), None);
        assert_eq!(coerce_number(&json!("inf")), None);
        assert_eq!(coerce_number(&json!("-infinity")), None);
    }

    #[test]
    fn test_other_shapes() {
        assert_eq!(coerce_number(&json!(null)), None);
        assert_eq!(coerce_number(&json!(true)), None);
        assert_eq!(coerce_number(&json!([8.6])), None);
        assert_eq!(coerce_number(&json!({"value": 8.6})), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Numeric::Integer(9_007_199_254_740_993).to_string(), "9007199254740993");
        assert_eq!(Numeric::Float(8.6).to_string(), "8.6");
    }
}

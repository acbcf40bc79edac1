//! Comparison operator registry.
//!
//! Every constraint group other than `claims` names one of these
//! operators. Each entry decides, from how the coerced claim value orders
//! against the coerced threshold, whether the constraint holds.
//! Registering a new group means adding one entry to [`OPERATORS`].

use std::cmp::Ordering;

use crate::coerce::Numeric;

/// Name of the set-membership group. Not a comparison operator.
pub const CLAIMS_GROUP: &str = "claims";

pub const GTE: &str = "gte";
pub const GT: &str = "gt";
pub const LTE: &str = "lte";
pub const LT: &str = "lt";

/// A registered comparison operator.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    /// Group name used as the policy key.
    pub name: &'static str,
    /// Mathematical symbol, for diagnostics.
    pub symbol: &'static str,
    accepts: fn(Ordering) -> bool,
}

impl Operator {
    /// Apply the operator as `value <op> threshold`.
    ///
    /// Unordered operands never satisfy an operator.
    pub fn holds(&self, value: Numeric, threshold: Numeric) -> bool {
        value
            .partial_cmp(&threshold)
            .map_or(false, |ordering| (self.accepts)(ordering))
    }
}

fn greater_or_equal(ordering: Ordering) -> bool {
    ordering != Ordering::Less
}

fn greater(ordering: Ordering) -> bool {
    ordering == Ordering::Greater
}

fn less_or_equal(ordering: Ordering) -> bool {
    ordering != Ordering::Greater
}

fn less(ordering: Ordering) -> bool {
    ordering == Ordering::Less
}

static OPERATORS: &[Operator] = &[
    Operator {
        name: GTE,
        symbol: ">=",
        accepts: greater_or_equal,
    },
    Operator {
        name: GT,
        symbol: ">",
        accepts: greater,
    },
    Operator {
        name: LTE,
        symbol: "<=",
        accepts: less_or_equal,
    },
    Operator {
        name: LT,
        symbol: "<",
        accepts: less,
    },
];

/// Find the operator registered under `name`.
pub fn lookup(name: &str) -> Option<&'static Operator> {
    OPERATORS.iter().find(|op| op.name == name)
}

/// Returns true if `name` is a registered comparison group.
pub fn is_registered(name: &str) -> bool {
    lookup(name).is_some()
}

/// All registered operators, in registration order.
pub fn all() -> &'static [Operator] {
    OPERATORS
}

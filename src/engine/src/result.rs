//! Validation result returned by the evaluator.

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a key release policy against attestation claims.
///
/// Callers must treat anything other than `success == true` as deny.
/// `reason` and `violations` are diagnostics only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether every declared constraint was satisfied.
    pub success: bool,
    /// Human-readable summary of why validation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Failing sub-checks (empty if passed).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<PolicyViolation>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn pass() -> Self {
        Self {
            success: true,
            reason: None,
            violations: Vec::new(),
        }
    }

    /// Create a result from a list of violations.
    pub fn from_violations(violations: Vec<PolicyViolation>) -> Self {
        let reason = if violations.is_empty() {
            None
        } else {
            Some(
                violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        };
        Self {
            success: violations.is_empty(),
            reason,
            violations,
        }
    }

    /// True unless the policy was explicitly satisfied.
    pub fn is_denied(&self) -> bool {
        !self.success
    }
}

/// Why a sub-check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// The claim is not present in the attestation.
    MissingClaim,
    /// The claim is present but not one of the acceptable values.
    NotAllowed,
    /// The claim value has a shape the group cannot compare.
    NotComparable,
    /// The policy threshold is not a number or numeric string.
    InvalidThreshold,
    /// Both sides are numeric but the comparison does not hold.
    Unsatisfied,
    /// The group names no registered operator.
    UnknownOperator,
}

/// A specific sub-check failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyViolation {
    /// Constraint group (`claims`, `gte`, ...).
    pub group: String,
    /// Claim name the sub-check referenced.
    pub claim: String,
    pub kind: ViolationKind,
    /// Human-readable description of the violation.
    pub reason: String,
}

impl PolicyViolation {
    pub fn new(
        group: impl Into<String>,
        claim: impl Into<String>,
        kind: ViolationKind,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            claim: claim.into(),
            kind,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.group, self.claim, self.reason)
    }
}

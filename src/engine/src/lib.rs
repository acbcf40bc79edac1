//! A3S KRP Engine - Key Release Policy evaluation.
//!
//! Decides whether verified attestation claims satisfy an operator-declared
//! key release policy. The evaluator is total and deny-by-default: every
//! unmet, missing, or non-comparable constraint yields `success = false`.
//! Structural problems with policy documents are rejected earlier by the
//! [`loader`] with a [`KrpError`](a3s_krp_core::KrpError).
//!
//! ```
//! use a3s_krp_engine::{validate, AttestationClaims, KeyReleasePolicy};
//!
//! let policy = KeyReleasePolicy::builder("snp")
//!     .allow("x-ms-attestation-type", ["sevsnpvm"])
//!     .gte("x-ms-sevsnpvm-snpfw-svn", 8)
//!     .build();
//! let claims = AttestationClaims::new()
//!     .with("x-ms-attestation-type", "sevsnpvm")
//!     .with("x-ms-sevsnpvm-snpfw-svn", "10");
//!
//! assert!(validate(&policy, &claims).success);
//! ```

pub mod coerce;
pub mod evaluator;
pub mod loader;
pub mod model;
pub mod operators;
pub mod result;

// Re-export common types
pub use a3s_krp_core::{EvaluationMode, KrpConfig, KrpError, Result};
pub use coerce::{coerce_number, Numeric};
pub use evaluator::{evaluate, evaluate_with, validate, EvaluationOptions};
pub use loader::{
    claims_from_value, load_claims, load_policy, parse_claims, parse_policy, policy_from_value,
    DocumentFormat,
};
pub use model::{AllowedValues, AttestationClaims, KeyReleasePolicy, PolicyBuilder, ThresholdGroup};
pub use operators::Operator;
pub use result::{PolicyViolation, ValidationResult, ViolationKind};

/// A3S KRP Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

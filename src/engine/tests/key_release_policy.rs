//! Key release policy scenarios for SEV-SNP attestation claims.

use a3s_krp_core::claims::{ATTESTATION_TYPE, ATTESTATION_TYPE_SEVSNPVM};
use a3s_krp_engine::{
    evaluate_with, parse_policy, validate, AttestationClaims, DocumentFormat, EvaluationMode,
    EvaluationOptions, KeyReleasePolicy, ViolationKind,
};
use serde_json::json;

const NUMBER: &str = "x-ms-number";

fn policy(value: serde_json::Value) -> KeyReleasePolicy {
    parse_policy(&value.to_string(), DocumentFormat::Json).unwrap()
}

fn claims(value: serde_json::Value) -> AttestationClaims {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_attestation_type_accepted() {
    let policy = policy(json!({
        "type": "",
        "claims": { "x-ms-attestation-type": ["sevsnpvm"] }
    }));
    let result = validate(&policy, &claims(json!({ "x-ms-attestation-type": "sevsnpvm" })));
    assert!(result.success);
    assert!(result.reason.is_none());
}

#[test]
fn test_attestation_type_any_of() {
    let policy = KeyReleasePolicy::builder("")
        .allow(ATTESTATION_TYPE, [ATTESTATION_TYPE_SEVSNPVM, "none"])
        .build();
    for value in ["sevsnpvm", "none"] {
        let claims = AttestationClaims::new().with(ATTESTATION_TYPE, value);
        assert!(validate(&policy, &claims).success, "{value} should be accepted");
    }
    let claims = AttestationClaims::new().with(ATTESTATION_TYPE, "tdxvm");
    assert!(!validate(&policy, &claims).success);
}

#[test]
fn test_gte_equal_passes() {
    let policy = policy(json!({
        "type": "",
        "claims": { "x-ms-attestation-type": ["sevsnpvm"] },
        "gte": { "x-ms-number": 8.6 }
    }));
    let claims = claims(json!({ "x-ms-attestation-type": "sevsnpvm", "x-ms-number": 8.6 }));
    assert!(validate(&policy, &claims).success);
}

#[test]
fn test_gte_smaller_fails() {
    let policy = policy(json!({
        "type": "",
        "claims": { "x-ms-attestation-type": ["sevsnpvm"] },
        "gte": { "x-ms-number": 8.6 }
    }));
    let claims = claims(json!({ "x-ms-attestation-type": "sevsnpvm", "x-ms-number": 8 }));
    let result = validate(&policy, &claims);
    assert!(!result.success);
    assert_eq!(result.violations[0].group, "gte");
    assert_eq!(result.violations[0].kind, ViolationKind::Unsatisfied);
}

#[test]
fn test_gte_missing_claim_fails() {
    let policy = policy(json!({
        "type": "",
        "claims": { "x-ms-attestation-type": ["sevsnpvm"] },
        "gte": { "x-ms-number": 8.6 }
    }));
    let result = validate(&policy, &claims(json!({ "x-ms-attestation-type": "sevsnpvm" })));
    assert!(!result.success);
    assert_eq!(result.violations[0].claim, NUMBER);
    assert_eq!(result.violations[0].kind, ViolationKind::MissingClaim);
}

#[test]
fn test_empty_attestation_type_fails() {
    let policy = policy(json!({
        "type": "",
        "claims": { "x-ms-attestation-type": ["sevsnpvm"] },
        "gte": { "x-ms-number": 8.6 }
    }));
    let result = validate(&policy, &claims(json!({ "x-ms-attestation-type": "" })));
    assert!(!result.success);
    assert_eq!(result.violations[0].group, "claims");
}

#[test]
fn test_gt_greater_passes() {
    let policy = policy(json!({
        "type": "",
        "claims": { "x-ms-attestation-type": ["sevsnpvm"] },
        "gt": { "x-ms-number": 8.6 }
    }));
    let claims = claims(json!({ "x-ms-attestation-type": "sevsnpvm", "x-ms-number": 9.5 }));
    assert!(validate(&policy, &claims).success);
}

#[test]
fn test_gt_string_claim_passes() {
    let policy = policy(json!({
        "type": "",
        "claims": { "x-ms-attestation-type": ["sevsnpvm"] },
        "gt": { "x-ms-number": 8.6 }
    }));
    let claims = claims(json!({ "x-ms-attestation-type": "sevsnpvm", "x-ms-number": "9.5" }));
    assert!(validate(&policy, &claims).success);
}

#[test]
fn test_gt_string_threshold_and_claim_passes() {
    let policy = policy(json!({
        "type": "",
        "claims": { "x-ms-attestation-type": ["sevsnpvm"] },
        "gt": { "x-ms-number": "8.6" }
    }));
    let claims = claims(json!({ "x-ms-attestation-type": "sevsnpvm", "x-ms-number": "9.5" }));
    assert!(validate(&policy, &claims).success);
}

#[test]
fn test_gt_equal_fails() {
    let policy = policy(json!({
        "type": "",
        "claims": { "x-ms-attestation-type": ["sevsnpvm"] },
        "gt": { "x-ms-number": 8.6 }
    }));
    let claims = claims(json!({ "x-ms-attestation-type": "sevsnpvm", "x-ms-number": 8.6 }));
    assert!(!validate(&policy, &claims).success);
}

#[test]
fn test_gt_equal_across_representations_fails() {
    let policy = policy(json!({ "type": "", "gt": { "x-ms-number": "8.6" } }));
    let claims = claims(json!({ "x-ms-number": 8.6 }));
    assert!(!validate(&policy, &claims).success);
}

#[test]
fn test_gt_missing_claim_fails() {
    let policy = policy(json!({
        "type": "",
        "claims": { "x-ms-attestation-type": ["sevsnpvm"] },
        "gt": { "x-ms-number": 8.6 }
    }));
    let result = validate(&policy, &claims(json!({ "x-ms-attestation-type": "sevsnpvm" })));
    assert!(!result.success);
    assert_eq!(result.violations[0].kind, ViolationKind::MissingClaim);
}

#[test]
fn test_empty_groups_are_vacuous() {
    let policy = policy(json!({ "type": "", "claims": {}, "gte": {}, "gt": {} }));
    assert!(validate(&policy, &AttestationClaims::new()).success);
}

#[test]
fn test_snp_tcb_floor() {
    let policy = policy(json!({
        "type": "azure-snp",
        "claims": {
            "x-ms-attestation-type": ["sevsnpvm"],
            "x-ms-compliance-status": ["azure-compliant-cvm"]
        },
        "gte": {
            "x-ms-sevsnpvm-bootloader-svn": 3,
            "x-ms-sevsnpvm-snpfw-svn": "8",
            "x-ms-sevsnpvm-microcode-svn": 115
        },
        "lte": { "x-ms-sevsnpvm-vmpl": 0 }
    }));
    let mut report = claims(json!({
        "x-ms-attestation-type": "sevsnpvm",
        "x-ms-compliance-status": "azure-compliant-cvm",
        "x-ms-sevsnpvm-bootloader-svn": 3,
        "x-ms-sevsnpvm-snpfw-svn": 8,
        "x-ms-sevsnpvm-microcode-svn": "209",
        "x-ms-sevsnpvm-vmpl": 0,
        "x-ms-sevsnpvm-is-debuggable": false
    }));
    assert!(validate(&policy, &report).success);

    report.insert("x-ms-sevsnpvm-microcode-svn", 100);
    report.insert("x-ms-sevsnpvm-vmpl", 2);
    let options = EvaluationOptions {
        mode: EvaluationMode::CollectAll,
    };
    let result = evaluate_with(&policy, &report, options);
    assert!(!result.success);
    let failed: Vec<&str> = result.violations.iter().map(|v| v.claim.as_str()).collect();
    assert_eq!(failed, vec!["x-ms-sevsnpvm-microcode-svn", "x-ms-sevsnpvm-vmpl"]);
}

#[test]
fn test_result_json_shape() {
    let policy = policy(json!({ "type": "", "gte": { "x-ms-number": 8.6 } }));
    let result = validate(&policy, &AttestationClaims::new());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["reason"], "gte[x-ms-number]: claim not present in attestation");
}

#[test]
fn test_integers_beyond_f64_precision_compare_exactly() {
    let threshold: u64 = 9_007_199_254_740_993;
    let claim: u64 = 9_007_199_254_740_992;

    for (document, report) in [
        (
            json!({ "type": "", "gte": { "x-ms-number": threshold } }),
            json!({ "x-ms-number": claim }),
        ),
        (
            json!({ "type": "", "gte": { "x-ms-number": threshold.to_string() } }),
            json!({ "x-ms-number": claim.to_string() }),
        ),
    ] {
        let result = validate(&policy(document), &claims(report));
        assert!(!result.success);
        assert_eq!(result.violations[0].kind, ViolationKind::Unsatisfied);
        assert_eq!(
            result.violations[0].reason,
            "9007199254740992 >= 9007199254740993 does not hold"
        );
    }

    let lte = policy(json!({ "type": "", "lte": { "x-ms-number": claim } }));
    assert!(!validate(&lte, &claims(json!({ "x-ms-number": threshold }))).success);
    assert!(validate(&lte, &claims(json!({ "x-ms-number": claim.to_string() }))).success);
}

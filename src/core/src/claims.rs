//! Well-known SEV-SNP attestation claim names.
//!
//! The attestation verification service flattens a verified SNP report
//! into a claims map keyed by these names. Key release policies reference
//! them in their `claims` and comparison groups.

/// Attestation technology that produced the report.
pub const ATTESTATION_TYPE: &str = "x-ms-attestation-type";

/// Value of [`ATTESTATION_TYPE`] for AMD SEV-SNP confidential VMs.
pub const ATTESTATION_TYPE_SEVSNPVM: &str = "sevsnpvm";

/// Compliance status assigned by the attestation service.
pub const COMPLIANCE_STATUS: &str = "x-ms-compliance-status";

/// Claims schema version.
pub const SCHEMA_VERSION: &str = "x-ms-ver";

/// Whether the guest was launched with debugging allowed.
pub const SEVSNP_IS_DEBUGGABLE: &str = "x-ms-sevsnpvm-is-debuggable";

/// SHA-384 launch measurement, hex-encoded.
pub const SEVSNP_LAUNCH_MEASUREMENT: &str = "x-ms-sevsnpvm-launchmeasurement";

/// Host-provided data bound into the report at launch, hex-encoded.
pub const SEVSNP_HOST_DATA: &str = "x-ms-sevsnpvm-hostdata";

/// Guest security version number.
pub const SEVSNP_GUEST_SVN: &str = "x-ms-sevsnpvm-guestsvn";

/// Boot loader security version number.
pub const SEVSNP_BOOTLOADER_SVN: &str = "x-ms-sevsnpvm-bootloader-svn";

/// PSP (TEE) firmware security version number.
pub const SEVSNP_TEE_SVN: &str = "x-ms-sevsnpvm-tee-svn";

/// SNP firmware security version number.
pub const SEVSNP_SNPFW_SVN: &str = "x-ms-sevsnpvm-snpfw-svn";

/// CPU microcode security version number.
pub const SEVSNP_MICROCODE_SVN: &str = "x-ms-sevsnpvm-microcode-svn";

/// Virtual machine privilege level that requested the report.
pub const SEVSNP_VMPL: &str = "x-ms-sevsnpvm-vmpl";

/// Every claim name in this module.
pub const ALL: &[&str] = &[
    ATTESTATION_TYPE,
    COMPLIANCE_STATUS,
    SCHEMA_VERSION,
    SEVSNP_IS_DEBUGGABLE,
    SEVSNP_LAUNCH_MEASUREMENT,
    SEVSNP_HOST_DATA,
    SEVSNP_GUEST_SVN,
    SEVSNP_BOOTLOADER_SVN,
    SEVSNP_TEE_SVN,
    SEVSNP_SNPFW_SVN,
    SEVSNP_MICROCODE_SVN,
    SEVSNP_VMPL,
];

/// Returns true if `name` is one of the well-known claim names.
pub fn is_well_known(name: &str) -> bool {
    ALL.contains(&name)
}

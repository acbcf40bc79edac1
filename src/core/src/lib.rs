//! A3S KRP Core - Key Release Policy Foundational Types
//!
//! This module provides the error taxonomy, configuration, and well-known
//! attestation claim names shared by the key release policy engine and
//! its command-line front end.

pub mod claims;
pub mod config;
pub mod error;
pub mod format;

// Re-export commonly used types
pub use config::{EvaluationMode, KrpConfig, LogLevel};
pub use error::{KrpError, Result};
pub use format::DocumentFormat;

/// A3S KRP version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

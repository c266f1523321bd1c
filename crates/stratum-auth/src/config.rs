//! Authorization engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the [`Authorizer`](crate::Authorizer).
///
/// # Example (TOML)
///
/// ```toml
/// [authz.audit]
/// log_allowed = true
/// log_denied = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthzConfig {
    /// Audit configuration.
    pub audit: AuditConfig,
}

/// Controls which authorization decisions are written to the audit sink.
///
/// Both outcomes are recorded by default; denials are the more
/// security-relevant signal, so disable `log_denied` with care.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Record allowed decisions.
    pub log_allowed: bool,

    /// Record denied decisions.
    pub log_denied: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_allowed: true,
            log_denied: true,
        }
    }
}

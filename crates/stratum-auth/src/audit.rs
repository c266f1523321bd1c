//! Audit records for authorization decisions.
//!
//! Every decision the [`Authorizer`](crate::Authorizer) makes can be written
//! to an [`AuditSink`]. The sink is a storage trait: production backends
//! persist entries to their audit store, while [`MemoryAuditSink`] keeps
//! them in memory for tests and embedders without a backend. A sink failure
//! surfaces as an error to the caller — decisions are never silently
//! un-audited.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use time::OffsetDateTime;

use stratum_core::{Action, AgentId, ResourcePath};

use crate::AuthzResult;
use crate::error::AuthzError;

/// A single authorization decision, as written to the audit store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// The acting agent.
    pub agent_id: AgentId,

    /// The requested action.
    pub action: Action,

    /// The requested resource.
    pub resource: ResourcePath,

    /// Whether the request was authorized.
    pub authorized: bool,

    /// When the decision was made.
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl AuditEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn new(
        agent_id: AgentId,
        action: Action,
        resource: ResourcePath,
        authorized: bool,
    ) -> Self {
        Self {
            agent_id,
            action,
            resource,
            authorized,
            recorded_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Storage operations for authorization audit entries.
///
/// Implementations handle the actual persistence; the engine only hands
/// over completed entries.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Record a decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails; the engine
    /// propagates it to the caller.
    async fn record(&self, entry: AuditEntry) -> AuthzResult<()>;
}

/// In-memory audit sink.
///
/// Keeps entries in insertion order behind a mutex. Intended for tests and
/// for embedders that have no audit backend.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded entries, in insertion order.
    pub fn entries(&self) -> Vec<AuditEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn record(&self, entry: AuditEntry) -> AuthzResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AuthzError::audit("audit sink mutex poisoned"))?;
        entries.push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(authorized: bool) -> AuditEntry {
        AuditEntry::new(
            AgentId::new("usr-1234567890123456").unwrap(),
            Action::parse("function:get").unwrap(),
            ResourcePath::parse("/account/acc-1/"),
            authorized,
        )
    }

    #[tokio::test]
    async fn test_memory_sink_records_in_order() {
        let sink = MemoryAuditSink::new();
        sink.record(entry(true)).await.unwrap();
        sink.record(entry(false)).await.unwrap();

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].authorized);
        assert!(!entries[1].authorized);
    }

    #[test]
    fn test_entry_serializes_wire_shape() {
        let json = serde_json::to_value(entry(true)).unwrap();
        assert_eq!(json["agentId"], "usr-1234567890123456");
        assert_eq!(json["action"], "function:get");
        assert_eq!(json["resource"], "/account/acc-1/");
        assert_eq!(json["authorized"], true);
        assert!(json["recordedAt"].is_string());
    }
}

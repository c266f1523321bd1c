//! The acting identity, resolved at request time.

use serde::{Deserialize, Serialize};

use stratum_core::{Action, AgentId, ResourcePath};

use crate::policy::statement::{AccessPolicy, Statement};

/// An agent's resolved state for a single evaluation: its id and a snapshot
/// of its access policy.
///
/// The engine is indifferent to whether the agent is a user or a client,
/// and it never fetches or caches policy itself — the caller loads the
/// agent record and hands the snapshot in. If a grant is revoked while a
/// request built on an older snapshot is in flight, reconciling that is the
/// storage layer's concern, not this engine's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The agent's id, used only for diagnostics.
    pub id: AgentId,

    /// Snapshot of the agent's access policy.
    pub access: AccessPolicy,
}

impl Principal {
    /// Create a principal from an agent id and its policy snapshot.
    #[must_use]
    pub fn new(id: AgentId, access: AccessPolicy) -> Self {
        Self { id, access }
    }

    /// The built-in root agent: `*` on `/`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            id: AgentId::root(),
            access: AccessPolicy::new(vec![Statement::new(
                Action::Universal,
                ResourcePath::root(),
            )]),
        }
    }

    /// Returns `true` if some held statement covers `action` on `resource`.
    ///
    /// The decision is a union over the statement list — order never changes
    /// the outcome — but the scan short-circuits on the first match.
    #[must_use]
    pub fn is_authorized(&self, action: &Action, resource: &ResourcePath) -> bool {
        self.access
            .allow
            .iter()
            .any(|statement| statement.covers(action, resource))
    }

    /// The first statement in `statements` (input order) that no held
    /// statement contains, or `None` if the whole set could be granted.
    #[must_use]
    pub fn first_unauthorized_grant<'a>(
        &self,
        statements: &'a [Statement],
    ) -> Option<&'a Statement> {
        statements.iter().find(|candidate| {
            !self
                .access
                .allow
                .iter()
                .any(|held| held.contains(candidate))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement(action: &str, resource: &str) -> Statement {
        Statement::parse(action, resource).unwrap()
    }

    fn principal(statements: Vec<Statement>) -> Principal {
        Principal::new(
            AgentId::new("usr-1234567890123456").unwrap(),
            AccessPolicy::new(statements),
        )
    }

    #[test]
    fn test_empty_policy_authorizes_nothing() {
        let p = principal(vec![]);
        assert!(!p.is_authorized(
            &Action::parse("function:get").unwrap(),
            &ResourcePath::root()
        ));
    }

    #[test]
    fn test_statement_order_is_irrelevant() {
        let a = statement("function:get", "/account/a/");
        let b = statement("issuer:*", "/account/a/");
        let action = Action::parse("issuer:get").unwrap();
        let resource = ResourcePath::issuer("a", "i1");

        let forward = principal(vec![a.clone(), b.clone()]);
        let reverse = principal(vec![b, a]);
        assert!(forward.is_authorized(&action, &resource));
        assert!(reverse.is_authorized(&action, &resource));
    }

    #[test]
    fn test_first_unauthorized_grant_reports_in_input_order() {
        let p = principal(vec![statement("function:*", "/account/a/subscription/s/")]);

        let ok = statement("function:get", "/account/a/subscription/s/boundary/b/");
        let bad_resource = statement("function:get", "/account/a/");
        let bad_action = statement("storage:get", "/account/a/subscription/s/");

        assert!(p.first_unauthorized_grant(&[]).is_none());
        assert!(p.first_unauthorized_grant(&[ok.clone()]).is_none());

        let grants = [ok.clone(), bad_resource.clone(), bad_action.clone()];
        let offender = p.first_unauthorized_grant(&grants).unwrap();
        assert_eq!(offender, &bad_resource);

        let grants = [ok, bad_action.clone(), bad_resource];
        let offender = p.first_unauthorized_grant(&grants).unwrap();
        assert_eq!(offender, &bad_action);
    }

    #[test]
    fn test_root_principal() {
        let root = Principal::root();
        assert_eq!(root.id.as_str(), "root-user");
        assert!(root.is_authorized(
            &Action::parse("storage:delete").unwrap(),
            &ResourcePath::storage("a", "s", "data")
        ));
        assert!(
            root.first_unauthorized_grant(&[statement("*", "/"), statement("user:init", "/account/a/")])
                .is_none()
        );
    }
}

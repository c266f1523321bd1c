//! Access statements and policies.
//!
//! A [`Statement`] grants one action (possibly wildcarded) over one resource
//! subtree. An [`AccessPolicy`] is the list of statements attached to an
//! agent; the empty list is a valid, fully-restrictive policy.
//!
//! [`Statement::contains`] is the single containment predicate the whole
//! engine is built on: the authorizer asks whether some held statement
//! contains the requested operation, and the grant guard asks whether some
//! held statement contains each statement being granted. Sharing one
//! predicate keeps the two checks from ever drifting apart.

use serde::{Deserialize, Serialize};

use stratum_core::{Action, CoreError, ResourcePath};

use crate::AuthzResult;

/// A single `{action, resource}` grant.
///
/// Statements are immutable values: policies are replaced wholesale on
/// update, never edited statement-by-statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// The granted action.
    pub action: Action,

    /// The root of the granted resource subtree.
    pub resource: ResourcePath,
}

impl Statement {
    /// Create a statement from already-typed parts.
    #[must_use]
    pub fn new(action: Action, resource: ResourcePath) -> Self {
        Self { action, resource }
    }

    /// Parse a statement from its wire strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the action string is malformed; resource strings
    /// always normalize.
    pub fn parse(action: &str, resource: &str) -> Result<Self, CoreError> {
        Ok(Self {
            action: Action::parse(action)?,
            resource: ResourcePath::parse(resource),
        })
    }

    /// Returns `true` if this statement authorizes `action` on `resource`.
    ///
    /// A statement covers exactly its own resource subtree: never a sibling
    /// or an ancestor of its resource.
    #[must_use]
    pub fn covers(&self, action: &Action, resource: &ResourcePath) -> bool {
        self.action.contains(action) && self.resource.contains(resource)
    }

    /// Returns `true` if this statement is at least as broad as `other`.
    ///
    /// Anything the holder of `other` could ever be authorized for, the
    /// holder of `self` already is — the test the grant guard applies to
    /// every statement being granted.
    #[must_use]
    pub fn contains(&self, other: &Statement) -> bool {
        self.covers(&other.action, &other.resource)
    }
}

/// The set of statements attached to an agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// The granted statements. Order carries no meaning for evaluation.
    #[serde(default)]
    pub allow: Vec<Statement>,
}

impl AccessPolicy {
    /// Create a policy from a statement list.
    #[must_use]
    pub fn new(allow: Vec<Statement>) -> Self {
        Self { allow }
    }

    /// The fully-restrictive policy with zero grants.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a policy from its persisted JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::InvalidPolicy`](crate::AuthzError::InvalidPolicy)
    /// if the document is not valid JSON or contains malformed statements.
    pub fn from_json(json: &str) -> AuthzResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the policy to its persisted JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> AuthzResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns `true` if the policy grants nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allow.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement(action: &str, resource: &str) -> Statement {
        Statement::parse(action, resource).unwrap()
    }

    #[test]
    fn test_covers_requires_both_dimensions() {
        let s = statement("function:get", "/account/a/subscription/s/boundary/b/function/f/");

        let action = Action::parse("function:get").unwrap();
        let other_action = Action::parse("function:put").unwrap();
        let resource = ResourcePath::function("a", "s", "b", "f");
        let boundary = ResourcePath::boundary("a", "s", "b");

        assert!(s.covers(&action, &resource));
        assert!(!s.covers(&other_action, &resource));
        assert!(!s.covers(&action, &boundary));
    }

    #[test]
    fn test_contains_matches_covers() {
        let broad = statement("function:*", "/account/a/subscription/s/");
        let narrow = statement("function:get", "/account/a/subscription/s/boundary/b/");

        assert!(broad.contains(&narrow));
        assert!(!narrow.contains(&broad));
        assert!(broad.contains(&broad));
    }

    #[test]
    fn test_statement_wire_shape() {
        let s = statement("function:get-log", "/account/a/subscription/s/boundary/b");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["action"], "function:get-log");
        assert_eq!(json["resource"], "/account/a/subscription/s/boundary/b/");
    }

    #[test]
    fn test_policy_from_json() {
        let policy = AccessPolicy::from_json(
            r#"{"allow":[{"action":"function:get","resource":"/account/a/"}]}"#,
        )
        .unwrap();
        assert_eq!(policy.allow.len(), 1);
        assert_eq!(policy.allow[0].action, Action::parse("function:get").unwrap());

        // missing allow defaults to the empty policy
        let empty = AccessPolicy::from_json("{}").unwrap();
        assert!(empty.is_empty());

        // malformed statements are rejected at parse time
        assert!(
            AccessPolicy::from_json(r#"{"allow":[{"action":"","resource":"/"}]}"#).is_err()
        );
    }

    #[test]
    fn test_policy_json_round_trip() {
        let policy = AccessPolicy::new(vec![
            statement("user:add", "/account/a/user/"),
            statement("*", "/"),
        ]);
        let back = AccessPolicy::from_json(&policy.to_json().unwrap()).unwrap();
        assert_eq!(back, policy);
    }
}

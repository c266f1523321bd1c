//! The authorization engine.
//!
//! [`Authorizer`] makes the two decisions the platform's API layer gates
//! every request on:
//!
//! - [`ensure_authorized`](Authorizer::ensure_authorized) — may this agent
//!   perform an action on a resource?
//! - [`ensure_can_grant`](Authorizer::ensure_can_grant) — may this agent
//!   attach a set of statements to an agent's access policy?
//!
//! The second is the privilege-escalation guard. It is deliberately stricter
//! than "would the grantor be authorized at that resource": every statement
//! being granted must be *contained* by a statement the grantor already
//! holds, in both action and resource, so the grantee can never become
//! authorized for anything the grantor is not. Holding the right to create
//! agents (`user:add`, `client:add`) confers no right to attach access.
//!
//! Decisions are pure functions of the supplied principal and request;
//! the engine holds no mutable state and is safe to share across request
//! handlers. Audit entries are written through the configured sink after
//! the decision is computed and never influence it.

use std::sync::Arc;

use stratum_core::{Action, ResourcePath};

use crate::AuthzResult;
use crate::audit::{AuditEntry, AuditSink};
use crate::config::AuthzConfig;
use crate::error::AuthzError;
use crate::policy::{AccessPolicy, Principal, Statement};

/// The platform authorization engine.
///
/// Cheap to clone; the audit sink is shared.
#[derive(Clone, Default)]
pub struct Authorizer {
    config: AuthzConfig,
    audit: Option<Arc<dyn AuditSink>>,
}

impl Authorizer {
    /// Create an engine with the given configuration and no audit sink.
    #[must_use]
    pub fn new(config: AuthzConfig) -> Self {
        Self {
            config,
            audit: None,
        }
    }

    /// Attach an audit sink; decisions are recorded through it.
    #[must_use]
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &AuthzConfig {
        &self.config
    }

    /// Require that `principal` may perform `action` on `resource`.
    ///
    /// The decision is recorded to the audit sink (subject to the audit
    /// config) for both outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::Unauthorized`] if no held statement covers the
    /// request, or [`AuthzError::Audit`] if the audit sink fails.
    pub async fn ensure_authorized(
        &self,
        principal: &Principal,
        action: &Action,
        resource: &ResourcePath,
    ) -> AuthzResult<()> {
        let authorized = principal.is_authorized(action, resource);
        self.record_decision(principal, action, resource, authorized)
            .await?;

        if authorized {
            tracing::debug!(
                agent_id = %principal.id,
                %action,
                %resource,
                "request authorized"
            );
            Ok(())
        } else {
            tracing::warn!(
                agent_id = %principal.id,
                %action,
                %resource,
                "request denied"
            );
            Err(AuthzError::unauthorized(
                principal.id.clone(),
                action.clone(),
                resource.clone(),
            ))
        }
    }

    /// Require that `principal` may grant every statement in `statements`.
    ///
    /// The set is judged atomically: one offending statement rejects the
    /// whole grant, and the error names the first offender in input order.
    /// The empty set is trivially grantable.
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::UnauthorizedToGrant`] naming the first
    /// statement not contained by any of the grantor's own statements.
    pub fn ensure_can_grant(
        &self,
        principal: &Principal,
        statements: &[Statement],
    ) -> AuthzResult<()> {
        match principal.first_unauthorized_grant(statements) {
            None => Ok(()),
            Some(offending) => {
                tracing::warn!(
                    agent_id = %principal.id,
                    action = %offending.action,
                    resource = %offending.resource,
                    "grant rejected"
                );
                Err(AuthzError::unauthorized_to_grant(
                    principal.id.clone(),
                    offending.action.clone(),
                    offending.resource.clone(),
                ))
            }
        }
    }

    /// Require that `claimed` is a subset of what `principal` already holds.
    ///
    /// Applied to inline permission claims presented in access tokens: an
    /// agent may narrow its own permissions for a request, never widen them.
    /// Each claimed statement is checked (and audited) as a request in its
    /// own right.
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::Unauthorized`] for the first claimed statement
    /// exceeding the principal's policy.
    pub async fn check_permission_subset(
        &self,
        principal: &Principal,
        claimed: &AccessPolicy,
    ) -> AuthzResult<()> {
        for statement in &claimed.allow {
            self.ensure_authorized(principal, &statement.action, &statement.resource)
                .await?;
        }
        Ok(())
    }

    async fn record_decision(
        &self,
        principal: &Principal,
        action: &Action,
        resource: &ResourcePath,
        authorized: bool,
    ) -> AuthzResult<()> {
        let Some(sink) = &self.audit else {
            return Ok(());
        };
        let wanted = if authorized {
            self.config.audit.log_allowed
        } else {
            self.config.audit.log_denied
        };
        if !wanted {
            return Ok(());
        }
        sink.record(AuditEntry::new(
            principal.id.clone(),
            action.clone(),
            resource.clone(),
            authorized,
        ))
        .await
    }
}

impl std::fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorizer")
            .field("config", &self.config)
            .field("audit", &self.audit.as_ref().map(|_| "<sink>"))
            .finish()
    }
}

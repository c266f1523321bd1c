//! Authorization error types.
//!
//! The two access-denial variants render the exact diagnostic text the API
//! layer surfaces verbatim to callers, naming the acting agent, the action,
//! and the resource involved in the denied request.

use std::fmt;

use stratum_core::{Action, AgentId, ResourcePath};

/// Errors that can occur during authorization operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// No statement in the agent's policy covers the requested action and
    /// resource.
    #[error(
        "The {} '{agent_id}' is not authorized to perform action '{action}' on resource '{resource}'",
        .agent_id.kind_label()
    )]
    Unauthorized {
        /// The acting agent.
        agent_id: AgentId,
        /// The action that was requested.
        action: Action,
        /// The resource the action targeted.
        resource: ResourcePath,
    },

    /// A statement being attached to an agent is not contained by any of the
    /// acting agent's own statements.
    #[error(
        "The {} '{agent_id}' is not authorized to grant access to perform the action '{action}' on resource '{resource}'",
        .agent_id.kind_label()
    )]
    UnauthorizedToGrant {
        /// The agent attempting the grant.
        agent_id: AgentId,
        /// The action of the first offending statement.
        action: Action,
        /// The resource of the first offending statement.
        resource: ResourcePath,
    },

    /// An access policy document could not be parsed.
    #[error("failed to parse access policy: {0}")]
    InvalidPolicy(#[from] serde_json::Error),

    /// The audit sink failed to record a decision.
    #[error("audit sink failure: {message}")]
    Audit {
        /// Description of the sink failure.
        message: String,
    },
}

impl AuthzError {
    /// Creates a new `Unauthorized` error.
    #[must_use]
    pub fn unauthorized(agent_id: AgentId, action: Action, resource: ResourcePath) -> Self {
        Self::Unauthorized {
            agent_id,
            action,
            resource,
        }
    }

    /// Creates a new `UnauthorizedToGrant` error.
    #[must_use]
    pub fn unauthorized_to_grant(
        agent_id: AgentId,
        action: Action,
        resource: ResourcePath,
    ) -> Self {
        Self::UnauthorizedToGrant {
            agent_id,
            action,
            resource,
        }
    }

    /// Creates a new `Audit` error.
    #[must_use]
    pub fn audit(message: impl Into<String>) -> Self {
        Self::Audit {
            message: message.into(),
        }
    }

    /// Returns `true` if this error is an access denial (as opposed to an
    /// operational failure).
    #[must_use]
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. } | Self::UnauthorizedToGrant { .. }
        )
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Unauthorized { .. } | Self::UnauthorizedToGrant { .. } => {
                ErrorCategory::Authorization
            }
            Self::InvalidPolicy(_) => ErrorCategory::Validation,
            Self::Audit { .. } => ErrorCategory::Infrastructure,
        }
    }

    /// The HTTP status the API layer maps this error to.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Unauthorized { .. } | Self::UnauthorizedToGrant { .. } => 403,
            Self::InvalidPolicy(_) => 400,
            Self::Audit { .. } => 500,
        }
    }
}

/// Categories of authorization errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Permission checks.
    Authorization,
    /// Input validation.
    Validation,
    /// Audit/storage failures.
    Infrastructure,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authorization => write!(f, "authorization"),
            Self::Validation => write!(f, "validation"),
            Self::Infrastructure => write!(f, "infrastructure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(s: &str) -> Action {
        Action::parse(s).unwrap()
    }

    #[test]
    fn test_unauthorized_message() {
        let err = AuthzError::unauthorized(
            AgentId::new("usr-1234567890123456").unwrap(),
            action("function:get"),
            ResourcePath::parse("/account/acc-1/subscription/sub-1/boundary/dev/function/f1/"),
        );
        assert_eq!(
            err.to_string(),
            "The user 'usr-1234567890123456' is not authorized to perform action \
             'function:get' on resource \
             '/account/acc-1/subscription/sub-1/boundary/dev/function/f1/'"
        );
    }

    #[test]
    fn test_unauthorized_to_grant_message() {
        let err = AuthzError::unauthorized_to_grant(
            AgentId::new("clt-1234567890123456").unwrap(),
            action("user:add"),
            ResourcePath::parse("/account/acc-1/user/"),
        );
        assert_eq!(
            err.to_string(),
            "The client 'clt-1234567890123456' is not authorized to grant access to \
             perform the action 'user:add' on resource '/account/acc-1/user/'"
        );
    }

    #[test]
    fn test_unknown_id_type_in_message() {
        let err = AuthzError::unauthorized(
            AgentId::new("root-user").unwrap(),
            action("*"),
            ResourcePath::root(),
        );
        assert!(err.to_string().starts_with("The <unknown id type> 'root-user'"));
    }

    #[test]
    fn test_categories_and_status() {
        let denial = AuthzError::unauthorized(
            AgentId::new("usr-1").unwrap(),
            action("function:get"),
            ResourcePath::root(),
        );
        assert!(denial.is_denial());
        assert_eq!(denial.category(), ErrorCategory::Authorization);
        assert_eq!(denial.http_status(), 403);

        let audit = AuthzError::audit("sink down");
        assert!(!audit.is_denial());
        assert_eq!(audit.category(), ErrorCategory::Infrastructure);
        assert_eq!(audit.http_status(), 500);

        let parse: AuthzError = serde_json::from_str::<serde_json::Value>("{ nope")
            .unwrap_err()
            .into();
        assert_eq!(parse.category(), ErrorCategory::Validation);
        assert_eq!(parse.http_status(), 400);
    }

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Authorization.to_string(), "authorization");
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
        assert_eq!(ErrorCategory::Infrastructure.to_string(), "infrastructure");
    }
}

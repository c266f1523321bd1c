//! # stratum-auth
//!
//! Authorization and policy engine for the Stratum platform.
//!
//! Every operation on the platform — deploying code, reading logs,
//! scheduling work, touching storage — is scoped to a tenancy path
//! (`/account/{id}/subscription/{id}/boundary/{id}/function/{id}/` and its
//! sibling trees) and gated on the acting agent's access policy: a list of
//! `{action, resource}` statements. This crate decides, given a snapshot of
//! that policy:
//!
//! - whether an agent may perform an action on a resource, and
//! - whether an agent may grant a set of statements to an agent — the
//!   privilege-escalation guard applied whenever an access policy is
//!   created or replaced.
//!
//! Both decisions reduce to one containment predicate
//! ([`Statement::contains`]): a grant covers a request (or another grant)
//! only when its action covers the requested action and its resource
//! subtree covers the requested resource.
//!
//! ## Modules
//!
//! - [`policy`] - statements, access policies, and principals
//! - [`engine`] - the [`Authorizer`] and grant guard
//! - [`audit`] - decision audit records and sinks
//! - [`config`] - engine configuration
//! - [`error`] - the authorization error taxonomy
//!
//! ## Example
//!
//! ```
//! use stratum_auth::{AccessPolicy, Authorizer, Principal, Statement};
//! use stratum_core::{Action, AgentId, ResourcePath};
//!
//! # tokio_test::block_on(async {
//! let authorizer = Authorizer::default();
//!
//! let agent = Principal::new(
//!     AgentId::new("usr-1234567890123456").unwrap(),
//!     AccessPolicy::new(vec![Statement::parse(
//!         "function:get",
//!         "/account/acc-1/subscription/sub-1/boundary/dev/",
//!     )
//!     .unwrap()]),
//! );
//!
//! let get = Action::parse("function:get").unwrap();
//! let hello = ResourcePath::function("acc-1", "sub-1", "dev", "hello");
//! assert!(authorizer.ensure_authorized(&agent, &get, &hello).await.is_ok());
//!
//! // the grant guard refuses anything broader than the agent's own grants
//! let broader = Statement::parse("function:get", "/account/acc-1/").unwrap();
//! assert!(authorizer.ensure_can_grant(&agent, &[broader]).is_err());
//! # });
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod policy;

pub use audit::{AuditEntry, AuditSink, MemoryAuditSink};
pub use config::{AuditConfig, AuthzConfig};
pub use engine::Authorizer;
pub use error::{AuthzError, ErrorCategory};
pub use policy::{AccessPolicy, Principal, Statement};

/// Type alias for authorization results.
pub type AuthzResult<T> = Result<T, AuthzError>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use stratum_auth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::AuthzResult;
    pub use crate::audit::{AuditEntry, AuditSink, MemoryAuditSink};
    pub use crate::config::{AuditConfig, AuthzConfig};
    pub use crate::engine::Authorizer;
    pub use crate::error::{AuthzError, ErrorCategory};
    pub use crate::policy::{AccessPolicy, Principal, Statement};
}

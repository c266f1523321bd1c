//! Policy data model: statements, access policies, and principals.
//!
//! A statement grants one (possibly wildcarded) action over one resource
//! subtree; an access policy is the statement list attached to an agent; a
//! principal is an agent id plus a snapshot of its policy, as handed to the
//! engine for a single evaluation.
//!
//! ```
//! use stratum_auth::policy::{AccessPolicy, Principal, Statement};
//! use stratum_core::{Action, AgentId, ResourcePath};
//!
//! let principal = Principal::new(
//!     AgentId::new("usr-1234567890123456").unwrap(),
//!     AccessPolicy::new(vec![Statement::parse(
//!         "function:get",
//!         "/account/acc-1/subscription/sub-1/boundary/dev/",
//!     )
//!     .unwrap()]),
//! );
//!
//! let action = Action::parse("function:get").unwrap();
//! let function = ResourcePath::function("acc-1", "sub-1", "dev", "hello");
//! assert!(principal.is_authorized(&action, &function));
//! ```

pub mod principal;
pub mod statement;

pub use principal::Principal;
pub use statement::{AccessPolicy, Statement};

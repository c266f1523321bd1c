//! Hierarchical, wildcard-capable action identifiers.
//!
//! Actions are colon-delimited operation names such as `function:get` or
//! `user:init`. A grant may name a single action, an entire namespace
//! (`function:*`), or everything (`*`). The wildcard is only legal as the
//! final segment; the namespace of an action is everything left of its last
//! `:`, which lets the matching rule generalize to deeper grammars
//! (`ns1:ns2:verb`) without special cases.
//!
//! # Examples
//!
//! ```
//! use stratum_core::Action;
//!
//! let wildcard = Action::parse("function:*").unwrap();
//! assert!(wildcard.contains(&Action::parse("function:get").unwrap()));
//! assert!(!wildcard.contains(&Action::parse("issuer:get").unwrap()));
//!
//! let universal = Action::parse("*").unwrap();
//! assert!(universal.contains(&wildcard));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A parsed action identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Action {
    /// The universal action `*`, matching every action.
    Universal,

    /// A namespace wildcard such as `function:*`, matching every action in
    /// the named namespace.
    NamespaceWildcard(String),

    /// A fully-qualified action name such as `function:get`, matching by
    /// exact equality only.
    Named(String),
}

impl Action {
    /// Parse an action string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyAction`] for the empty string and
    /// [`CoreError::MisplacedWildcard`] if a `*` segment appears anywhere
    /// but the final position.
    pub fn parse(action: &str) -> Result<Self, CoreError> {
        if action.is_empty() {
            return Err(CoreError::EmptyAction);
        }
        if action == "*" {
            return Ok(Self::Universal);
        }
        if let Some(namespace) = action.strip_suffix(":*") {
            if namespace.split(':').any(|segment| segment == "*") {
                return Err(CoreError::misplaced_wildcard(action));
            }
            return Ok(Self::NamespaceWildcard(namespace.to_string()));
        }
        if action.split(':').any(|segment| segment == "*") {
            return Err(CoreError::misplaced_wildcard(action));
        }
        Ok(Self::Named(action.to_string()))
    }

    /// The namespace of this action: everything left of the last `:`.
    ///
    /// `None` for the universal action and for names without a namespace
    /// (a bare verb has no namespace, so `function:*` never covers it).
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::Universal => None,
            Self::NamespaceWildcard(namespace) => Some(namespace),
            Self::Named(name) => name.rsplit_once(':').map(|(namespace, _)| namespace),
        }
    }

    /// Returns `true` if a grant on this action covers `candidate`.
    ///
    /// The universal action covers everything; a namespace wildcard covers
    /// exactly the candidates sharing its namespace; a named action covers
    /// only its exact self.
    #[must_use]
    pub fn contains(&self, candidate: &Action) -> bool {
        match self {
            Self::Universal => true,
            Self::NamespaceWildcard(namespace) => {
                candidate.namespace() == Some(namespace.as_str())
            }
            Self::Named(name) => {
                matches!(candidate, Self::Named(other) if name == other)
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Universal => write!(f, "*"),
            Self::NamespaceWildcard(namespace) => write!(f, "{namespace}:*"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for Action {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Action {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

/// Well-known action names for the platform's API surface.
pub mod names {
    /// The universal action.
    pub const ALL: &str = "*";

    pub const FUNCTION_GET: &str = "function:get";
    pub const FUNCTION_PUT: &str = "function:put";
    pub const FUNCTION_DELETE: &str = "function:delete";
    pub const FUNCTION_GET_LOG: &str = "function:get-log";
    pub const FUNCTION_ALL: &str = "function:*";

    pub const ISSUER_ADD: &str = "issuer:add";
    pub const ISSUER_GET: &str = "issuer:get";
    pub const ISSUER_UPDATE: &str = "issuer:update";
    pub const ISSUER_DELETE: &str = "issuer:delete";
    pub const ISSUER_ALL: &str = "issuer:*";

    pub const USER_ADD: &str = "user:add";
    pub const USER_GET: &str = "user:get";
    pub const USER_UPDATE: &str = "user:update";
    pub const USER_DELETE: &str = "user:delete";
    pub const USER_INIT: &str = "user:init";
    pub const USER_ALL: &str = "user:*";

    pub const CLIENT_ADD: &str = "client:add";
    pub const CLIENT_GET: &str = "client:get";
    pub const CLIENT_UPDATE: &str = "client:update";
    pub const CLIENT_DELETE: &str = "client:delete";
    pub const CLIENT_INIT: &str = "client:init";
    pub const CLIENT_ALL: &str = "client:*";

    pub const STORAGE_GET: &str = "storage:get";
    pub const STORAGE_PUT: &str = "storage:put";
    pub const STORAGE_DELETE: &str = "storage:delete";
    pub const STORAGE_ALL: &str = "storage:*";
}

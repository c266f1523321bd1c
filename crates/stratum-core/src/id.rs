//! Agent identifiers.
//!
//! Users and programmatic clients are both *agents*; their ids carry a
//! type prefix (`usr-`, `clt-`) followed by 16 lowercase hex characters.
//! The engine treats ids as opaque except for the prefix, which is used to
//! name the agent's kind in diagnostic messages.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The kind of an agent, derived from its id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    /// A human user (`usr-`).
    User,
    /// A programmatic client (`clt-`).
    Client,
}

impl AgentKind {
    /// The id prefix for this kind.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::User => "usr-",
            Self::Client => "clt-",
        }
    }

    /// The label used in diagnostic messages.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An opaque agent id.
///
/// Ids arriving from storage may predate the current prefix grammar, so any
/// non-empty string is a valid id; [`AgentId::kind`] is `None` for ids with
/// an unrecognized prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentId(String);

impl AgentId {
    /// Wrap an existing id string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyAgentId`] for the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::EmptyAgentId);
        }
        Ok(Self(id))
    }

    /// The built-in root agent id.
    #[must_use]
    pub fn root() -> Self {
        Self("root-user".to_string())
    }

    /// Generate a fresh id for the given kind: prefix plus 16 hex chars.
    #[must_use]
    pub fn generate(kind: AgentKind) -> Self {
        let suffix: u64 = rand::random();
        Self(format!("{}{suffix:016x}", kind.prefix()))
    }

    /// The agent kind implied by the id prefix, if recognized.
    #[must_use]
    pub fn kind(&self) -> Option<AgentKind> {
        if self.0.starts_with(AgentKind::User.prefix()) {
            Some(AgentKind::User)
        } else if self.0.starts_with(AgentKind::Client.prefix()) {
            Some(AgentKind::Client)
        } else {
            None
        }
    }

    /// The kind label used in diagnostic messages.
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.label(),
            None => "<unknown id type>",
        }
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AgentId {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AgentId> for String {
    fn from(id: AgentId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_format() {
        let id = AgentId::generate(AgentKind::User);
        assert!(id.as_str().starts_with("usr-"));
        assert_eq!(id.as_str().len(), "usr-".len() + 16);
        assert!(id.as_str()["usr-".len()..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id.kind(), Some(AgentKind::User));

        let id = AgentId::generate(AgentKind::Client);
        assert!(id.as_str().starts_with("clt-"));
        assert_eq!(id.kind(), Some(AgentKind::Client));
    }

    #[test]
    fn test_kind_labels() {
        let user = AgentId::new("usr-1234567890123456").unwrap();
        assert_eq!(user.kind_label(), "user");

        let client = AgentId::new("clt-1234567890123456").unwrap();
        assert_eq!(client.kind_label(), "client");

        let other = AgentId::new("root-user").unwrap();
        assert_eq!(other.kind(), None);
        assert_eq!(other.kind_label(), "<unknown id type>");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(AgentId::new(""), Err(CoreError::EmptyAgentId));
    }

    #[test]
    fn test_serde_round_trip() {
        let id = AgentId::new("usr-abcdefabcdefabcd").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"usr-abcdefabcdefabcd\"");
        let back: AgentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<AgentId>("\"\"").is_err());
    }
}

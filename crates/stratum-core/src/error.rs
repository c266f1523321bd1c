use thiserror::Error;

/// Core error types for Stratum primitives.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("action cannot be empty")]
    EmptyAction,

    #[error("invalid action '{0}': wildcard is only valid as the final segment")]
    MisplacedWildcard(String),

    #[error("agent id cannot be empty")]
    EmptyAgentId,
}

impl CoreError {
    /// Create a new MisplacedWildcard error
    pub fn misplaced_wildcard(action: impl Into<String>) -> Self {
        Self::MisplacedWildcard(action.into())
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CoreError::EmptyAction.to_string(), "action cannot be empty");
        assert_eq!(
            CoreError::misplaced_wildcard("*:get").to_string(),
            "invalid action '*:get': wildcard is only valid as the final segment"
        );
        assert_eq!(
            CoreError::EmptyAgentId.to_string(),
            "agent id cannot be empty"
        );
    }
}

//! Hierarchical resource paths.
//!
//! Every authorizable object in the platform is addressed by a `/`-delimited
//! path rooted in an account, e.g.
//! `/account/{accountId}/subscription/{subscriptionId}/boundary/{boundaryId}/function/{functionId}/`.
//! Granting access at a path grants access to the entire subtree beneath it,
//! so containment must be a segment-aligned prefix relation: `/boundary/b/`
//! contains `/boundary/b/function/f/` but never `/boundary/bb/`.
//!
//! [`ResourcePath`] models a path as its ordered segment sequence instead of
//! a raw string, so containment can never be fooled by a substring match that
//! crosses a segment boundary. All values are built through the normalizing
//! [`ResourcePath::parse`] constructor; the textual form always renders with
//! a leading and trailing `/`.
//!
//! # Examples
//!
//! ```
//! use stratum_core::ResourcePath;
//!
//! let boundary = ResourcePath::parse("/account/acc-1/subscription/sub-1/boundary/api");
//! let function = ResourcePath::parse("/account/acc-1/subscription/sub-1/boundary/api/function/hello/");
//!
//! assert!(boundary.contains(&function));
//! assert!(!function.contains(&boundary));
//! assert_eq!(boundary.to_string(), "/account/acc-1/subscription/sub-1/boundary/api/");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A normalized hierarchical resource path.
///
/// Internally an ordered sequence of segments; the root path `/` is the
/// empty sequence and contains every path. Comparison is case-sensitive and
/// performs no URL decoding: callers pass already-decoded segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// The root path `/`, which contains every resource.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path string into its normalized form.
    ///
    /// Exactly one leading and one trailing `/` are stripped before
    /// splitting; no other structure is collapsed (no `..` handling, no case
    /// folding, interior empty segments are preserved). The empty string
    /// normalizes to the root path.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Self::root();
        }
        Self {
            segments: trimmed.split('/').map(str::to_string).collect(),
        }
    }

    /// Returns `true` if `other` lies within this path's subtree.
    ///
    /// The relation is reflexive: every path contains itself, so an
    /// exact-match grant is valid.
    #[must_use]
    pub fn contains(&self, other: &ResourcePath) -> bool {
        other.segments.starts_with(&self.segments)
    }

    /// The ordered path segments; empty for the root path.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` if this is the root path `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Path of an account: `/account/{accountId}/`.
    #[must_use]
    pub fn account(account_id: &str) -> Self {
        Self::parse(&format!("/account/{account_id}"))
    }

    /// Path of a subscription within an account.
    #[must_use]
    pub fn subscription(account_id: &str, subscription_id: &str) -> Self {
        Self::parse(&format!("/account/{account_id}/subscription/{subscription_id}"))
    }

    /// Path of a boundary within a subscription.
    #[must_use]
    pub fn boundary(account_id: &str, subscription_id: &str, boundary_id: &str) -> Self {
        Self::parse(&format!(
            "/account/{account_id}/subscription/{subscription_id}/boundary/{boundary_id}"
        ))
    }

    /// Path of a function within a boundary.
    #[must_use]
    pub fn function(
        account_id: &str,
        subscription_id: &str,
        boundary_id: &str,
        function_id: &str,
    ) -> Self {
        Self::parse(&format!(
            "/account/{account_id}/subscription/{subscription_id}/boundary/{boundary_id}/function/{function_id}"
        ))
    }

    /// Path of an issuer within an account.
    #[must_use]
    pub fn issuer(account_id: &str, issuer_id: &str) -> Self {
        Self::parse(&format!("/account/{account_id}/issuer/{issuer_id}"))
    }

    /// Path of a user within an account.
    #[must_use]
    pub fn user(account_id: &str, user_id: &str) -> Self {
        Self::parse(&format!("/account/{account_id}/user/{user_id}"))
    }

    /// Path of a client within an account.
    #[must_use]
    pub fn client(account_id: &str, client_id: &str) -> Self {
        Self::parse(&format!("/account/{account_id}/client/{client_id}"))
    }

    /// Path of a storage id within a subscription.
    ///
    /// Storage ids may carry sub-paths (`data/reports/2026`); the embedded
    /// `/` characters become ordinary path segments.
    #[must_use]
    pub fn storage(account_id: &str, subscription_id: &str, storage_id: &str) -> Self {
        Self::parse(&format!(
            "/account/{account_id}/subscription/{subscription_id}/storage/{storage_id}"
        ))
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        write!(f, "/")
    }
}

impl FromStr for ResourcePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for ResourcePath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for ResourcePath {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ResourcePath> for String {
    fn from(path: ResourcePath) -> Self {
        path.to_string()
    }
}

//! Who is making a request.
//!
//! Clients currently assert their own `user_name` and nothing verifies it. That trust gap lives
//! behind [`IdentityProvider`] so handlers never read the raw string directly.

use async_trait::async_trait;
use std::fmt;

/// An identity accepted by the active provider. Opaque outside this module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserIdentity(String);

impl UserIdentity {
    /// Name recorded on adoptions and used for lookups.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the identity asserted by the client, or None when there is none.
    async fn identify(&self, asserted: Option<&str>) -> Option<UserIdentity>;
}

/// Accepts any non-empty name the client sends.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssertedName;

#[async_trait]
impl IdentityProvider for AssertedName {
    async fn identify(&self, asserted: Option<&str>) -> Option<UserIdentity> {
        asserted
            .filter(|s| !s.is_empty())
            .map(|s| UserIdentity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn asserted_name_rejects_missing_and_empty() {
        assert_eq!(AssertedName.identify(None).await, None);
        assert_eq!(AssertedName.identify(Some("")).await, None);
    }

    #[tokio::test]
    async fn asserted_name_is_taken_verbatim() {
        let id = AssertedName.identify(Some(" Asha ")).await.unwrap();
        assert_eq!(id.name(), " Asha ");
    }
}

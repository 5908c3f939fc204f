use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SESSION MODELS - Credential + result of the start-up session check
// ============================================================================

/// Opaque bearer token for the image service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Value of the `Authorization` header
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens never end up in logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<{} chars>)", self.0.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub authenticated: bool,
}

impl SessionState {
    pub fn authenticated() -> Self {
        Self { authenticated: true }
    }

    pub fn unauthenticated() -> Self {
        Self { authenticated: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        assert_eq!(Credential::new("abc").bearer_header(), "Bearer abc");
    }

    #[test]
    fn test_debug_hides_token() {
        let rendered = format!("{:?}", Credential::new("secret-token"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_blank_detection() {
        assert!(Credential::new("  ").is_blank());
        assert!(!Credential::new("t").is_blank());
    }
}

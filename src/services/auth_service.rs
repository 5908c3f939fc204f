use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::models::Credential;

/// Decides whether a stored token is usable and how to get a new one
#[allow(async_fn_in_trait)]
pub trait TokenAuthority {
    fn is_valid(&self, credential: Option<&Credential>) -> bool;

    /// Obtain a fresh token; the caller persists it
    async fn refresh(&self) -> Result<Credential, AuthError>;
}

/// Token policy driven by `AuthConfig`.
///
/// With `require_token` off every token counts as valid, including none at
/// all. Refresh hands out the configured token, if there is one.
#[derive(Clone, Debug, Default)]
pub struct ConfiguredAuthority {
    config: AuthConfig,
}

impl ConfiguredAuthority {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

impl TokenAuthority for ConfiguredAuthority {
    fn is_valid(&self, credential: Option<&Credential>) -> bool {
        if !self.config.require_token {
            return true;
        }
        credential.is_some_and(|token| !token.is_blank())
    }

    async fn refresh(&self) -> Result<Credential, AuthError> {
        self.config
            .refresh_token
            .as_deref()
            .map(Credential::new)
            .ok_or(AuthError::RefreshUnavailable)
    }
}

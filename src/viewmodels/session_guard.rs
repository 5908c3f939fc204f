// ============================================================================
// SESSION GUARD - Start-up credential check
// ============================================================================
// Valid token -> authenticated. Otherwise exactly one refresh, persist the
// new token, check again. Failures only show up as `authenticated: false`.
// ============================================================================

use crate::models::SessionState;
use crate::services::{CredentialStore, TokenAuthority};

pub struct SessionGuard<A> {
    credentials: CredentialStore,
    authority: A,
}

impl<A: TokenAuthority> SessionGuard<A> {
    pub fn new(credentials: CredentialStore, authority: A) -> Self {
        Self { credentials, authority }
    }

    pub async fn check_session(&self) -> SessionState {
        let current = self.credentials.load();
        if self.authority.is_valid(current.as_ref()) {
            log::info!("✅ [AUTH] Stored credential accepted");
            return SessionState::authenticated();
        }

        log::info!("🔄 [AUTH] Credential missing or invalid, refreshing once...");
        let refreshed = match self.authority.refresh().await {
            Ok(credential) => credential,
            Err(e) => {
                log::warn!("⚠️ [AUTH] Refresh failed: {}", e);
                return SessionState::unauthenticated();
            }
        };

        if let Err(e) = self.credentials.save(&refreshed) {
            log::warn!("⚠️ [AUTH] Could not store refreshed credential: {}", e);
            return SessionState::unauthenticated();
        }

        let stored = self.credentials.load();
        if self.authority.is_valid(stored.as_ref()) {
            log::info!("✅ [AUTH] Refreshed credential accepted");
            SessionState::authenticated()
        } else {
            log::warn!("⚠️ [AUTH] Refreshed credential still invalid");
            SessionState::unauthenticated()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::models::Credential;
    use crate::utils::{KeyValueStore, MemoryStorage};
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Accepts exactly the token `good`
    struct FakeAuthority {
        refresh_result: Result<Credential, AuthError>,
        refresh_calls: Cell<u32>,
    }

    impl FakeAuthority {
        fn refreshing_to(result: Result<&str, AuthError>) -> Self {
            Self {
                refresh_result: result.map(Credential::new),
                refresh_calls: Cell::new(0),
            }
        }
    }

    impl TokenAuthority for FakeAuthority {
        fn is_valid(&self, credential: Option<&Credential>) -> bool {
            credential.is_some_and(|token| token.as_str() == "good")
        }

        async fn refresh(&self) -> Result<Credential, AuthError> {
            self.refresh_calls.set(self.refresh_calls.get() + 1);
            self.refresh_result.clone()
        }
    }

    fn guard(stored: Option<&str>, authority: FakeAuthority) -> (SessionGuard<FakeAuthority>, Rc<MemoryStorage>) {
        let storage = Rc::new(match stored {
            Some(token) => MemoryStorage::with_item("accessToken", token),
            None => MemoryStorage::new(),
        });
        (SessionGuard::new(CredentialStore::new(storage.clone()), authority), storage)
    }

    #[test]
    fn test_valid_credential_skips_refresh() {
        let (guard, _) = guard(Some("good"), FakeAuthority::refreshing_to(Ok("other")));

        assert_eq!(block_on(guard.check_session()), SessionState::authenticated());
        assert_eq!(guard.authority.refresh_calls.get(), 0);
    }

    #[test]
    fn test_invalid_credential_refreshed_to_valid() {
        let (guard, storage) = guard(Some("stale"), FakeAuthority::refreshing_to(Ok("good")));

        assert_eq!(block_on(guard.check_session()), SessionState::authenticated());
        assert_eq!(guard.authority.refresh_calls.get(), 1);
        assert_eq!(storage.get_item("accessToken").as_deref(), Some("good"));
    }

    #[test]
    fn test_missing_credential_takes_refresh_path() {
        let (guard, _) = guard(None, FakeAuthority::refreshing_to(Ok("good")));

        assert!(block_on(guard.check_session()).authenticated);
        assert_eq!(guard.authority.refresh_calls.get(), 1);
    }

    #[test]
    fn test_refresh_failure_is_unauthenticated() {
        let (guard, storage) = guard(Some("stale"), FakeAuthority::refreshing_to(Err(AuthError::RefreshUnavailable)));

        assert_eq!(block_on(guard.check_session()), SessionState::unauthenticated());
        assert_eq!(storage.get_item("accessToken").as_deref(), Some("stale"));
    }

    #[test]
    fn test_refresh_to_invalid_token_does_not_retry() {
        let (guard, _) = guard(Some("stale"), FakeAuthority::refreshing_to(Ok("still-bad")));

        assert!(!block_on(guard.check_session()).authenticated);
        assert_eq!(guard.authority.refresh_calls.get(), 1);
    }
}

// ============================================================================
// AUTH STATE - Which top-level view is allowed to render
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Session guard has not settled yet
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone)]
pub struct AuthState {
    pub status: Rc<RefCell<AuthStatus>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            status: Rc::new(RefCell::new(AuthStatus::Checking)),
        }
    }

    pub fn get_status(&self) -> AuthStatus {
        *self.status.borrow()
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_status() == AuthStatus::Authenticated
    }

    /// Apply the session guard's verdict
    pub fn apply_session(&self, session: SessionState) {
        *self.status.borrow_mut() = if session.authenticated {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        };
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_verdict() {
        let auth = AuthState::new();
        assert_eq!(auth.get_status(), AuthStatus::Checking);
        assert!(!auth.is_authenticated());

        auth.apply_session(SessionState::unauthenticated());
        assert_eq!(auth.get_status(), AuthStatus::Unauthenticated);

        auth.clone().apply_session(SessionState::authenticated());
        assert!(auth.is_authenticated());
    }
}

// ============================================================================
// APP STATE - Application-wide state, built once per page load
// ============================================================================
// Everything the views need is reachable from here and is passed in
// explicitly: storage and API client come from the caller, nothing is read
// from ambient globals after construction.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::SessionState;
use crate::services::{ApiClient, CredentialStore};
use crate::state::{AuthState, ImageStore, StoreEvent, Subscribers, ThemeState};
use crate::utils::KeyValueStore;
use crate::viewmodels::DashboardViewModel;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub credentials: CredentialStore,
    pub images: ImageStore<ApiClient>,
    pub theme: ThemeState,

    // UI State
    pub show_theme_menu: Rc<RefCell<bool>>,
    pub login_token_input: Rc<RefCell<String>>,

    // Re-render requests
    pub change_subscribers: Subscribers<()>,
}

impl AppState {
    pub fn new(storage: Rc<dyn KeyValueStore>, api: Rc<ApiClient>, config: &AppConfig) -> Self {
        let credentials = CredentialStore::new(storage.clone());
        let images = ImageStore::new(api, credentials.clone());
        let theme = ThemeState::load(storage, config.default_theme);

        let state = Self {
            auth: AuthState::new(),
            credentials,
            images,
            theme,
            show_theme_menu: Rc::new(RefCell::new(false)),
            login_token_input: Rc::new(RefCell::new(String::new())),
            change_subscribers: Subscribers::new(),
        };

        // Missing or rejected token: forget it and go back to login
        {
            let auth = state.auth.clone();
            let credentials = state.credentials.clone();
            state.images.subscribe(move |event| {
                if let StoreEvent::Failed { error, .. } = event {
                    if error.is_auth_failure() && auth.is_authenticated() {
                        log::warn!("🔒 [APP] {}, back to login", error);
                        if let Err(e) = credentials.clear() {
                            log::warn!("⚠️ [APP] Could not clear token: {}", e);
                        }
                        auth.apply_session(SessionState::unauthenticated());
                    }
                }
            });
        }

        // Store and theme changes both end in a re-render
        {
            let subscribers = state.change_subscribers.clone();
            state.images.subscribe(move |_| subscribers.notify(&()));
        }
        {
            let subscribers = state.change_subscribers.clone();
            state.theme.subscribe(move |_| subscribers.notify(&()));
        }

        state
    }

    /// Viewmodel over the shared store and theme handles
    pub fn dashboard(&self) -> DashboardViewModel<ApiClient> {
        DashboardViewModel::new(self.images.clone(), self.theme.clone())
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.subscribe(move |_| callback());
    }

    pub fn notify_subscribers(&self) {
        self.change_subscribers.notify(&());
    }

    pub fn set_show_theme_menu(&self, show: bool) {
        *self.show_theme_menu.borrow_mut() = show;
        self.notify_subscribers();
    }

    pub fn get_show_theme_menu(&self) -> bool {
        *self.show_theme_menu.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use crate::state::AuthStatus;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn state() -> AppState {
        let config = AppConfig::default();
        AppState::new(
            Rc::new(MemoryStorage::with_item("accessToken", "tok")),
            Rc::new(ApiClient::with_base_url(config.api_base_url())),
            &config,
        )
    }

    #[test]
    fn test_theme_change_requests_render() {
        let state = state();
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        state.subscribe_to_changes(move || counter.set(counter.get() + 1));

        state.theme.set(Theme::Dark);
        state.set_show_theme_menu(true);

        assert_eq!(renders.get(), 2);
        assert!(state.get_show_theme_menu());
    }

    #[test]
    fn test_missing_token_returns_to_login() {
        let config = AppConfig::default();
        let state = AppState::new(
            Rc::new(MemoryStorage::new()),
            Rc::new(ApiClient::with_base_url(config.api_base_url())),
            &config,
        );
        state.auth.apply_session(SessionState::authenticated());
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        state.subscribe_to_changes(move || counter.set(counter.get() + 1));

        let result = block_on(state.dashboard().mount());

        assert!(result.is_err_and(|err| err.is_auth_failure()));
        assert_eq!(state.auth.get_status(), AuthStatus::Unauthenticated);
        assert!(renders.get() > 0);
    }

    #[test]
    fn test_shares_credential_storage() {
        let state = state();
        assert_eq!(state.credentials.load().map(|c| c.as_str().to_string()), Some("tok".to_string()));
        assert!(state.images.is_loading());
    }
}

// ============================================================================
// APP - Root element, session check, full re-render on change
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, document_element, get_element_by_id, matches_media, set_inner_html, toggle_class};
use crate::models::SessionState;
use crate::services::{ApiClient, ConfiguredAuthority};
use crate::state::{AppState, PendingFlag};
use crate::utils::{BrowserStorage, DARK_SCHEME_QUERY, ROOT_ELEMENT_ID};
use crate::viewmodels::SessionGuard;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(Rc::new(BrowserStorage), Rc::new(ApiClient::new()), &CONFIG);

        // One pending render at a time: a burst of changes renders once
        let render_pending = PendingFlag::new();
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            if !render_pending.claim() {
                return;
            }
            let render_pending = render_pending.clone();
            Timeout::new(0, move || {
                render_pending.release();
                crate::rerender_app();
            }).forget();
        });

        // Settle the session before the dashboard may render
        {
            let state = state.clone();
            spawn_local(async move {
                let guard = SessionGuard::new(
                    state.credentials.clone(),
                    ConfiguredAuthority::new(CONFIG.auth.clone()),
                );
                let session = guard.check_session().await;
                if session.authenticated {
                    enter_dashboard(&state);
                } else {
                    log::info!("🔒 [APP] No valid session, showing login");
                    state.auth.apply_session(session);
                    state.notify_subscribers();
                }
            });
        }

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] App::render()");

        self.apply_theme()?;

        if let Some(root) = &self.root {
            set_inner_html(root, "");
            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// `dark` class on <html>; System follows the OS preference
    fn apply_theme(&self) -> Result<(), JsValue> {
        let dark = self.state.theme.get().is_dark(matches_media(DARK_SCHEME_QUERY));
        if let Some(html) = document_element() {
            toggle_class(&html, "dark", dark)?;
        }
        Ok(())
    }
}

/// Mark the session authenticated, show the dashboard and start loading images
pub fn enter_dashboard(state: &AppState) {
    state.auth.apply_session(SessionState::authenticated());
    state.notify_subscribers();

    let vm = state.dashboard();
    spawn_local(async move {
        match vm.mount().await {
            Ok(count) => log::info!("✅ [APP] Dashboard ready with {} images", count),
            Err(e) => log::debug!("ℹ️ [APP] Initial load ended with: {}", e),
        }
    });
}

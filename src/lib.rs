// ============================================================================
// IMAGE UPLOAD DASHBOARD - FRONTEND MVVM (PURE RUST)
// ============================================================================
// - Views: functions that render DOM (no logic)
// - ViewModels: UI state + commands
// - Services: API, token checks, credential storage
// - State: Rc<RefCell> state + change notifications
// - Models: wire and domain structures
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
mod dom;
mod views;
pub mod utils;
mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Debug } else { log::Level::Warn };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Image Upload Dashboard ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Registered once. A page kept in the back/forward cache comes back
    // through `pageshow`, so the store is re-armed there.
    if let Some(win) = web_sys::window() {
        let on_hide = wasm_bindgen::closure::Closure::wrap(Box::new(move |e: web_sys::PageTransitionEvent| {
            if e.persisted() {
                log::debug!("👋 [MAIN] pagehide into bfcache, keeping image store");
                return;
            }
            with_state(|state| {
                log::debug!("👋 [MAIN] pagehide, disposing image store");
                state.images.dispose();
            });
        }) as Box<dyn FnMut(web_sys::PageTransitionEvent)>);

        win.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())?;
        on_hide.forget();

        let on_show = wasm_bindgen::closure::Closure::wrap(Box::new(move |e: web_sys::PageTransitionEvent| {
            if e.persisted() {
                with_state(|state| state.images.restore());
            }
        }) as Box<dyn FnMut(web_sys::PageTransitionEvent)>);

        win.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref())?;
        on_show.forget();
    }

    Ok(())
}

fn with_state<F>(f: F)
where
    F: FnOnce(&crate::state::AppState),
{
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            f(app.state());
        }
    });
}

/// Full re-render of the app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App not initialized");
        }
    });
}

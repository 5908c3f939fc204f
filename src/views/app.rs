// ============================================================================
// APP VIEW - Top-level view chosen by the session guard's verdict
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::state::{AppState, AuthStatus};
use crate::views::{render_dashboard, render_loader, render_login};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?
        .class("app-shell")
        .build();

    let content = match state.auth.get_status() {
        AuthStatus::Checking => render_loader()?,
        AuthStatus::Unauthenticated => render_login(state)?,
        AuthStatus::Authenticated => render_dashboard(state)?,
    };
    append_child(&shell, &content)?;

    Ok(shell)
}

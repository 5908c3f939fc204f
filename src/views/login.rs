// ============================================================================
// LOGIN VIEW - Shown when the session guard rejects the stored credential
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{ElementBuilder, append_child, on_click, on_input};
use crate::models::Credential;
use crate::state::AppState;

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");

    let screen = ElementBuilder::new("div")?
        .class("login-screen")
        .build();

    let card = ElementBuilder::new("section")?
        .class("card login-card")
        .build();

    let title = ElementBuilder::new("h2")?
        .class("card-title")
        .text("Sign in")
        .build();

    let description = ElementBuilder::new("p")?
        .class("card-description")
        .text("Paste your access token to open the dashboard")
        .build();

    let current = state.login_token_input.borrow().clone();
    let input = ElementBuilder::new("input")?
        .class("input")
        .attr("type", "password")?
        .attr("placeholder", "Access token")?
        .attr("autocomplete", "off")?
        .attr("value", &current)?
        .build();

    {
        let token_input = state.login_token_input.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(field) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *token_input.borrow_mut() = field.value();
            }
        })?;
    }

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Sign in")
        .build();

    {
        let state = state.clone();
        on_click(&submit, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let token = state.login_token_input.borrow().trim().to_string();
            if token.is_empty() {
                log::warn!("⚠️ [LOGIN] Empty token, ignoring");
                return;
            }
            if let Err(err) = state.credentials.save(&Credential::new(token)) {
                log::error!("❌ [LOGIN] Could not store token: {}", err);
                return;
            }
            state.login_token_input.borrow_mut().clear();
            log::info!("✅ [LOGIN] Token stored");
            crate::app::enter_dashboard(&state);
        })?;
    }

    append_child(&card, &title)?;
    append_child(&card, &description)?;
    append_child(&card, &input)?;
    append_child(&card, &submit)?;
    append_child(&screen, &card)?;

    Ok(screen)
}

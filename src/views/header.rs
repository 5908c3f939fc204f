// ============================================================================
// HEADER VIEW - Title, dark-mode switch, theme dropdown
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, on_change, on_click};
use crate::models::Theme;
use crate::state::AppState;

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let theme = state.theme.get();
    let show_menu = state.get_show_theme_menu();

    let header = ElementBuilder::new("header")?
        .class("dashboard-header")
        .build();

    let container = ElementBuilder::new("div")?
        .class("container header-row")
        .build();

    let title = ElementBuilder::new("h1")?
        .class("dashboard-title")
        .text("Image Upload Dashboard")
        .build();

    let actions = ElementBuilder::new("div")?
        .class("header-actions")
        .build();

    // Switch: checked while the explicit theme is dark
    let switch = ElementBuilder::new("input")?
        .class("switch")
        .attr("type", "checkbox")?
        .attr("role", "switch")?
        .attr("aria-label", "Dark mode")?
        .flag("checked", theme == Theme::Dark)?
        .build();

    {
        let state = state.clone();
        on_change(&switch, move |_e: web_sys::Event| {
            state.dashboard().toggle_theme();
        })?;
    }

    append_child(&actions, &switch)?;
    append_child(&actions, &render_theme_menu(state, theme, show_menu)?)?;

    append_child(&container, &title)?;
    append_child(&container, &actions)?;
    append_child(&header, &container)?;

    Ok(header)
}

fn render_theme_menu(state: &AppState, theme: Theme, show_menu: bool) -> Result<Element, JsValue> {
    let menu = ElementBuilder::new("div")?
        .class("theme-menu")
        .build();

    let icon = if theme == Theme::Light { "☀️" } else { "🌙" };
    let trigger = ElementBuilder::new("button")?
        .class("btn btn-outline btn-icon")
        .attr("aria-haspopup", "menu")?
        .attr("aria-expanded", if show_menu { "true" } else { "false" })?
        .text(icon)
        .build();

    let sr_label = ElementBuilder::new("span")?
        .class("sr-only")
        .text("Toggle theme")
        .build();
    append_child(&trigger, &sr_label)?;

    {
        let state = state.clone();
        on_click(&trigger, move |e: web_sys::MouseEvent| {
            e.stop_propagation();
            let open = state.get_show_theme_menu();
            state.set_show_theme_menu(!open);
        })?;
    }
    append_child(&menu, &trigger)?;

    if show_menu {
        let content = ElementBuilder::new("div")?
            .class("dropdown-content")
            .attr("role", "menu")?
            .build();

        for option in Theme::ALL {
            let class = if option == theme { "dropdown-item active" } else { "dropdown-item" };
            let item = ElementBuilder::new("button")?
                .class(class)
                .attr("role", "menuitem")?
                .text(option.label())
                .build();

            let state = state.clone();
            on_click(&item, move |_e: web_sys::MouseEvent| {
                // Close first so the theme notification renders the closed menu
                *state.show_theme_menu.borrow_mut() = false;
                state.dashboard().set_theme(option);
            })?;
            append_child(&content, &item)?;
        }
        append_child(&menu, &content)?;
    }

    Ok(menu)
}

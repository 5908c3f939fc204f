// ============================================================================
// DASHBOARD VIEW - Header, upload card, image grid
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::state::AppState;
use crate::viewmodels::DashboardPhase;
use crate::views::{render_header, render_image_card, render_loader, render_upload_card};

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let vm = state.dashboard();

    let page = ElementBuilder::new("div")?
        .class("dashboard")
        .build();

    append_child(&page, &render_header(state)?)?;

    let main = ElementBuilder::new("main")?
        .class("container dashboard-main")
        .build();

    let phase = vm.phase();
    log::debug!("🎬 [DASHBOARD] render phase={:?}", phase);

    if phase == DashboardPhase::Loading {
        append_child(&main, &render_loader()?)?;
        append_child(&page, &main)?;
        return Ok(page);
    }

    append_child(&main, &render_upload_card(state, vm.upload_control())?)?;

    let gallery = ElementBuilder::new("section")?
        .class("card")
        .build();

    let heading = ElementBuilder::new("div")?
        .class("card-header")
        .child(ElementBuilder::new("h2")?
            .class("card-title")
            .text("Your Images")
            .build())?
        .child(ElementBuilder::new("p")?
            .class("card-description")
            .text("Manage and analyze your uploaded images")
            .build())?
        .build();
    append_child(&gallery, &heading)?;

    let body = ElementBuilder::new("div")?
        .class("card-content")
        .build();

    match phase {
        DashboardPhase::Empty => {
            let empty = ElementBuilder::new("p")?
                .class("empty-state")
                .text("No images uploaded yet. Start by uploading an image above.")
                .build();
            append_child(&body, &empty)?;
        }
        _ => {
            let grid = ElementBuilder::new("div")?
                .class("image-grid")
                .build();
            for image in vm.images() {
                append_child(&grid, &render_image_card(state, &image)?)?;
            }
            append_child(&body, &grid)?;
        }
    }

    append_child(&gallery, &body)?;
    append_child(&main, &gallery)?;
    append_child(&page, &main)?;

    Ok(page)
}

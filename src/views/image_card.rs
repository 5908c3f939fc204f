use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, on_click};
use crate::models::ImageRecord;
use crate::state::AppState;

/// One tile of the gallery: preview, name, date, actions
pub fn render_image_card(state: &AppState, image: &ImageRecord) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article")?
        .class("card image-card")
        .build();

    let preview = ElementBuilder::new("img")?
        .class("image-preview")
        .attr("src", &image.url)?
        .attr("alt", &image.name)?
        .attr("loading", "lazy")?
        .build();

    let name = ElementBuilder::new("h3")?
        .class("image-name")
        .attr("title", &image.name)?
        .text(&image.name)
        .build();

    let date = ElementBuilder::new("p")?
        .class("image-date")
        .text(&format!("Uploaded on {}", image.upload_date_label()))
        .build();

    let actions = ElementBuilder::new("div")?
        .class("image-actions")
        .build();

    let analyze = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .text("Analyze")
        .build();

    {
        let state = state.clone();
        let id = image.id.clone();
        on_click(&analyze, move |_e: web_sys::MouseEvent| {
            state.dashboard().analyze(&id);
        })?;
    }

    let delete = ElementBuilder::new("button")?
        .class("btn btn-destructive")
        .text("Delete")
        .build();

    {
        let state = state.clone();
        let id = image.id.clone();
        on_click(&delete, move |_e: web_sys::MouseEvent| {
            let vm = state.dashboard();
            let id = id.clone();
            spawn_local(async move {
                match vm.delete(&id).await {
                    Ok(true) => log::info!("🗑️ [DASHBOARD] Deleted {}", id),
                    Ok(false) => {}
                    Err(e) => log::debug!("ℹ️ [DASHBOARD] Delete of {} ended with: {}", id, e),
                }
            });
        })?;
    }

    append_child(&actions, &analyze)?;
    append_child(&actions, &delete)?;
    append_child(&card, &preview)?;
    append_child(&card, &name)?;
    append_child(&card, &date)?;
    append_child(&card, &actions)?;

    Ok(card)
}

// ============================================================================
// UPLOAD CARD - File picker + upload button
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement, HtmlInputElement};
use crate::dom::{ElementBuilder, append_child, on_change, on_click};
use crate::state::AppState;
use crate::utils::file::{first_selected_file, read_upload_file};
use crate::viewmodels::UploadControl;

pub fn render_upload_card(state: &AppState, control: UploadControl) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("section")?
        .class("card upload-card")
        .build();

    let heading = ElementBuilder::new("div")?
        .class("card-header")
        .child(ElementBuilder::new("h2")?
            .class("card-title")
            .text("Upload New Image")
            .build())?
        .child(ElementBuilder::new("p")?
            .class("card-description")
            .text("Select an image file to upload")
            .build())?
        .build();

    let row = ElementBuilder::new("div")?
        .class("card-content upload-row")
        .build();

    let input = ElementBuilder::new("input")?
        .class("input file-input")
        .attr("type", "file")?
        .attr("accept", "image/*")?
        .flag("disabled", control.disabled)?
        .build();

    {
        let state = state.clone();
        on_change(&input, move |e: web_sys::Event| {
            let Some(field) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            let Some(picked) = first_selected_file(&field) else {
                log::debug!("ℹ️ [UPLOAD] No file selected");
                return;
            };
            // Allow picking the same file again later
            field.set_value("");

            let vm = state.dashboard();
            spawn_local(async move {
                let file = match read_upload_file(&picked).await {
                    Ok(file) => file,
                    Err(e) => {
                        log::error!("❌ [UPLOAD] Could not read file: {:?}", e);
                        return;
                    }
                };
                if let Err(e) = vm.upload(file).await {
                    log::debug!("ℹ️ [UPLOAD] Upload ended with: {}", e);
                }
            });
        })?;
    }

    let button = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text(control.label)
        .flag("disabled", control.disabled)?
        .build();

    {
        let input = input.clone();
        on_click(&button, move |_e: web_sys::MouseEvent| {
            if let Some(input) = input.dyn_ref::<HtmlElement>() {
                input.click();
            }
        })?;
    }

    append_child(&row, &input)?;
    append_child(&row, &button)?;
    append_child(&card, &heading)?;
    append_child(&card, &row)?;

    Ok(card)
}

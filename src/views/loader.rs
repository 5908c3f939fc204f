use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;

/// Centered spinner
pub fn render_loader() -> Result<Element, JsValue> {
    let spinner = ElementBuilder::new("div")?
        .class("loader")
        .attr("role", "status")?
        .attr("aria-label", "Loading")?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("loader-wrapper")
        .child(spinner)?
        .build())
}

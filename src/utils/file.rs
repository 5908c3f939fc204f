// ============================================================================
// FILE INPUT - Read the picked browser File into an UploadFile
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::models::UploadFile;

/// First file of an `<input type="file">`, if any was picked
pub fn first_selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0)
}

/// Read the whole file into memory
pub async fn read_upload_file(file: &File) -> Result<UploadFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let buffer = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| JsValue::from_str("File did not resolve to an ArrayBuffer"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(UploadFile::new(file.name(), Some(file.type_()), bytes))
}

// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, check the status, decode the
// body. Reconciling the image list is the store's job.
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{Credential, DeleteRequest, ImagesResponse, RemoteImage, UploadFile, UploadResponse};

/// Remote image service, as used by the image store
#[allow(async_fn_in_trait)]
pub trait ImageApi {
    /// `GET /images`
    async fn list_images(&self, credential: &Credential) -> Result<Vec<RemoteImage>, ApiError>;

    /// `POST /upload` (multipart, field `file`), returns the stored file URL
    async fn upload_image(&self, credential: &Credential, file: &UploadFile) -> Result<String, ApiError>;

    /// `DELETE /delete` with `{ file_url }`
    async fn delete_image(&self, credential: &Credential, file_url: &str) -> Result<(), ApiError>;
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response
            .text()
            .await
            .ok()
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| response.status_text());
        Err(ApiError::from_status(status, error_text))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageApi for ApiClient {
    async fn list_images(&self, credential: &Credential) -> Result<Vec<RemoteImage>, ApiError> {
        let url = self.endpoint("images");
        log::debug!("📋 [API] GET {}", url);

        let response = Request::get(&url)
            .header("Authorization", &credential.bearer_header())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let body = response
            .json::<ImagesResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("✅ [API] {} images listed", body.images.len());
        Ok(body.images)
    }

    async fn upload_image(&self, credential: &Credential, file: &UploadFile) -> Result<String, ApiError> {
        let url = self.endpoint("upload");
        log::debug!("📤 [API] POST {} ({}, {} bytes)", url, file.name, file.len());

        // Browser sets the multipart boundary itself, no Content-Type here
        let form = multipart::file_form(file)?;
        let response = Request::post(&url)
            .header("Authorization", &credential.bearer_header())
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let body = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("✅ [API] Uploaded {} -> {}", file.name, body.file_url);
        Ok(body.file_url)
    }

    async fn delete_image(&self, credential: &Credential, file_url: &str) -> Result<(), ApiError> {
        let url = self.endpoint("delete");
        log::debug!("🗑️ [API] DELETE {} ({})", url, file_url);

        let request = DeleteRequest {
            file_url: file_url.to_string(),
        };
        let response = Request::delete(&url)
            .header("Authorization", &credential.bearer_header())
            .json(&request)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(response).await?;

        log::info!("✅ [API] Deleted {}", file_url);
        Ok(())
    }
}

mod multipart {
    use wasm_bindgen::JsValue;
    use web_sys::{Blob, BlobPropertyBag, FormData};

    use crate::error::ApiError;
    use crate::models::UploadFile;

    fn js_error(context: &str, err: JsValue) -> ApiError {
        ApiError::Request(format!("{}: {:?}", context, err))
    }

    /// `FormData` with the file under the `file` field
    pub(super) fn file_form(file: &UploadFile) -> Result<FormData, ApiError> {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);

        let options = BlobPropertyBag::new();
        if let Some(mime) = &file.content_type {
            options.set_type(mime);
        }
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| js_error("blob", e))?;

        let form = FormData::new().map_err(|e| js_error("form data", e))?;
        form.append_with_blob_and_filename("file", &blob, &file.name)
            .map_err(|e| js_error("form field", e))?;
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_join_cleanly() {
        let client = ApiClient::with_base_url("http://127.0.0.1:5000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
        assert_eq!(client.endpoint("images"), "http://127.0.0.1:5000/images");
        assert_eq!(client.endpoint("/delete"), "http://127.0.0.1:5000/delete");
    }
}

// Wire format of the image service

use serde::{Deserialize, Serialize};

/// Body of `GET /images`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ImagesResponse {
    #[serde(default)]
    pub images: Vec<RemoteImage>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RemoteImage {
    pub filename: String,
    pub url: String,
}

/// Body of `POST /upload`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadResponse {
    pub file_url: String,
}

/// Body sent with `DELETE /delete`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DeleteRequest {
    pub file_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_response_ignores_extra_fields() {
        let body = r#"{"images":[{"filename":"cat.png","url":"http://x/cat.png","size":12}],"count":1}"#;
        let parsed: ImagesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.images,
            vec![RemoteImage {
                filename: "cat.png".to_string(),
                url: "http://x/cat.png".to_string(),
            }]
        );
    }

    #[test]
    fn test_images_response_without_list_is_empty() {
        let parsed: ImagesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.images.is_empty());
    }

    #[test]
    fn test_delete_request_shape() {
        let body = serde_json::to_string(&DeleteRequest { file_url: "http://x/cat.png".to_string() }).unwrap();
        assert_eq!(body, r#"{"file_url":"http://x/cat.png"}"#);
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::api::RemoteImage;

/// One stored image as the dashboard sees it.
///
/// `id` is always the remote retrieval URL, for loaded and uploaded images
/// alike, so a record keeps the same identity across reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: String,
    pub url: String,
    pub name: String,
    /// Date the record was created on this client (not authoritative)
    pub upload_date: NaiveDate,
}

impl ImageRecord {
    pub fn new(url: impl Into<String>, name: impl Into<String>, upload_date: NaiveDate) -> Self {
        let url = url.into();
        Self {
            id: url.clone(),
            url,
            name: name.into(),
            upload_date,
        }
    }

    /// Record for an entry of `GET /images`
    pub fn from_remote(remote: RemoteImage, today: NaiveDate) -> Self {
        Self::new(remote.url, remote.filename, today)
    }

    /// Date rendered on the card, `YYYY-MM-DD`
    pub fn upload_date_label(&self) -> String {
        self.upload_date.format("%Y-%m-%d").to_string()
    }
}

/// File picked in the upload input, read fully into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.filter(|mime| !mime.is_empty()),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_remote_entry_uses_url_as_identity() {
        let record = ImageRecord::from_remote(
            RemoteImage {
                filename: "cat.png".to_string(),
                url: "http://x/cat.png".to_string(),
            },
            day(),
        );
        assert_eq!(record.id, "http://x/cat.png");
        assert_eq!(record.url, "http://x/cat.png");
        assert_eq!(record.name, "cat.png");
        assert_eq!(record.upload_date_label(), "2024-03-09");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ImageRecord::new("http://x/a.png", "a.png", day());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["uploadDate"], "2024-03-09");
        assert_eq!(json["id"], "http://x/a.png");
    }

    #[test]
    fn test_blank_content_type_is_dropped() {
        let file = UploadFile::new("a.png", Some(String::new()), vec![1, 2, 3]);
        assert_eq!(file.content_type, None);
        assert_eq!(file.len(), 3);
        assert!(!file.is_empty());
    }
}

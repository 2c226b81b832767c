//! Files and images attached to entities.
//!
//! Uploads send the content inline as base64. Downloads are exposed through
//! `meta.downloadHref`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::meta::{impl_has_meta, Meta};
use super::references::Employee;
use super::timestamp::Timestamp;

/// A file attached to a document or dictionary entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// File name with extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Base64 content, only sent on upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// When it was created.
    #[serde(skip_serializing)]
    pub created: Option<Timestamp>,

    /// Employee who uploaded the file.
    #[serde(skip_serializing)]
    pub created_by: Option<Employee>,

    /// Download meta of the preview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miniature: Option<Meta>,

    /// Download meta of the thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiny: Option<Meta>,
}

/// A product image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// File name with extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Base64 content, only sent on upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// When the image was uploaded.
    #[serde(skip_serializing)]
    pub updated: Option<Timestamp>,

    /// Download meta of the preview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miniature: Option<Meta>,

    /// Download meta of the thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiny: Option<Meta>,
}

impl_has_meta!(File, Image);

impl File {
    /// Creates an upload from raw bytes.
    #[must_use]
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            filename: Some(filename.into()),
            content: Some(STANDARD.encode(bytes)),
            ..Default::default()
        }
    }

    /// Sets the display title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }
}

impl Image {
    /// Creates an upload from raw bytes.
    #[must_use]
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            filename: Some(filename.into()),
            content: Some(STANDARD.encode(bytes)),
            ..Default::default()
        }
    }

    /// Sets the display title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_upload_encodes_content() {
        let mut file = File::from_bytes("hello.txt", b"hello");
        file.set_title("Greeting");

        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["filename"], "hello.txt");
        assert_eq!(value["content"], "aGVsbG8=");
        assert_eq!(value["title"], "Greeting");
    }

    #[test]
    fn test_read_only_fields_not_sent() {
        let image: Image = serde_json::from_str(
            r#"{"filename":"a.png","size":42,"updated":"2024-01-01 10:00:00.000"}"#,
        )
        .unwrap();
        assert!(image.updated.is_some());

        let value = serde_json::to_value(&image).unwrap();
        assert!(value.get("updated").is_none());
    }
}

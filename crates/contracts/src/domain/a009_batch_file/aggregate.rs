use serde::{Deserialize, Serialize};

use crate::shared::EntityId;

/// File stored on Google Drive for a batch (`GET /google/files/:batchId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

impl UploadedFile {
    /// `12.3 KB`, or `-` when the size is unknown.
    pub fn size_label(&self) -> String {
        match self.size {
            Some(bytes) => format!("{:.1} KB", bytes as f64 / 1024.0),
            None => "-".to_string(),
        }
    }

    pub fn download_name(&self) -> String {
        if self.name.trim().is_empty() {
            "file".to_string()
        } else {
            self.name.clone()
        }
    }
}

/// The upload endpoint answers `{ files: [...] }` or the bare list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UploadResponse {
    Files { files: Vec<UploadedFile> },
    Bare(Vec<UploadedFile>),
    Other(serde_json::Value),
}

impl UploadResponse {
    pub fn uploaded_count(&self) -> usize {
        match self {
            UploadResponse::Files { files } | UploadResponse::Bare(files) => files.len(),
            UploadResponse::Other(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_label() {
        let file: UploadedFile = serde_json::from_str(
            r#"{"id":"1AbC","name":"front.png","mimeType":"image/png","size":2560}"#,
        )
        .unwrap();
        assert_eq!(file.size_label(), "2.5 KB");

        let unnamed: UploadedFile = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(unnamed.size_label(), "-");
        assert_eq!(unnamed.download_name(), "file");
    }

    #[test]
    fn test_upload_response_shapes() {
        let wrapped: UploadResponse =
            serde_json::from_str(r#"{"files":[{"id":"a","name":"x"}]}"#).unwrap();
        assert_eq!(wrapped.uploaded_count(), 1);
        let other: UploadResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(other.uploaded_count(), 0);
    }
}

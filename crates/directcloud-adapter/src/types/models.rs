/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Folder row returned by the folder listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderEntry {
    #[serde(default)]
    pub node: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_opt_seq")]
    pub dir_seq: Option<u64>,
    /// Fields this crate does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// File row returned by the folder listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_opt_seq")]
    pub file_seq: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_opt_seq")]
    pub size: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `data` object of a folder listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FolderListing {
    #[serde(default)]
    pub folders: Vec<FolderEntry>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// Body returned when a share link is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedLink {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Sequence numbers arrive as numbers or numeric strings
    pub fn deserialize_opt_seq<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null => Ok(None),
            Value::Number(number) => number
                .as_u64()
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom("sequence must be a non-negative integer")),
            Value::String(raw) if raw.trim().is_empty() => Ok(None),
            Value::String(raw) => raw.trim().parse().map(Some).map_err(serde::de::Error::custom),
            _ => Err(serde::de::Error::custom("invalid sequence value")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_deserializes_mixed_sequence_types() {
        let value = json!({
            "folders": [
                {"node": "1{2{7", "name": "Reports", "dir_seq": "7", "drive": "company"}
            ],
            "files": [
                {"file_seq": 301, "name": "q3.pdf", "size": "2048", "extension": "pdf"}
            ]
        });

        let listing: FolderListing = serde_json::from_value(value).expect("listing");

        assert_eq!(listing.folders.len(), 1);
        assert_eq!(listing.folders[0].dir_seq, Some(7));
        assert_eq!(listing.folders[0].extra.get("drive"), Some(&json!("company")));
        assert_eq!(listing.files[0].file_seq, Some(301));
        assert_eq!(listing.files[0].size, Some(2048));
        assert_eq!(listing.files[0].extra.get("extension"), Some(&json!("pdf")));
    }

    #[test]
    fn listing_defaults_missing_sections() {
        let listing: FolderListing = serde_json::from_value(json!({})).expect("listing");
        assert!(listing.folders.is_empty());
        assert!(listing.files.is_empty());
    }

    #[test]
    fn entry_rejects_garbage_sequence() {
        let result: Result<FileEntry, _> = serde_json::from_value(json!({"file_seq": "abc"}));
        assert!(result.is_err());
    }

    #[test]
    fn created_link_keeps_unknown_fields() {
        let link: CreatedLink = serde_json::from_value(json!({
            "success": true,
            "url": "https://c.directcloud.jp/abc",
            "link_seq": 12
        }))
        .expect("link");

        assert_eq!(link.url.as_deref(), Some("https://c.directcloud.jp/abc"));
        assert_eq!(link.extra.get("success"), Some(&json!(true)));
    }
}

/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::path::Path;

use bytes::Bytes;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::LinkTargetType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub node: String,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveFolderRequest {
    pub dst_node: String,
    pub src_node: String,
    pub node: String,
}

/// Body shared by file move and file copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFileRequest {
    pub dst_node: String,
    pub src_node: String,
    pub file_seq: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub file_seq: u64,
    pub flag_direct: String,
}

impl DownloadRequest {
    /// Ask for the file content in the response body instead of a URL
    pub fn direct(file_seq: u64) -> Self {
        Self {
            file_seq,
            flag_direct: "Y".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameFileRequest {
    pub file_seq: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSeqRequest {
    pub file_seq: u64,
}

/// Optional settings for a share link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    pub password: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub view_option: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    pub target_type: LinkTargetType,
    pub node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_seq: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(rename = "viewoption", skip_serializing_if = "Option::is_none")]
    pub view_option: Option<String>,
}

impl CreateLinkRequest {
    pub fn file(node: &str, file_seq: u64, options: &LinkOptions) -> Self {
        Self::new(LinkTargetType::File, node, Some(file_seq), options)
    }

    pub fn folder(node: &str, options: &LinkOptions) -> Self {
        Self::new(LinkTargetType::Folder, node, None, options)
    }

    fn new(
        target_type: LinkTargetType,
        node: &str,
        file_seq: Option<u64>,
        options: &LinkOptions,
    ) -> Self {
        Self {
            target_type,
            node: node.to_string(),
            file_seq,
            password: options.password.clone(),
            expiration_date: options.expiration_date,
            view_option: options.view_option.clone(),
        }
    }
}

/// File content and the file name reported in the multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSource {
    pub bytes: Bytes,
    pub file_name: String,
}

impl UploadSource {
    pub fn new(bytes: impl Into<Bytes>, file_name: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: file_name.into(),
        }
    }

    /// Read a local file, keeping its base name
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} has no file name", path.display()),
                )
            })?;
        Ok(Self::new(bytes, file_name))
    }
}

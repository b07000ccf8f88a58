/*
[INPUT]:  File sequence numbers, folder nodes and upload content
[OUTPUT]: File content, upload results and operation outcomes
[POS]:    HTTP layer - file endpoints (v1 and v2)
[UPDATE]: When adding new file endpoints or changing transfer behavior
*/

// ### File Endpoints

use bytes::Bytes;

use crate::http::dispatch::ByteStream;
use crate::http::endpoints::{
    Endpoint, FILE_COPY, FILE_DELETE, FILE_DOWNLOAD, FILE_INFO, FILE_MOVE, FILE_RENAME,
    FILE_UPLOAD,
};
use crate::http::{DirectCloudClient, MultipartPart, RequestParams, Result};
use crate::types::{
    DownloadRequest, FileSeqRequest, JsonObject, RenameFileRequest, TransferFileRequest,
    UploadSource, success_flag,
};

impl DirectCloudClient {
    /// File details
    ///
    /// GET /openapp/v1/files/index/{node}/{file_seq}
    pub async fn file_info(&self, node: &str, file_seq: u64) -> Result<JsonObject> {
        let file_seq = file_seq.to_string();
        self.v1_request(
            &FILE_INFO,
            &[("node", node), ("seq", &file_seq)],
            RequestParams::None,
        )
        .await
    }

    /// PUT /openapi/v2/files/move
    pub async fn move_file(&self, dst_node: &str, src_node: &str, file_seq: u64) -> Result<bool> {
        self.transfer_file(&FILE_MOVE, dst_node, src_node, file_seq)
            .await
    }

    /// PUT /openapi/v2/files/copy
    pub async fn copy_file(&self, dst_node: &str, src_node: &str, file_seq: u64) -> Result<bool> {
        self.transfer_file(&FILE_COPY, dst_node, src_node, file_seq)
            .await
    }

    async fn transfer_file(
        &self,
        endpoint: &Endpoint,
        dst_node: &str,
        src_node: &str,
        file_seq: u64,
    ) -> Result<bool> {
        let params = RequestParams::form(&TransferFileRequest {
            dst_node: dst_node.to_string(),
            src_node: src_node.to_string(),
            file_seq,
        })?;

        let payload = self.v2_request(endpoint, &[], params, &[]).await?;
        Ok(payload.is_success())
    }

    /// Download a file into memory, byte for byte
    ///
    /// POST /openapi/v2/files/download
    pub async fn download(&self, file_seq: u64) -> Result<Bytes> {
        let params = RequestParams::json(&DownloadRequest::direct(file_seq))?;
        self.v2_request(&FILE_DOWNLOAD, &[], params, &[])
            .await?
            .into_bytes()
    }

    /// Download a text file
    pub async fn download_text(&self, file_seq: u64) -> Result<String> {
        let params = RequestParams::json(&DownloadRequest::direct(file_seq))?;
        self.v2_request(&FILE_DOWNLOAD, &[], params, &[])
            .await?
            .into_text()
    }

    /// Download a file without buffering it
    pub async fn download_stream(&self, file_seq: u64) -> Result<ByteStream> {
        let params = RequestParams::json(&DownloadRequest::direct(file_seq))?;
        self.v2_stream(&FILE_DOWNLOAD, &[], params).await
    }

    /// Upload a file into folder `node`, optionally under a different `name`
    ///
    /// POST /openapi/v2/files/upload/sync
    pub async fn upload(
        &self,
        node: &str,
        file: UploadSource,
        name: Option<&str>,
    ) -> Result<JsonObject> {
        let params = RequestParams::Multipart(upload_parts(node, file, name));
        self.v2_request(&FILE_UPLOAD, &[], params, &[])
            .await?
            .into_json()
    }

    /// POST /openapp/v1/files/rename/{node}
    pub async fn rename_file(&self, node: &str, file_seq: u64, name: &str) -> Result<bool> {
        let params = RequestParams::form(&RenameFileRequest {
            file_seq,
            name: name.to_string(),
        })?;

        let body = self
            .v1_request(&FILE_RENAME, &[("node", node)], params)
            .await?;
        Ok(success_flag(&body))
    }

    /// POST /openapp/v1/files/delete/{node}
    pub async fn delete_file(&self, node: &str, file_seq: u64) -> Result<bool> {
        let params = RequestParams::form(&FileSeqRequest { file_seq })?;

        let body = self
            .v1_request(&FILE_DELETE, &[("node", node)], params)
            .await?;
        Ok(success_flag(&body))
    }
}

/// `node` and `file` parts, plus `name` when given
pub(crate) fn upload_parts(
    node: &str,
    file: UploadSource,
    name: Option<&str>,
) -> Vec<MultipartPart> {
    let mut parts = vec![
        MultipartPart::text("node", node),
        MultipartPart::file("file", file.bytes, Some(file.file_name)),
    ];
    if let Some(name) = name {
        parts.push(MultipartPart::text("name", name));
    }
    parts
}

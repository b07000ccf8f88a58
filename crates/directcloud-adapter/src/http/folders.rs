/*
[INPUT]:  Folder nodes, sequence numbers and names
[OUTPUT]: Folder listings, folder details and operation outcomes
[POS]:    HTTP layer - folder endpoints (v1 and v2)
[UPDATE]: When adding new folder endpoints or changing parameters
*/

// ### Folder Endpoints

use crate::http::endpoints::{
    FOLDER_CREATE, FOLDER_DELETE, FOLDER_INFO, FOLDER_LIST, FOLDER_MOVE, FOLDER_RENAME,
};
use crate::http::{DirectCloudClient, DirectCloudError, RequestParams, Result};
use crate::types::{
    FileEntry, FolderEntry, FolderListing, JsonObject, ListQuery, MoveFolderRequest, NameRequest,
    success_flag,
};

impl DirectCloudClient {
    /// List sub-folders and files of a folder
    ///
    /// GET /openapi/v2/folders/lists?node={node}&limit={limit}
    pub async fn list(&self, node: &str) -> Result<FolderListing> {
        let params = RequestParams::query(&ListQuery {
            node: node.to_string(),
            limit: self.list_limit,
        })?;

        let mut body = self
            .v2_request(&FOLDER_LIST, &[], params, &[])
            .await?
            .into_json()?;
        let data = body.remove("data").ok_or_else(|| {
            DirectCloudError::InvalidResponse("folder listing without `data`".to_string())
        })?;
        Ok(serde_json::from_value(data)?)
    }

    /// Sub-folders of a folder
    pub async fn get_folder_list(&self, node: &str) -> Result<Vec<FolderEntry>> {
        Ok(self.list(node).await?.folders)
    }

    /// Files directly inside a folder
    pub async fn get_file_list(&self, node: &str) -> Result<Vec<FileEntry>> {
        Ok(self.list(node).await?.files)
    }

    /// Folder details
    ///
    /// GET /openapp/v1/folders/index/{node}/{dir_seq}
    pub async fn folder_info(&self, node: &str, dir_seq: u64) -> Result<JsonObject> {
        let dir_seq = dir_seq.to_string();
        self.v1_request(
            &FOLDER_INFO,
            &[("node", node), ("seq", &dir_seq)],
            RequestParams::None,
        )
        .await
    }

    /// Move folder `node` from `src_node` into `dst_node`
    ///
    /// PUT /openapi/v2/folders/move
    pub async fn move_folder(&self, dst_node: &str, src_node: &str, node: &str) -> Result<bool> {
        let params = RequestParams::form(&MoveFolderRequest {
            dst_node: dst_node.to_string(),
            src_node: src_node.to_string(),
            node: node.to_string(),
        })?;

        let payload = self.v2_request(&FOLDER_MOVE, &[], params, &[]).await?;
        Ok(payload.is_success())
    }

    /// Create folder `name` under `node`
    ///
    /// POST /openapp/v1/folders/create/{node}
    pub async fn create_folder(&self, node: &str, name: &str) -> Result<bool> {
        let params = RequestParams::form(&NameRequest {
            name: name.to_string(),
        })?;

        let body = self
            .v1_request(&FOLDER_CREATE, &[("node", node)], params)
            .await?;
        Ok(success_flag(&body))
    }

    /// POST /openapp/v1/folders/rename/{node}
    pub async fn rename_folder(&self, node: &str, name: &str) -> Result<bool> {
        let params = RequestParams::form(&NameRequest {
            name: name.to_string(),
        })?;

        let body = self
            .v1_request(&FOLDER_RENAME, &[("node", node)], params)
            .await?;
        Ok(success_flag(&body))
    }

    /// POST /openapp/v1/folders/delete/{node}
    pub async fn delete_folder(&self, node: &str) -> Result<bool> {
        let body = self
            .v1_request(&FOLDER_DELETE, &[("node", node)], RequestParams::None)
            .await?;
        Ok(success_flag(&body))
    }
}

/*
[INPUT]:  Operation names
[OUTPUT]: Method, path template and API generation per operation
[POS]:    HTTP layer - literal endpoint table consumed by dispatch
[UPDATE]: When the backend adds or moves an endpoint
*/

use reqwest::Method;

use crate::http::{DirectCloudError, Result};
use crate::types::ApiVersion;

/// One row of the endpoint table
///
/// `path` may contain `{name}` placeholders, each filling a whole segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub version: ApiVersion,
}

impl Endpoint {
    /// Split the template into URL segments, filling placeholders from `args`
    pub fn segments(&self, args: &[(&str, &str)]) -> Result<Vec<String>> {
        self.path
            .trim_start_matches('/')
            .split('/')
            .map(|segment| {
                let Some(name) = segment
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                else {
                    return Ok(segment.to_string());
                };

                args.iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| (*value).to_string())
                    .ok_or_else(|| {
                        DirectCloudError::Config(format!(
                            "missing path parameter `{name}` for {}",
                            self.path
                        ))
                    })
            })
            .collect()
    }
}

const fn v1(method: Method, path: &'static str) -> Endpoint {
    Endpoint {
        method,
        path,
        version: ApiVersion::V1,
    }
}

const fn v2(method: Method, path: &'static str) -> Endpoint {
    Endpoint {
        method,
        path,
        version: ApiVersion::V2,
    }
}

// ### Folders

pub const FOLDER_LIST: Endpoint = v2(Method::GET, "/openapi/v2/folders/lists");
pub const FOLDER_INFO: Endpoint = v1(Method::GET, "/openapp/v1/folders/index/{node}/{seq}");
pub const FOLDER_MOVE: Endpoint = v2(Method::PUT, "/openapi/v2/folders/move");
pub const FOLDER_CREATE: Endpoint = v1(Method::POST, "/openapp/v1/folders/create/{node}");
pub const FOLDER_RENAME: Endpoint = v1(Method::POST, "/openapp/v1/folders/rename/{node}");
pub const FOLDER_DELETE: Endpoint = v1(Method::POST, "/openapp/v1/folders/delete/{node}");

// ### Files

pub const FILE_INFO: Endpoint = v1(Method::GET, "/openapp/v1/files/index/{node}/{seq}");
pub const FILE_MOVE: Endpoint = v2(Method::PUT, "/openapi/v2/files/move");
pub const FILE_COPY: Endpoint = v2(Method::PUT, "/openapi/v2/files/copy");
pub const FILE_DOWNLOAD: Endpoint = v2(Method::POST, "/openapi/v2/files/download");
pub const FILE_UPLOAD: Endpoint = v2(Method::POST, "/openapi/v2/files/upload/sync");
pub const FILE_RENAME: Endpoint = v1(Method::POST, "/openapp/v1/files/rename/{node}");
pub const FILE_DELETE: Endpoint = v1(Method::POST, "/openapp/v1/files/delete/{node}");

// ### Links

pub const LINK_CREATE: Endpoint = v1(Method::POST, "/openapp/v1/links/create");

/*
[INPUT]:  HTTP client configuration, token provider and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod files;
pub mod folders;
pub mod links;
pub mod params;

pub use error::{DirectCloudError, Result};
pub use params::{MultipartPart, PartContents, RequestParams};

pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT, DirectCloudClient, ROOT_NODE};
pub use dispatch::ByteStream;
pub use endpoints::Endpoint;

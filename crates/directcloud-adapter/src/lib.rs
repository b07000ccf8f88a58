/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public DirectCloud adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AccessKeyTokenProvider,
    AccountInfo,
    AccountInfoTokenProvider,
    InMemoryTokenProvider,
    TokenProvider,
};

// Re-export commonly used types from http
pub use http::{
    ByteStream,
    ClientConfig,
    DirectCloudClient,
    DirectCloudError,
    Endpoint,
    MultipartPart,
    RequestParams,
    Result,
    ROOT_NODE,
};

// Re-export all types
pub use types::*;

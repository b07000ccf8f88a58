/*
[INPUT]:  Service credentials, account credentials or pre-issued tokens
[OUTPUT]: Bearer tokens and auth errors
[POS]:    Auth layer - handles DirectCloud token acquisition
[UPDATE]: When token sources or endpoints change
*/

pub mod access_key;
pub mod account_info;
mod jauth;
pub mod provider;

pub use access_key::AccessKeyTokenProvider;
pub use account_info::{AccountInfo, AccountInfoTokenProvider};
pub use provider::{InMemoryTokenProvider, TokenProvider};

/*
[INPUT]:  Typed request structs and multipart parts
[OUTPUT]: Parameter bags tagged with their wire encoding
[POS]:    HTTP layer - request body/query shaping shared by both API versions
[UPDATE]: When adding a new parameter encoding
*/

use std::fmt;

use bytes::Bytes;
use reqwest::RequestBuilder;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use crate::http::{DirectCloudError, Result};

/// Parameter bag attached to a request, tagged with its encoding
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestParams {
    #[default]
    None,
    Query(Vec<(String, String)>),
    Form(Vec<(String, String)>),
    Json(Value),
    Multipart(Vec<MultipartPart>),
}

impl RequestParams {
    /// Query string built from a flat serializable struct
    pub fn query<T: Serialize>(value: &T) -> Result<Self> {
        Ok(RequestParams::Query(to_pairs(value)?))
    }

    /// Form-encoded body built from a flat serializable struct
    pub fn form<T: Serialize>(value: &T) -> Result<Self> {
        Ok(RequestParams::Form(to_pairs(value)?))
    }

    /// JSON body
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(RequestParams::Json(serde_json::to_value(value)?))
    }

    /// Encoding name, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            RequestParams::None => "none",
            RequestParams::Query(_) => "query",
            RequestParams::Form(_) => "form",
            RequestParams::Json(_) => "json",
            RequestParams::Multipart(_) => "multipart",
        }
    }

    pub(crate) fn apply(self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            RequestParams::None => builder,
            RequestParams::Query(pairs) => builder.query(&pairs),
            RequestParams::Form(pairs) => builder.form(&pairs),
            RequestParams::Json(value) => builder.json(&value),
            RequestParams::Multipart(parts) => {
                let form = parts.into_iter().fold(Form::new(), |form, part| {
                    match part.contents {
                        PartContents::Text(text) => form.text(part.name, text),
                        PartContents::File { bytes, file_name } => {
                            let file_part = Part::bytes(bytes.to_vec());
                            let file_part = match file_name {
                                Some(file_name) => file_part.file_name(file_name),
                                None => file_part,
                            };
                            form.part(part.name, file_part)
                        }
                    }
                });
                builder.multipart(form)
            }
        }
    }
}

/// One named part of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPart {
    pub name: String,
    pub contents: PartContents,
}

impl MultipartPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: PartContents::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, bytes: Bytes, file_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            contents: PartContents::File { bytes, file_name },
        }
    }
}

#[derive(Clone, PartialEq)]
pub enum PartContents {
    Text(String),
    File {
        bytes: Bytes,
        file_name: Option<String>,
    },
}

impl fmt::Debug for PartContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartContents::Text(text) => f.debug_tuple("Text").field(text).finish(),
            PartContents::File { bytes, file_name } => f
                .debug_struct("File")
                .field("len", &bytes.len())
                .field("file_name", file_name)
                .finish(),
        }
    }
}

/// Flatten a struct into string pairs. `None` fields are dropped.
fn to_pairs<T: Serialize>(value: &T) -> Result<Vec<(String, String)>> {
    let Value::Object(object) = serde_json::to_value(value)? else {
        return Err(DirectCloudError::Config(
            "query and form parameters must serialize to an object".to_string(),
        ));
    };

    object
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| match value {
            Value::String(text) => Ok((key, text)),
            Value::Number(number) => Ok((key, number.to_string())),
            Value::Bool(flag) => Ok((key, flag.to_string())),
            other => Err(DirectCloudError::Config(format!(
                "parameter `{key}` must be a scalar, got {other}"
            ))),
        })
        .collect()
}

//! Response types returned by NIP-96 servers.
//!
//! Upload and list responses are handed back as raw JSON. The typed
//! [`FileListResponse`] documents the listing shape and is only used when a
//! caller asks for it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Server-defined upload response, passed through as decoded JSON.
pub type FileUploadResponse = Value;

/// One page of a NIP-96 file listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListResponse {
    /// Files in this page.
    pub count: u64,
    /// Files across all pages.
    pub total: u64,
    /// Current page index.
    pub page: u64,
    pub files: Vec<FileListEntry>,
}

/// A listed file, expressed as a NIP-94 event body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListEntry {
    /// `[key, value]` tag pairs.
    pub tags: Vec<(String, String)>,
    pub content: String,
    /// Unix timestamp (seconds).
    pub created_at: i64,
}

impl FileListResponse {
    /// Decodes a raw listing into the documented shape.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::ResponseParse)
    }
}

impl FileListEntry {
    /// Value of the first tag with the given key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Reads a success body and decodes it as JSON.
///
/// Body read failures are transport errors; undecodable bodies are
/// [`Error::ResponseParse`].
pub(crate) async fn read_json(response: reqwest::Response) -> Result<Value> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(Error::ResponseParse)
}

/// Value of the first `[key, value, ..]` tag in the response's `nip94_event`.
pub fn nip94_tag<'a>(response: &'a FileUploadResponse, key: &str) -> Option<&'a str> {
    response
        .get("nip94_event")?
        .get("tags")?
        .as_array()?
        .iter()
        .filter_map(Value::as_array)
        .filter(|tag| tag.first().and_then(Value::as_str) == Some(key))
        .find_map(|tag| tag.get(1)?.as_str())
}

/// Download URL of an uploaded file.
///
/// Prefers the NIP-94 `url` tag; falls back to a top-level `url` string.
pub fn upload_url(response: &FileUploadResponse) -> Option<&str> {
    nip94_tag(response, "url").or_else(|| response.get("url")?.as_str())
}

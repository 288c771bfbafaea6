//! Multipart form construction for uploads.
//!
//! Optional fields always precede the file part: servers may validate the
//! file against values sent earlier in the body (e.g. a hash tag).

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Multipart field name carrying the file payload.
pub const FILE_FIELD: &str = "file";

const DEFAULT_FILE_NAME: &str = "file";

/// File payload sent as the final multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name reported in the part's `Content-Disposition`.
    pub name: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// MIME type of the part.
    pub content_type: String,
}

impl UploadFile {
    pub fn new(
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
            content_type: content_type.into(),
        }
    }

    /// Reads a file from disk, guessing its content type from the extension.
    ///
    /// Unknown extensions fall back to `application/octet-stream`.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        Ok(Self {
            name,
            bytes,
            content_type,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Ordered extra form fields sent ahead of the file.
///
/// Pairs keep insertion order. Pairs with an empty value are kept here but
/// never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Fields that will actually be sent, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Optional metadata fields defined by NIP-96 for uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalFormDataFields {
    /// Unix timestamp (as text) after which the server may delete the file.
    #[serde(default)]
    pub expiration: Option<String>,
    /// File size in bytes, as text.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    /// `avatar` or `banner`.
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    /// `"true"` asks the server to keep the file byte-for-byte.
    #[serde(default)]
    pub no_transform: Option<String>,
}

impl From<OptionalFormDataFields> for FormFields {
    fn from(fields: OptionalFormDataFields) -> Self {
        [
            ("expiration", fields.expiration),
            ("size", fields.size),
            ("alt", fields.alt),
            ("caption", fields.caption),
            ("media_type", fields.media_type),
            ("content_type", fields.content_type),
            ("no_transform", fields.no_transform),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect()
    }
}

/// Builds the upload body: present fields in order, then the file.
pub(crate) fn build_upload_form(file: UploadFile, fields: &FormFields) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in fields.present() {
        form = form.text(name.to_string(), value.to_string());
    }

    let part = Part::bytes(file.bytes)
        .file_name(file.name)
        .mime_str(&file.content_type)?;
    Ok(form.part(FILE_FIELD, part))
}

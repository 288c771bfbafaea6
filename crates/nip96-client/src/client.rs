//! Stateless NIP-96 client.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::form::{FormFields, UploadFile};
use crate::response::FileUploadResponse;
use crate::{list, upload};

/// HTTP client for NIP-96 upload and list endpoints.
///
/// Holds only the underlying reqwest client; every call is independent and
/// takes its endpoint and `Authorization` value as arguments.
#[derive(Debug, Clone)]
pub struct Nip96Client {
    client: reqwest::Client,
}

impl Nip96Client {
    /// Builds a client with the default transport (no timeout).
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: config.build_http_client()?,
        })
    }

    /// Wraps a caller-built reqwest client.
    pub const fn with_http_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Uploads `file` to `server_api_url`.
    ///
    /// Non-empty `fields` are sent first, in order, and the file last under
    /// the `file` field. `authorization_header` is sent verbatim.
    pub async fn upload(
        &self,
        file: UploadFile,
        server_api_url: &str,
        authorization_header: &str,
        fields: &FormFields,
    ) -> Result<FileUploadResponse> {
        upload::upload_file(
            &self.client,
            file,
            server_api_url,
            authorization_header,
            fields,
        )
        .await
    }

    /// Lists files stored on the server.
    ///
    /// The listing is returned as raw JSON; see
    /// [`FileListResponse::from_value`](crate::FileListResponse::from_value)
    /// for a typed view.
    pub async fn list_files(
        &self,
        server_api_url: &str,
        authorization_header: &str,
    ) -> Result<Value> {
        list::list_files(&self.client, server_api_url, authorization_header).await
    }
}

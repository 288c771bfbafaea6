//! Authenticated file listings.

use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::response::read_json;

pub(crate) async fn list_files(
    client: &reqwest::Client,
    server_api_url: &str,
    authorization_header: &str,
) -> Result<Value> {
    tracing::debug!(url = server_api_url, "listing files");

    let response = client
        .get(server_api_url)
        .header(AUTHORIZATION, authorization_header)
        .send()
        .await?;

    let status = response.status();
    tracing::debug!(status = status.as_u16(), "list response received");
    if !status.is_success() {
        return Err(Error::List { status });
    }
    read_json(response).await
}

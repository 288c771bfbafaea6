//! Authenticated multipart uploads.

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::form::{build_upload_form, FormFields, UploadFile};
use crate::response::{read_json, FileUploadResponse};

/// Maps a non-success upload status to its error kind.
///
/// Returns `None` for 2xx statuses.
pub fn upload_status_error(status: StatusCode) -> Option<Error> {
    if status.is_success() {
        return None;
    }
    Some(match status.as_u16() {
        413 => Error::TooLarge,
        400 => Error::BadRequest,
        403 => Error::Forbidden,
        402 => Error::PaymentRequired,
        _ => Error::UnknownUpload { status },
    })
}

pub(crate) async fn upload_file(
    client: &reqwest::Client,
    file: UploadFile,
    server_api_url: &str,
    authorization_header: &str,
    fields: &FormFields,
) -> Result<FileUploadResponse> {
    tracing::debug!(
        url = server_api_url,
        file_name = %file.name,
        file_size = file.len(),
        fields = fields.present().count(),
        "uploading file"
    );

    let form = build_upload_form(file, fields)?;
    let response = client
        .post(server_api_url)
        .header(AUTHORIZATION, authorization_header)
        .multipart(form)
        .send()
        .await?;

    let status = response.status();
    tracing::debug!(status = status.as_u16(), "upload response received");
    if let Some(error) = upload_status_error(status) {
        return Err(error);
    }
    read_json(response).await
}

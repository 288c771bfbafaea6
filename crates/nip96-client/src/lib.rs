//! nip96-client - Client for NIP-96 file storage servers
//!
//! Uploads files as multipart forms and lists stored files. The caller
//! supplies the endpoint URL and a pre-built `Authorization` value (usually a
//! NIP-98 event); this crate never signs anything itself.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
mod list;
pub mod response;
pub mod upload;

#[cfg(test)]
mod test_support;

pub use client::Nip96Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use form::{FormFields, OptionalFormDataFields, UploadFile};
pub use response::{nip94_tag, upload_url, FileListEntry, FileListResponse, FileUploadResponse};

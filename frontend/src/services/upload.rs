//! HTTP service posting the selected file to the upload endpoint.

use std::fmt;

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::{FileHandle, UploadEndpoint, UploadError, UploadResult, FILE_FIELD_NAME};

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Response text; empty when not read or unreadable.
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Map the response onto the upload outcome. 2xx bodies are ignored.
    pub fn into_result(self) -> UploadResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(UploadError::Rejected {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// Sends one file as a multipart POST.
///
/// Implementations return [`UploadError::Transport`] when the request does
/// not complete, and a [`RawResponse`] for every status the server answers
/// with. Not `Send`: uploads run on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    type File: FileHandle;

    async fn post_file(&self, url: &str, file: &Self::File) -> UploadResult<RawResponse>;
}

/// Post the file once and classify the answer. No retries at any tier.
pub async fn send_upload<T: UploadTransport>(
    transport: &T,
    endpoint: &UploadEndpoint,
    file: &T::File,
) -> UploadResult<()> {
    log::info!("📤 Uploading {} to {}", file.name(), endpoint);
    transport.post_file(endpoint.as_str(), file).await?.into_result()
}

/// Browser transport backed by `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl UploadTransport for HttpTransport {
    type File = File;

    async fn post_file(&self, url: &str, file: &File) -> UploadResult<RawResponse> {
        let form_data = FormData::new().map_err(|e| js_failure("create FormData", e))?;
        form_data
            .append_with_blob_and_filename(FILE_FIELD_NAME, file, &file.name())
            .map_err(|e| js_failure("append file", e))?;

        let response = Request::post(url)
            .body(form_data)
            .map_err(|e| UploadError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if response.ok() {
            return Ok(RawResponse { status, body: String::new() });
        }

        let body = body_or_empty(status, response.text().await);
        Ok(RawResponse { status, body })
    }
}

/// Best effort: an unreadable error body becomes empty text.
fn body_or_empty<E: fmt::Display>(status: u16, read: Result<String, E>) -> String {
    read.unwrap_or_else(|e| {
        log::warn!("Could not read error body for status {}: {}", status, e);
        String::new()
    })
}

fn js_failure(step: &str, e: JsValue) -> UploadError {
    UploadError::Transport(format!("Failed to {}: {:?}", step, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ranges() {
        let ok = RawResponse { status: 201, body: "ignored".into() };
        assert!(ok.is_success());
        assert_eq!(ok.into_result(), Ok(()));

        let redirect = RawResponse { status: 302, body: String::new() };
        assert!(!redirect.is_success());

        let rejected = RawResponse { status: 400, body: "File is empty".into() };
        assert_eq!(
            rejected.into_result(),
            Err(UploadError::Rejected { status: 400, body: "File is empty".into() })
        );
    }

    #[test]
    fn test_unreadable_body_becomes_empty() {
        let read: Result<String, &str> = Err("body stream already read");
        assert_eq!(body_or_empty(500, read), "");

        let body = body_or_empty(500, Ok::<_, &str>("Error processing file".to_string()));
        assert_eq!(body, "Error processing file");
    }

    #[test]
    fn test_unreadable_body_rejection_has_no_trailing_fragment() {
        let body = body_or_empty(500, Err::<String, _>("decode failure"));
        let err = RawResponse { status: 500, body }.into_result().unwrap_err();
        assert_eq!(err.user_message(), "Error: 500");
    }
}

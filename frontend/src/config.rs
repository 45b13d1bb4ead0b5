//! Application configuration.
//!
//! Centralized configuration for the uploader frontend. Values are fixed
//! at build time; the upload endpoint can be overridden with the
//! `UPLOAD_ENDPOINT` environment variable when running `trunk build`.

use std::fmt;

/// Path-relative endpoint, resolved by the reverse proxy serving the UI.
pub const PROXIED_UPLOAD_PATH: &str = "/api/excel/upload";

/// Upload endpoint used by the widget.
///
/// Outside the proxy, point it at the backend directly:
/// `UPLOAD_ENDPOINT=http://localhost:8080/api/excel/upload trunk serve`.
pub const UPLOAD_ENDPOINT: &str = match option_env!("UPLOAD_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => PROXIED_UPLOAD_PATH,
};

/// Name of the multipart part carrying the file.
pub const FILE_FIELD_NAME: &str = "file";

/// Where uploads are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadEndpoint {
    /// Full URL to a known host.
    Absolute(String),
    /// Path on the page's own origin.
    Relative(String),
}

impl UploadEndpoint {
    /// Classify a configured endpoint string.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            UploadEndpoint::Absolute(raw.to_string())
        } else {
            UploadEndpoint::Relative(raw.to_string())
        }
    }

    /// The endpoint compiled into this build.
    pub fn configured() -> Self {
        Self::parse(UPLOAD_ENDPOINT)
    }

    /// URL handed to `fetch`. The browser resolves relative paths itself.
    pub fn as_str(&self) -> &str {
        match self {
            UploadEndpoint::Absolute(url) => url,
            UploadEndpoint::Relative(path) => path,
        }
    }
}

impl fmt::Display for UploadEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_and_relative() {
        let dev = "http://localhost:8080/api/excel/upload";
        assert_eq!(UploadEndpoint::parse(dev), UploadEndpoint::Absolute(dev.to_string()));
        assert!(matches!(
            UploadEndpoint::parse("https://files.example.com/upload"),
            UploadEndpoint::Absolute(_)
        ));
        assert_eq!(
            UploadEndpoint::parse(PROXIED_UPLOAD_PATH),
            UploadEndpoint::Relative(PROXIED_UPLOAD_PATH.to_string())
        );
        assert!(matches!(UploadEndpoint::parse("api/upload"), UploadEndpoint::Relative(_)));
    }

    #[test]
    fn test_fetch_url_is_passed_through() {
        assert_eq!(UploadEndpoint::parse("  /api/excel/upload ").as_str(), "/api/excel/upload");
        assert_eq!(
            UploadEndpoint::parse("https://files.example.com/upload").to_string(),
            "https://files.example.com/upload"
        );
    }
}

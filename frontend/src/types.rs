//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Status Types** - Outcome classification shown to the user
//! - **File Types** - Abstraction over the browser file handle
//! - **Error Types** - Upload failure taxonomy

use thiserror::Error;

// =============================================================================
// Status Types
// =============================================================================

/// Message shown after a 2xx response.
pub const SUCCESS_MESSAGE: &str = "Success! File uploaded successfully.";

/// Message shown when upload is requested without a selected file.
pub const NO_FILE_MESSAGE: &str = "Please select a file first.";

/// Message shown when the request never completed.
pub const NETWORK_ERROR_MESSAGE: &str = "An error occurred. Please check your network connection.";

/// Classification of the last upload outcome.
///
/// Drives both the status message styling and the tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusCategory {
    /// Nothing attempted since the last file selection
    #[default]
    Neutral,
    /// Service answered with a 2xx status
    Success,
    /// Any other outcome
    Error,
}

impl StatusCategory {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusCategory::Neutral => "status-neutral",
            StatusCategory::Success => "status-success",
            StatusCategory::Error => "status-error",
        }
    }
}

// =============================================================================
// File Types
// =============================================================================

/// A user-selected local file.
pub trait FileHandle {
    /// File name as reported by the picker.
    fn name(&self) -> String;
}

impl FileHandle for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Ways an upload attempt can fail.
///
/// `Display` is the diagnostic form written to the console;
/// [`UploadError::user_message`] is what the widget shows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Submit pressed with no file selected. Never reaches the network.
    #[error("no file selected")]
    NoFileSelected,

    /// Service answered with a non-2xx status.
    #[error("upload rejected with status {status}: {body:?}")]
    Rejected { status: u16, body: String },

    /// Request did not complete (offline, DNS, CORS, aborted).
    #[error("transport failure: {0}")]
    Transport(String),
}

impl UploadError {
    /// Text displayed in the status banner.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::NoFileSelected => NO_FILE_MESSAGE.to_string(),
            UploadError::Rejected { status, body } if body.trim().is_empty() => {
                format!("Error: {}", status)
            }
            UploadError::Rejected { status, body } => format!("Error: {} - {}", status, body),
            UploadError::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_embeds_status_and_body() {
        let err = UploadError::Rejected {
            status: 400,
            body: "Only .xlsx and .json files are supported".into(),
        };
        assert_eq!(
            err.user_message(),
            "Error: 400 - Only .xlsx and .json files are supported"
        );
    }

    #[test]
    fn test_rejection_without_body_has_no_trailing_fragment() {
        let err = UploadError::Rejected { status: 502, body: String::new() };
        assert_eq!(err.user_message(), "Error: 502");

        let err = UploadError::Rejected { status: 500, body: " \r\n\t ".into() };
        assert_eq!(err.user_message(), "Error: 500");
    }

    #[test]
    fn test_transport_detail_stays_out_of_user_message() {
        let err = UploadError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
        assert!(err.to_string().contains("Failed to fetch"));
    }

    #[test]
    fn test_css_classes_are_distinct() {
        assert_ne!(StatusCategory::Neutral.css_class(), StatusCategory::Success.css_class());
        assert_ne!(StatusCategory::Success.css_class(), StatusCategory::Error.css_class());
        assert_eq!(StatusCategory::default(), StatusCategory::Neutral);
    }
}

//! UI Components for the uploader.
//!
//! - [`Hero`] - Page title
//! - [`UploadSection`] - File selection, upload button and status
//! - [`StatusBanner`] - Success/error message display

mod hero;
mod status;
mod upload;

pub use hero::*;
pub use status::*;
pub use upload::*;

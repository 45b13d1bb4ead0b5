//! Backend communication.
//!
//! - [`upload`] - Multipart file upload to the configured endpoint

pub mod upload;

pub use upload::*;

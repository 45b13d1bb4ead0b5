//! File Uploader - Frontend Rust/Leptos Application
//!
//! A WebAssembly page that lets a user pick one local file and post it as
//! multipart/form-data to the upload endpoint, then shows the outcome.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title)                                                │
//! │  UploadSection                                               │
//! │  ├── file input + selected file name                        │
//! │  ├── Upload button ──▶ HttpTransport ──▶ UPLOAD_ENDPOINT    │
//! │  └── StatusBanner (neutral / success / error)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint configuration
//! - [`types`] - Status, file handle and error types
//! - [`widget`] - Upload state and lifecycle
//! - [`components`] - UI components
//! - [`services`] - HTTP transport

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod widget;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Status
    StatusCategory, SUCCESS_MESSAGE, NO_FILE_MESSAGE, NETWORK_ERROR_MESSAGE,
    // Files
    FileHandle,
    // Errors
    UploadError, UploadResult,
};

// Upload lifecycle
pub use widget::{submit_upload, StateCell, UploadState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic hook and console logging, then mount the app.
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let endpoint = UploadEndpoint::configured();
    log::info!("🦀 File Uploader - Starting Leptos App (endpoint: {})", endpoint);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="File Uploader"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <div class="card">
                <Hero/>
                <UploadSection endpoint=UploadEndpoint::configured()/>
            </div>
        </div>
    }
}

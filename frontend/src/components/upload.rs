//! File upload component.
//!
//! Binds an [`UploadState`] signal to a file input, an upload button and
//! the status banner. Each click spawns one independent request.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::HttpTransport;
use crate::widget::{submit_upload, StateCell};
use crate::{StatusBanner, UploadEndpoint, UploadState};

impl<F: 'static> StateCell<F> for RwSignal<UploadState<F>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut UploadState<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[component]
pub fn UploadSection(
    /// Where the file is posted
    endpoint: UploadEndpoint,
) -> impl IntoView {
    let state = create_rw_signal(UploadState::<File>::new());
    let endpoint = store_value(endpoint);

    // Only the first entry is honored; a cancelled dialog clears the selection
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        state.update(|s| s.pick(file));
    };

    let on_upload = move |_| {
        if let Some(task) = submit_upload(state, HttpTransport, endpoint.get_value()) {
            spawn_local(task);
        }
    };

    let has_file = move || state.with(|s| s.has_file());

    view! {
        <div class="upload-section">
            <label for="fileInput" class="upload-label">
                "Select a file to upload:"
            </label>
            <input
                type="file"
                id="fileInput"
                class="file-input"
                on:change=on_file_change
            />

            <Show
                when=has_file
                fallback=|| view! { }
            >
                <p class="selected-file">
                    "Selected file: "
                    <span class="file-name">
                        {move || state.with(|s| s.selected_name().unwrap_or_default())}
                    </span>
                </p>
            </Show>

            <button
                class="upload-button"
                class:disabled=move || !has_file()
                disabled=move || !has_file()
                on:click=on_upload
            >
                "Upload File"
            </button>

            <StatusBanner
                message=Signal::derive(move || state.with(|s| s.message().to_string()))
                status=Signal::derive(move || state.with(|s| s.status()))
            />
        </div>
    }
}

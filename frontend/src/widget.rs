//! Upload lifecycle: selected file, status message, status category.
//!
//! [`UploadState`] holds the three fields and the transitions between them.
//! [`submit_upload`] drives one attempt against any [`StateCell`], so the
//! Leptos view and a plain `RefCell` go through the same code.
//!
//! ```text
//!  any ──select / cancel──▶ neutral
//!  any ──submit, no file──▶ error
//!  any ──submit, 2xx──▶ success
//!  any ──submit, non-2xx / transport failure──▶ error
//! ```

use std::cell::RefCell;
use std::future::Future;

use crate::services::{send_upload, UploadTransport};
use crate::{FileHandle, StatusCategory, UploadEndpoint, UploadError, UploadResult, SUCCESS_MESSAGE};

/// State of one uploader on the page.
#[derive(Clone, Debug)]
pub struct UploadState<F> {
    file: Option<F>,
    message: String,
    status: StatusCategory,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            file: None,
            message: String::new(),
            status: StatusCategory::Neutral,
        }
    }
}

impl<F: FileHandle> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection and clear any previous outcome.
    pub fn select_file(&mut self, file: F) {
        log::debug!("Selected file: {}", file.name());
        self.file = Some(file);
        self.reset_status();
    }

    /// Drop the selection, as after a cancelled file dialog.
    pub fn clear_selection(&mut self) {
        self.file = None;
        self.reset_status();
    }

    /// Apply what the file picker returned: its first file, or nothing.
    pub fn pick(&mut self, file: Option<F>) {
        match file {
            Some(file) => self.select_file(file),
            None => self.clear_selection(),
        }
    }

    fn reset_status(&mut self) {
        self.message.clear();
        self.status = StatusCategory::Neutral;
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn selected_name(&self) -> Option<String> {
        self.file.as_ref().map(FileHandle::name)
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Empty until an upload attempt finishes.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCategory {
        self.status
    }

    /// Store the outcome of one attempt as message and category.
    pub fn record(&mut self, result: UploadResult<()>) {
        match result {
            Ok(()) => {
                log::info!("✅ Upload successful");
                self.message = SUCCESS_MESSAGE.to_string();
                self.status = StatusCategory::Success;
            }
            Err(err) => {
                match &err {
                    UploadError::NoFileSelected => log::debug!("Upload requested without a file"),
                    UploadError::Rejected { .. } => log::warn!("❌ {}", err),
                    UploadError::Transport(_) => log::error!("❌ {}", err),
                }
                self.message = err.user_message();
                self.status = StatusCategory::Error;
            }
        }
    }
}

impl<F: FileHandle + Clone> UploadState<F> {
    /// File to send, or the no-file error recorded on the spot.
    fn begin_submit(&mut self) -> Option<F> {
        let file = self.file.clone();
        if file.is_none() {
            self.record(Err(UploadError::NoFileSelected));
        }
        file
    }
}

/// Shared, mutable home of an [`UploadState`].
pub trait StateCell<F> {
    /// Run `f` on the state. `None` when the state no longer exists.
    fn update_state<R>(&self, f: impl FnOnce(&mut UploadState<F>) -> R) -> Option<R>;
}

impl<F> StateCell<F> for RefCell<UploadState<F>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut UploadState<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<F, S: StateCell<F> + ?Sized> StateCell<F> for &S {
    fn update_state<R>(&self, f: impl FnOnce(&mut UploadState<F>) -> R) -> Option<R> {
        (**self).update_state(f)
    }
}

/// Start one upload attempt.
///
/// Without a selected file the error is recorded immediately and `None` is
/// returned: nothing to await, no request. Otherwise the returned future
/// posts the file once and records the outcome. Nothing prevents several
/// attempts from running at once; the last to finish wins.
pub fn submit_upload<S, T>(
    state: S,
    transport: T,
    endpoint: UploadEndpoint,
) -> Option<impl Future<Output = ()>>
where
    S: StateCell<T::File>,
    T: UploadTransport,
    T::File: Clone,
{
    let file = state.update_state(|s| s.begin_submit()).flatten()?;
    Some(async move {
        let result = send_upload(&transport, &endpoint, &file).await;
        state.update_state(|s| s.record(result));
    })
}

//! Upload outcome banner.

use leptos::*;
use crate::StatusCategory;

/// Shows the last outcome; hidden while the message is empty.
#[component]
pub fn StatusBanner(
    message: Signal<String>,
    status: Signal<StatusCategory>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !message.get().is_empty()
            fallback=|| view! { }
        >
            <div class=move || format!("status-message {}", status.get().css_class())>
                {move || message.get()}
            </div>
        </Show>
    }
}

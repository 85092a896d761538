use crate::components::ui::Spinner;
use leptos::prelude::*;

/// Placeholder shown in a list container while its notes are being fetched.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center p-5" data-name="LoadingIndicator">
            <Spinner class="size-10 text-primary" />
            <span class="sr-only">"Loading notes..."</span>
        </div>
    }
}

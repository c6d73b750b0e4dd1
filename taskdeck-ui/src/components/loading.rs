//! Loading Component

use leptos::*;
use taskdeck::board::LOADING_MESSAGE;

/// Spinner with the loading message, shown in place of the list
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 space-x-3 text-gray-400">
            <div class="loading-spinner w-6 h-6" />
            <span>{LOADING_MESSAGE}</span>
        </div>
    }
}

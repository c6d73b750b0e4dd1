//! Toast Notification Component
//!
//! Shows the board's last failure until it is dismissed.

use leptos::*;

use crate::state::BoardState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<BoardState>();

    view! {
        <div class="fixed bottom-28 right-4 z-50 space-y-2">
            {move || {
                state
                    .board
                    .with(|b| b.error().map(|e| e.to_string()))
                    .map(|message| view! {
                        <ToastMessage message=message on_dismiss=move || state.dismiss_error() />
                    })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    on_dismiss: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg">
            <span class="text-lg">"✕"</span>
            <span class="text-sm font-medium">{message}</span>
            <button
                on:click=move |_| on_dismiss()
                class="text-white/80 hover:text-white"
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}

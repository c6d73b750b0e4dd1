//! Search Bar Component

use leptos::*;

use crate::state::BoardState;

/// Text input bound to the board's search term
#[component]
pub fn SearchBar() -> impl IntoView {
    let state = expect_context::<BoardState>();

    view! {
        <input
            type="text"
            placeholder="Search tasks..."
            prop:value=move || state.board.with(|b| b.search_term().to_string())
            on:input=move |ev| state.set_search(event_target_value(&ev))
            class="w-full p-3 bg-slate-700 text-gray-200 border border-slate-600 rounded-lg
                   focus:ring-2 focus:ring-sky-500 focus:border-transparent outline-none
                   placeholder-slate-400"
        />
    }
}

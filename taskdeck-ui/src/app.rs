//! App Root Component
//!
//! Page layout and the board state provider.

use leptos::*;

use crate::components::{AddTaskModal, SearchBar, TaskList, Toast};
use crate::state::provide_board_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_board_state();

    // Initial fetch, once per mount
    state.load();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 to-slate-700 flex flex-col items-center py-8 px-4">
            <div class="w-full max-w-2xl bg-slate-800 rounded-xl shadow-2xl p-6 md:p-8">
                <header class="mb-8">
                    <h1 class="text-4xl font-bold text-center text-sky-400 mb-6">"My To-Do List"</h1>
                    <SearchBar />
                </header>

                <main class="mb-8 min-h-[300px]">
                    <TaskList />
                </main>
            </div>

            // Floating add button
            <button
                on:click=move |_| state.open_dialog()
                disabled=move || state.board.with(|b| b.is_loading())
                class="fixed bottom-8 right-8 bg-sky-500 hover:bg-sky-600 disabled:bg-gray-600
                       text-white text-3xl w-16 h-16 rounded-full shadow-xl"
                aria-label="Add new to-do"
            >
                "+"
            </button>

            <AddTaskModal />
            <Toast />

            <footer class="text-center text-gray-400 mt-12 text-sm">
                <p>"Powered by Leptos"</p>
            </footer>
        </div>
    }
}

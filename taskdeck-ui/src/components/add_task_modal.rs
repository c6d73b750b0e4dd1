//! Add Task Dialog
//!
//! Modal form for entering a new task. Closes on submit, on the close
//! button, or on a click outside the panel.

use leptos::*;

use crate::state::BoardState;

#[component]
pub fn AddTaskModal() -> impl IntoView {
    let state = expect_context::<BoardState>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.submit_draft();
    };

    move || {
        state.board.with(|b| b.is_add_dialog_open()).then(|| view! {
            <div
                class="fixed inset-0 bg-black bg-opacity-75 flex items-center justify-center p-4 z-50"
                on:click=move |_| state.close_dialog()
            >
                <div
                    class="bg-slate-800 p-6 md:p-8 rounded-xl shadow-2xl w-full max-w-md"
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    <div class="flex justify-between items-center mb-6">
                        <h2 class="text-2xl font-semibold text-sky-400">"Add New Task"</h2>
                        <button
                            type="button"
                            on:click=move |_| state.close_dialog()
                            class="text-slate-400 hover:text-slate-200 p-1 rounded-full"
                            aria-label="Close modal"
                        >
                            "✕"
                        </button>
                    </div>
                    <form on:submit=on_submit>
                        <input
                            type="text"
                            placeholder="What needs to be done?"
                            prop:value=move || state.board.with(|b| b.draft().to_string())
                            on:input=move |ev| state.set_draft(event_target_value(&ev))
                            class="w-full p-3 mb-6 bg-slate-700 text-gray-200 border border-slate-600
                                   rounded-lg outline-none placeholder-slate-400"
                            autofocus=true
                        />
                        <button
                            type="submit"
                            class="w-full bg-sky-500 hover:bg-sky-600 text-white font-semibold
                                   py-3 px-4 rounded-lg shadow-md"
                        >
                            "+ Add Task"
                        </button>
                    </form>
                </div>
            </div>
        })
    }
}

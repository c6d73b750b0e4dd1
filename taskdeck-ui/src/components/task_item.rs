//! Task Item Component

use leptos::*;
use taskdeck::task::Task;

use crate::state::BoardState;

/// One row: completion toggle, text, delete button
#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let state = expect_context::<BoardState>();
    let id = task.id;
    let done = task.status;

    let row_class = format!(
        "flex items-center justify-between p-4 bg-slate-700 rounded-lg shadow-md {}",
        if done { "opacity-60" } else { "opacity-100" }
    );
    let toggle_class = if done {
        "w-7 h-7 mr-4 rounded-full border-2 flex items-center justify-center bg-green-500 border-green-500"
    } else {
        "w-7 h-7 mr-4 rounded-full border-2 flex items-center justify-center border-slate-500 hover:border-sky-400"
    };
    let toggle_label = if done { "Mark as incomplete" } else { "Mark as complete" };
    let text_class = if done {
        "flex-grow text-lg line-through text-slate-400"
    } else {
        "flex-grow text-lg text-gray-100"
    };

    view! {
        <li class=row_class>
            <div class="flex items-center flex-grow">
                <button
                    on:click=move |_| state.toggle(id)
                    class=toggle_class
                    aria-label=toggle_label
                >
                    {done.then(|| view! { <span class="text-white text-sm">"✓"</span> })}
                </button>
                <span class=text_class>{task.text}</span>
            </div>
            <button
                on:click=move |_| state.delete(id)
                class="p-2 text-slate-400 hover:text-red-500 rounded-md"
                aria-label="Delete to-do"
            >
                "✕"
            </button>
        </li>
    }
}

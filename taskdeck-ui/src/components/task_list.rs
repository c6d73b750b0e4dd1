//! Task List Component
//!
//! Renders whatever the board says the list area shows.

use leptos::*;
use taskdeck::board::{BoardView, EMPTY_MESSAGE};
use taskdeck::task::Task;

use crate::components::{Loading, TaskItem};
use crate::state::BoardState;

/// Owned snapshot of the board's view, taken outside the signal borrow
#[derive(Debug, Clone, PartialEq)]
enum ListArea {
    Loading,
    Failed(String),
    Empty,
    Tasks(Vec<Task>),
}

impl From<BoardView<'_>> for ListArea {
    fn from(view: BoardView<'_>) -> Self {
        match view {
            BoardView::Loading => ListArea::Loading,
            BoardView::Failed(err) => ListArea::Failed(err.to_string()),
            BoardView::Empty => ListArea::Empty,
            BoardView::Tasks(tasks) => ListArea::Tasks(tasks.into_iter().cloned().collect()),
        }
    }
}

/// List area of the page
#[component]
pub fn TaskList() -> impl IntoView {
    let state = expect_context::<BoardState>();

    move || match state.board.with(|b| ListArea::from(b.view())) {
        ListArea::Loading => view! { <Loading /> }.into_view(),
        ListArea::Failed(message) => view! {
            <p class="text-center text-red-400 py-10">{message}</p>
        }
        .into_view(),
        ListArea::Empty => view! {
            <p class="text-center text-slate-400 py-10 text-lg">{EMPTY_MESSAGE}</p>
        }
        .into_view(),
        ListArea::Tasks(tasks) => view! {
            <ul class="space-y-3">
                {tasks.into_iter().map(|task| view! { <TaskItem task=task /> }).collect_view()}
            </ul>
        }
        .into_view(),
    }
}

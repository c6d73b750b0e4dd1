//! Board State
//!
//! One `TaskBoard` held in a Leptos signal. Each action runs the board's
//! begin step, sends the request in the background, and applies the
//! outcome with the finish step.

use leptos::*;
use taskdeck::board::TaskBoard;
use taskdeck::task::TaskId;
use wasm_bindgen::JsValue;

use crate::api;

/// Board state provided to all components
#[derive(Clone, Copy)]
pub struct BoardState {
    pub board: RwSignal<TaskBoard>,
}

/// Provide board state to the component tree
pub fn provide_board_state() -> BoardState {
    let state = BoardState {
        board: create_rw_signal(TaskBoard::new()),
    };
    provide_context(state);
    state
}

impl BoardState {
    /// Fetch the full list from the API
    pub fn load(self) {
        self.board.update(|b| b.begin_load());

        spawn_local(async move {
            let result = api::fetch_tasks().await;
            self.board.update(|b| b.finish_load(result));
            self.after_request();
        });
    }

    /// Submit the add dialog's text
    pub fn submit_draft(self) {
        let Some(new_task) = self.board.try_update(|b| b.submit_draft()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = api::add_task(&new_task).await;
            self.board.update(|b| b.finish_add(result));
            self.after_request();
        });
    }

    pub fn delete(self, id: TaskId) {
        let Some(id) = self.board.try_update(|b| b.begin_delete(id)) else {
            return;
        };

        spawn_local(async move {
            let result = api::delete_task(id).await;
            self.board.update(|b| b.finish_delete(id, result));
            self.after_request();
        });
    }

    pub fn toggle(self, id: TaskId) {
        let Some(updated) = self.board.try_update(|b| b.begin_toggle(id)).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = api::update_task(&updated).await;
            self.board.update(|b| b.finish_toggle(id, result));
            self.after_request();
        });
    }

    pub fn set_search(self, term: String) {
        self.board.update(|b| b.set_search_term(term));
    }

    pub fn open_dialog(self) {
        self.board.update(|b| {
            b.open_add_dialog();
        });
    }

    pub fn close_dialog(self) {
        self.board.update(|b| b.close_add_dialog());
    }

    pub fn set_draft(self, text: String) {
        self.board.update(|b| b.set_draft(text));
    }

    pub fn dismiss_error(self) {
        self.board.update(|b| b.dismiss_error());
    }

    /// Mirror a failure to the browser console. The board keeps it until
    /// the user dismisses it or starts another operation.
    fn after_request(self) {
        if let Some(message) = self.board.with_untracked(failure_message) {
            web_sys::console::warn_1(&JsValue::from_str(&message));
        }
    }
}

fn failure_message(board: &TaskBoard) -> Option<String> {
    board.error().map(|e| e.to_string())
}

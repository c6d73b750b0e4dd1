//! UI Components
//!
//! Leptos components for the to-do list.

pub mod add_task_modal;
pub mod loading;
pub mod search_bar;
pub mod task_item;
pub mod task_list;
pub mod toast;

pub use add_task_modal::AddTaskModal;
pub use loading::Loading;
pub use search_bar::SearchBar;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use toast::Toast;

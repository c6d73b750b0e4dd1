//! Taskdeck Web
//!
//! Browser front end for the to-do list, built with Leptos (WASM).
//!
//! # Features
//!
//! - Task list, newest first, filtered by a search bar
//! - Add dialog, toggle-complete and delete buttons
//! - Error toast for failed requests
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It keeps one `TaskBoard` in a signal and talks to the task
//! API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

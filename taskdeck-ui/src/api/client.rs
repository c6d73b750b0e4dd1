//! HTTP API Client
//!
//! Functions for communicating with the task REST API.

use gloo_net::http::{Request, Response};
use taskdeck::client::{ApiError, ApiResult, Endpoint, Endpoints, DEFAULT_API_BASE};
use taskdeck::task::{NewTask, Task, TaskId};

/// Local storage key holding an alternate API base URL
pub const API_URL_KEY: &str = "taskdeck_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    endpoints_for(stored.as_deref()).base().to_string()
}

fn endpoints_for(stored: Option<&str>) -> Endpoints {
    match stored.map(str::trim) {
        Some(url) if !url.is_empty() => Endpoints::new(url),
        _ => Endpoints::new(DEFAULT_API_BASE),
    }
}

fn endpoints() -> Endpoints {
    Endpoints::new(get_api_base())
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn decode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

fn ensure_ok(response: Response, endpoint: Endpoint) -> ApiResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::status(endpoint, response.status()))
    }
}

// ============ API Functions ============

/// Fetch all tasks
pub async fn fetch_tasks() -> ApiResult<Vec<Task>> {
    let response = Request::get(&endpoints().list())
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response, Endpoint::List)?
        .json()
        .await
        .map_err(decode_error)
}

/// Create a task; the server echoes it back with an id
pub async fn add_task(task: &NewTask) -> ApiResult<Task> {
    let response = Request::post(&endpoints().add())
        .json(task)
        .map_err(|e| ApiError::Setup(e.to_string()))?
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response, Endpoint::Add)?
        .json()
        .await
        .map_err(decode_error)
}

/// Delete a task
pub async fn delete_task(id: TaskId) -> ApiResult<()> {
    let response = Request::delete(&endpoints().delete(id))
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response, Endpoint::Delete).map(|_| ())
}

/// Send the full task (with its new status) to the update endpoint
pub async fn update_task(task: &Task) -> ApiResult<()> {
    let response = Request::put(&endpoints().update(task.id))
        .json(task)
        .map_err(|e| ApiError::Setup(e.to_string()))?
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response, Endpoint::Update).map(|_| ())
}

//! HTTP Task API Client
//!
//! `reqwest` client for the remote to-do API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{ApiError, ApiResult, Endpoint, Endpoints, TaskApi, DEFAULT_API_BASE};
use crate::task::{NewTask, Task, TaskId};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API (e.g., "http://localhost:8080/api")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

/// Task API over HTTP
pub struct HttpTaskApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpTaskApi {
    /// Create a new client with the given configuration
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ApiError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(&config.base_url),
        })
    }

    /// Map a non-success status to the endpoint's failure message
    async fn ensure_success(response: Response, endpoint: Endpoint) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            endpoint = %endpoint,
            status = status.as_u16(),
            body = %body,
            "Task API returned an error status"
        );
        Err(ApiError::status(endpoint, status.as_u16()))
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let url = self.endpoints.list();
        tracing::debug!(%url, "GET tasks");

        let response = self.client.get(&url).send().await?;
        let response = Self::ensure_success(response, Endpoint::List).await?;

        Ok(response.json().await?)
    }

    async fn add_task(&self, task: &NewTask) -> ApiResult<Task> {
        let url = self.endpoints.add();
        tracing::debug!(%url, text = %task.text, "POST task");

        let response = self.client.post(&url).json(task).send().await?;
        let response = Self::ensure_success(response, Endpoint::Add).await?;

        Ok(response.json().await?)
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        let url = self.endpoints.delete(id);
        tracing::debug!(%url, "DELETE task");

        let response = self.client.delete(&url).send().await?;
        Self::ensure_success(response, Endpoint::Delete).await?;

        Ok(())
    }

    async fn update_task(&self, task: &Task) -> ApiResult<()> {
        let url = self.endpoints.update(task.id);
        tracing::debug!(%url, status = task.status, "PUT task");

        let response = self.client.put(&url).json(task).send().await?;
        Self::ensure_success(response, Endpoint::Update).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        routing::{delete, get, post, put},
        Json, Router,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct StubStore {
        tasks: Vec<Task>,
        next_id: i64,
    }

    type Stub = Arc<Mutex<StubStore>>;

    async fn list(State(store): State<Stub>) -> Json<Vec<Task>> {
        Json(store.lock().unwrap().tasks.clone())
    }

    async fn add(State(store): State<Stub>, Json(new_task): Json<NewTask>) -> Json<Task> {
        let mut store = store.lock().unwrap();
        store.next_id += 1;
        let task = new_task.with_id(TaskId(store.next_id));
        store.tasks.push(task.clone());
        Json(task)
    }

    async fn remove(State(store): State<Stub>, Path(id): Path<i64>) -> &'static str {
        store.lock().unwrap().tasks.retain(|t| t.id != TaskId(id));
        "Deleted Successfully"
    }

    async fn update(
        State(store): State<Stub>,
        Path(id): Path<i64>,
        Json(task): Json<Task>,
    ) -> Result<&'static str, StatusCode> {
        let mut store = store.lock().unwrap();
        let existing = store
            .tasks
            .iter_mut()
            .find(|t| t.id == TaskId(id))
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
        existing.text = task.text;
        existing.status = task.status;
        Ok("Updated Successfully")
    }

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/", addr)
    }

    async fn stub_server(seed: Vec<Task>) -> (String, Stub) {
        let next_id = seed.iter().map(|t| t.id.0).max().unwrap_or(0);
        let store: Stub = Arc::new(Mutex::new(StubStore {
            tasks: seed,
            next_id,
        }));

        let router = Router::new()
            .route("/api/tasks", get(list))
            .route("/api/add", post(add))
            .route("/api/delete/:id", delete(remove))
            .route("/api/update/:id", put(update))
            .with_state(Arc::clone(&store));

        (spawn(router).await, store)
    }

    async fn failing_server() -> String {
        let fail = || async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") };
        let router = Router::new()
            .route("/api/tasks", get(fail))
            .route("/api/add", post(fail))
            .route("/api/delete/:id", delete(fail))
            .route("/api/update/:id", put(fail));
        spawn(router).await
    }

    /// 200 responses whose bodies are not the JSON the client expects
    async fn garbled_server() -> String {
        let router = Router::new()
            .route("/api/tasks", get(|| async { "not json" }))
            .route("/api/add", post(|| async { "Deleted Successfully" }));
        spawn(router).await
    }

    async fn slow_server() -> String {
        let slow = || async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "[]"
        };
        spawn(Router::new().route("/api/tasks", get(slow))).await
    }

    fn client_for(base_url: String) -> HttpTaskApi {
        HttpTaskApi::new(&ClientConfig {
            base_url,
            request_timeout_ms: 5_000,
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.request_timeout_ms, 30_000);
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let seed = vec![
            NewTask::at("first", 10).with_id(TaskId(1)),
            NewTask::at("second", 20).with_id(TaskId(2)),
        ];
        let (base, _store) = stub_server(seed.clone()).await;
        let api = client_for(base);

        assert_eq!(api.list_tasks().await.unwrap(), seed);
    }

    #[tokio::test]
    async fn test_add_task_returns_assigned_id() {
        let (base, store) = stub_server(Vec::new()).await;
        let api = client_for(base);

        let added = api.add_task(&NewTask::at("Buy milk", 99)).await.unwrap();

        assert_eq!(added.id, TaskId(1));
        assert_eq!(added.text, "Buy milk");
        assert!(!added.status);
        assert_eq!(added.created_at, 99);
        assert_eq!(store.lock().unwrap().tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_and_update() {
        let seed = vec![
            NewTask::at("keep", 1).with_id(TaskId(1)),
            NewTask::at("drop", 2).with_id(TaskId(2)),
        ];
        let (base, store) = stub_server(seed.clone()).await;
        let api = client_for(base);

        api.delete_task(TaskId(2)).await.unwrap();
        api.update_task(&seed[0].toggled()).await.unwrap();

        let tasks = store.lock().unwrap().tasks.clone();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].status);
    }

    #[tokio::test]
    async fn test_update_missing_task_is_status_error() {
        let (base, _store) = stub_server(Vec::new()).await;
        let api = client_for(base);

        let err = api
            .update_task(&NewTask::at("ghost", 0).with_id(TaskId(42)))
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::status(Endpoint::Update, 500));
    }

    #[tokio::test]
    async fn test_error_statuses_use_fixed_messages() {
        let api = client_for(failing_server().await);

        let list_err = api.list_tasks().await.unwrap_err();
        let add_err = api.add_task(&NewTask::at("x", 0)).await.unwrap_err();
        let delete_err = api.delete_task(TaskId(1)).await.unwrap_err();

        assert_eq!(list_err.to_string(), "Failed to fetch tasks");
        assert_eq!(add_err.to_string(), "Failed to add task");
        assert_eq!(delete_err.to_string(), "Failed to delete task");
    }

    #[tokio::test]
    async fn test_undecodable_body_is_decode_error() {
        let api = client_for(garbled_server().await);

        let list_err = api.list_tasks().await.unwrap_err();
        let add_err = api.add_task(&NewTask::at("x", 0)).await.unwrap_err();

        assert!(matches!(list_err, ApiError::Decode(ref msg) if !msg.is_empty()));
        assert!(matches!(add_err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let api = HttpTaskApi::new(&ClientConfig {
            base_url: slow_server().await,
            request_timeout_ms: 300,
        })
        .unwrap();

        let err = api.list_tasks().await.unwrap_err();

        assert!(matches!(err, ApiError::Timeout(ref msg) if !msg.is_empty()));
        assert!(err.to_string().starts_with("Request timeout: "));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = client_for(format!("http://{}/api", addr));
        let err = api.list_tasks().await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
    }
}

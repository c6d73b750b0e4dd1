//! In-memory `TaskApi` for driver and shell tests

use async_trait::async_trait;
use std::sync::Mutex;

use super::{ApiError, ApiResult, Endpoint, TaskApi};
use crate::task::{NewTask, Task, TaskId};

#[derive(Default)]
struct Inner {
    tasks: Vec<Task>,
    next_id: i64,
    failing: Option<Endpoint>,
    calls: Vec<Endpoint>,
}

/// Server stand-in that assigns ids sequentially and can be told to fail
#[derive(Default)]
pub(crate) struct MemoryTaskApi {
    inner: Mutex<Inner>,
}

impl MemoryTaskApi {
    pub(crate) fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        Self {
            inner: Mutex::new(Inner {
                tasks,
                next_id,
                ..Inner::default()
            }),
        }
    }

    /// Make every call to `endpoint` answer with a 500
    pub(crate) fn fail_on(&self, endpoint: Endpoint) {
        self.inner.lock().unwrap().failing = Some(endpoint);
    }

    pub(crate) fn recover(&self) {
        self.inner.lock().unwrap().failing = None;
    }

    pub(crate) fn stored(&self) -> Vec<Task> {
        self.inner.lock().unwrap().tasks.clone()
    }

    /// Endpoints hit so far, in order
    pub(crate) fn calls(&self) -> Vec<Endpoint> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn record(&self, endpoint: Endpoint) -> ApiResult<std::sync::MutexGuard<'_, Inner>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(endpoint);
        if inner.failing == Some(endpoint) {
            return Err(ApiError::status(endpoint, 500));
        }
        Ok(inner)
    }
}

#[async_trait]
impl TaskApi for MemoryTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        Ok(self.record(Endpoint::List)?.tasks.clone())
    }

    async fn add_task(&self, task: &NewTask) -> ApiResult<Task> {
        let mut inner = self.record(Endpoint::Add)?;
        inner.next_id += 1;
        let added = task.clone().with_id(TaskId(inner.next_id));
        inner.tasks.push(added.clone());
        Ok(added)
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        self.record(Endpoint::Delete)?.tasks.retain(|t| t.id != id);
        Ok(())
    }

    async fn update_task(&self, task: &Task) -> ApiResult<()> {
        let mut inner = self.record(Endpoint::Update)?;
        match inner.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                existing.text = task.text.clone();
                existing.status = task.status;
                Ok(())
            }
            None => Err(ApiError::status(Endpoint::Update, 500)),
        }
    }
}

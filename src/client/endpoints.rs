//! Endpoint URLs for the task API

use std::fmt;

use crate::task::TaskId;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// The four operations the API exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    List,
    Add,
    Delete,
    Update,
}

impl Endpoint {
    /// Message reported when the server answers with a non-success status
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::List => "Failed to fetch tasks",
            Endpoint::Add => "Failed to add task",
            Endpoint::Delete => "Failed to delete task",
            Endpoint::Update => "Failed to update task",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::List => write!(f, "list"),
            Endpoint::Add => write!(f, "add"),
            Endpoint::Delete => write!(f, "delete"),
            Endpoint::Update => write!(f, "update"),
        }
    }
}

/// URL builder rooted at an API base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Create endpoints for `base`. Trailing slashes are dropped.
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            base: base.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET {base}/tasks`
    pub fn list(&self) -> String {
        format!("{}/tasks", self.base)
    }

    /// `POST {base}/add`
    pub fn add(&self) -> String {
        format!("{}/add", self.base)
    }

    /// `DELETE {base}/delete/{id}`
    pub fn delete(&self, id: TaskId) -> String {
        format!("{}/delete/{}", self.base, id)
    }

    /// `PUT {base}/update/{id}`
    pub fn update(&self, id: TaskId) -> String {
        format!("{}/update/{}", self.base, id)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.list(), "http://localhost:8080/api/tasks");
        assert_eq!(endpoints.add(), "http://localhost:8080/api/add");
        assert_eq!(endpoints.delete(TaskId(4)), "http://localhost:8080/api/delete/4");
        assert_eq!(endpoints.update(TaskId(9)), "http://localhost:8080/api/update/9");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let endpoints = Endpoints::new("http://todo.local/api//");
        assert_eq!(endpoints.base(), "http://todo.local/api");
        assert_eq!(endpoints.list(), "http://todo.local/api/tasks");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(Endpoint::List.failure_message(), "Failed to fetch tasks");
        assert_eq!(Endpoint::Update.failure_message(), "Failed to update task");
    }
}

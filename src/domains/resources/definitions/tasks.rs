//! Tasks resource definition.

use async_trait::async_trait;

use super::ResourceDefinition;
use crate::domains::resources::{ResourceError, ResourceHandler};
use crate::domains::state::StateStore;

/// Tasks database resource (dynamic).
pub struct TasksResource;

impl ResourceDefinition for TasksResource {
    const URI: &'static str = "powerapps://data/tasks";
    const NAME: &'static str = "Tasks Database";
    const DESCRIPTION: &'static str = "List of all tasks in the system";
    const MIME_TYPE: &'static str = "application/json";
}

#[async_trait]
impl ResourceHandler for TasksResource {
    async fn read(&self, state: &StateStore) -> Result<String, ResourceError> {
        Ok(serde_json::to_string_pretty(&state.tasks().await)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::state::Task;

    #[tokio::test]
    async fn test_tasks_read() {
        let state = StateStore::with_sample_data();
        let text = TasksResource.read(&state).await.unwrap();

        let tasks: Vec<Task> = serde_json::from_str(&text).unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].status, "In Progress");
    }

    #[tokio::test]
    async fn test_tasks_read_empty() {
        let text = TasksResource.read(&StateStore::empty()).await.unwrap();
        assert_eq!(text, "[]");
    }
}

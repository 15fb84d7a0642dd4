//! In-memory state store.
//!
//! The StateStore owns the user and task collections. Reads hand out copies,
//! so a caller never observes a half-applied write. Concurrent transports
//! (TCP, HTTP) may call in from several tasks at once; the RwLock keeps
//! writers exclusive.

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::error::StateError;
use super::models::{NewTask, Task, User, task_status};
use crate::core::config::StateConfig;

/// Owner of the user and task collections.
#[derive(Debug)]
pub struct StateStore {
    inner: RwLock<Collections>,
}

#[derive(Debug)]
struct Collections {
    users: Vec<User>,
    tasks: Vec<Task>,
    next_task_id: u64,
}

impl StateStore {
    /// Create a store holding the given records.
    ///
    /// The next task id starts at `tasks.len() + 1`. Tasks are never deleted,
    /// so ids keep matching "current count + 1" at creation time.
    pub fn new(users: Vec<User>, tasks: Vec<Task>) -> Self {
        let next_task_id = tasks.len() as u64 + 1;
        Self {
            inner: RwLock::new(Collections {
                users,
                tasks,
                next_task_id,
            }),
        }
    }

    /// Create a store with no users and no tasks.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Create a store holding the demo users and tasks.
    pub fn with_sample_data() -> Self {
        let users = vec![
            User::new(1, "John Doe", "john@example.com", "Admin"),
            User::new(2, "Jane Smith", "jane@example.com", "User"),
            User::new(3, "Bob Johnson", "bob@example.com", "User"),
        ];
        let tasks = vec![
            Task {
                id: 1,
                title: "Complete Project".to_string(),
                status: task_status::IN_PROGRESS.to_string(),
                assigned_to: 1,
            },
            Task {
                id: 2,
                title: "Review Code".to_string(),
                status: task_status::PENDING.to_string(),
                assigned_to: 2,
            },
            Task {
                id: 3,
                title: "Deploy Application".to_string(),
                status: task_status::COMPLETED.to_string(),
                assigned_to: 1,
            },
        ];
        Self::new(users, tasks)
    }

    /// Build a store according to configuration.
    pub fn from_config(config: &StateConfig) -> Self {
        if config.seed_sample_data {
            info!("Seeding state store with sample users and tasks");
            Self::with_sample_data()
        } else {
            info!("Starting with an empty state store");
            Self::empty()
        }
    }

    /// Snapshot of all users, in insertion order.
    pub async fn users(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    /// Snapshot of all tasks, in insertion order.
    pub async fn tasks(&self) -> Vec<Task> {
        self.inner.read().await.tasks.clone()
    }

    /// Find a task by id.
    pub async fn find_task(&self, id: u64) -> Result<Task, StateError> {
        self.inner
            .read()
            .await
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StateError::TaskNotFound(id))
    }

    /// Append a new task and return the stored record.
    pub(crate) async fn create_task(&self, new_task: NewTask) -> Task {
        let mut inner = self.inner.write().await;
        let id = inner.next_task_id;
        inner.next_task_id += 1;

        let task = new_task.into_task(id);
        inner.tasks.push(task.clone());
        debug!(task_id = id, "Task appended");
        task
    }

    /// Set the status of an existing task and return the updated record.
    ///
    /// Leaves the store untouched when the task does not exist.
    pub(crate) async fn update_task_status(
        &self,
        id: u64,
        status: impl Into<String>,
    ) -> Result<Task, StateError> {
        let mut inner = self.inner.write().await;
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StateError::TaskNotFound(id))?;

        task.status = status.into();
        debug!(task_id = id, status = %task.status, "Task status updated");
        Ok(task.clone())
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

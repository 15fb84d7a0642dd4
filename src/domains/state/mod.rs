//! State domain module.
//!
//! Holds the in-memory user and task collections that tool and resource
//! handlers operate on. Nothing here is persisted beyond the process lifetime.
//!
//! ## Architecture
//!
//! - `models.rs` - `User` and `Task` records (camelCase on the wire)
//! - `store.rs` - `StateStore`, the single owner of both collections
//! - `error.rs` - State-specific error types
//!
//! Mutating store methods are crate-private: handlers only reach them
//! through the dispatcher, which lends each handler a `&StateStore`.

mod error;
mod models;
mod store;

pub use error::StateError;
pub use models::{NewTask, Task, User, task_status, whole_number};
pub use store::StateStore;

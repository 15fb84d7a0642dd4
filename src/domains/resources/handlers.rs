//! Resource handler trait.

use async_trait::async_trait;

use super::error::ResourceError;
use crate::domains::state::StateStore;

/// Produces the current text snapshot of a resource.
///
/// Handlers only get a shared borrow of the store and only call its read
/// methods.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    async fn read(&self, state: &StateStore) -> Result<String, ResourceError>;
}

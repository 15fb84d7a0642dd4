//! Users resource definition.

use async_trait::async_trait;

use super::ResourceDefinition;
use crate::domains::resources::{ResourceError, ResourceHandler};
use crate::domains::state::StateStore;

/// Users database resource (dynamic).
pub struct UsersResource;

impl ResourceDefinition for UsersResource {
    const URI: &'static str = "powerapps://data/users";
    const NAME: &'static str = "Users Database";
    const DESCRIPTION: &'static str = "List of all users in the system";
    const MIME_TYPE: &'static str = "application/json";
}

#[async_trait]
impl ResourceHandler for UsersResource {
    async fn read(&self, state: &StateStore) -> Result<String, ResourceError> {
        Ok(serde_json::to_string_pretty(&state.users().await)?)
    }
}

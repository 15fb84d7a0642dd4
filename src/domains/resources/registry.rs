//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `register_all_resources()`

use std::sync::Arc;

use super::definitions::{ResourceDefinition, TasksResource, UsersResource};
use crate::core::dispatch::{OperationRegistry, RegistryError};

/// Register every resource, in listing order.
pub fn register_all_resources(registry: &mut OperationRegistry) -> Result<(), RegistryError> {
    registry.register_resource(UsersResource::descriptor(), Arc::new(UsersResource))?;
    registry.register_resource(TasksResource::descriptor(), Arc::new(TasksResource))?;
    Ok(())
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![UsersResource::URI, TasksResource::URI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all_resources() {
        let mut registry = OperationRegistry::new();
        register_all_resources(&mut registry).unwrap();

        let resources = registry.list_resources();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].name, "Users Database");
        assert_eq!(resources[1].name, "Tasks Database");

        let uris: Vec<_> = resources.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(uris, resource_uris());
    }

    #[test]
    fn test_registering_twice_fails() {
        let mut registry = OperationRegistry::new();
        register_all_resources(&mut registry).unwrap();

        let err = register_all_resources(&mut registry).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateResource("powerapps://data/users".to_string())
        );
    }
}

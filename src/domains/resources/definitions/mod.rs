//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI and metadata
//! - A `ResourceHandler` producing its content
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` and `ResourceHandler`
//! 3. Export it here
//! 4. Register in `registry.rs`

mod tasks;
mod users;

pub use tasks::TasksResource;
pub use users::UsersResource;

use crate::core::dispatch::ResourceDescriptor;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Descriptor used at registration.
    fn descriptor() -> ResourceDescriptor {
        ResourceDescriptor::new(Self::URI, Self::NAME, Self::DESCRIPTION, Self::MIME_TYPE)
    }
}

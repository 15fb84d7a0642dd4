//! Tool/resource dispatch core.
//!
//! - `registry.rs` - name/uri to handler table, built once at startup
//! - `validator.rs` - input schemas and argument checks
//! - `dispatcher.rs` - lookup, validation, handler execution
//! - `envelope.rs` - result envelope construction
//!
//! Control flow for a tool call:
//! `Dispatcher::invoke` → `OperationRegistry::lookup_tool` → `validate` →
//! `ToolHandler::call` → envelope.

mod dispatcher;
pub mod envelope;
mod registry;
mod validator;

pub use dispatcher::Dispatcher;
pub use registry::{
    OperationRegistry, RegisteredResource, RegisteredTool, RegistryError, ResourceDescriptor,
    ToolDescriptor,
};
pub use validator::{FieldSpec, FieldType, FieldViolation, InputSchema, ValidationError, validate};

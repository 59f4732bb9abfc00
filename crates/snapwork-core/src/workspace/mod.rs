//! Workspace document model, validation and persistence.

pub mod errors;
pub mod persistence;
pub mod types;
pub mod validation;

pub use errors::WorkspaceError;
pub use persistence::{
    DocumentFormat, deserialize_workspace, load_workspace, save_workspace, serialize_workspace,
};
pub use types::{FORMAT_VERSION, WindowSpec, Workspace};
pub use validation::{Violation, validate_workspace};

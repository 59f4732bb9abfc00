//! Workspace export: capture, select, validate, persist.

pub mod errors;
pub mod handler;

pub use errors::ExportError;
pub use handler::{WorkspaceExporter, build_workspace, to_window_spec};

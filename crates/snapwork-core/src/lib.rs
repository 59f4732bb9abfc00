//! snapwork-core: Core library for capturing window layouts into workspaces
//!
//! This library provides the capture pipeline and the workspace document
//! model. It is used by the `snapwork` CLI.
//!
//! # Main Entry Points
//!
//! - [`window`] - Enumerate and filter top-level windows
//! - [`desktop`] - Virtual desktop identity and desktop selection
//! - [`export`] - Capture windows into a validated, persisted workspace
//! - [`workspace`] - Workspace model, validation and persistence
//! - [`config`] - Configuration management

pub mod config;
pub mod desktop;
pub mod errors;
pub mod events;
pub mod export;
pub mod logging;
pub mod platform;
pub mod process;
pub mod window;
pub mod workspace;

// Re-export commonly used types at crate root for convenience
pub use config::SnapworkConfig;
pub use desktop::{DesktopError, DesktopId, SelectionError};
pub use export::{ExportError, WorkspaceExporter};
pub use window::{EnumeratedWindow, WindowEnumerator, WindowError};
pub use workspace::{Violation, WindowSpec, Workspace, WorkspaceError};

// Re-export logging initialization
pub use logging::init_logging;

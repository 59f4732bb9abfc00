//! Virtual desktop identity and desktop selection.
//!
//! - [`DesktopResolver`] - Capability trait mapping a window to its desktop
//! - [`DesktopId`] - Opaque, comparable desktop identifier
//! - [`resolve_desktop_selection`] - Turns a `--desktop` selector into a desktop id
//! - [`backends`] - Native resolvers

pub mod backends;
pub mod errors;
pub mod selection;
pub mod traits;
pub mod types;

pub use errors::{DesktopError, SelectionError};
pub use selection::{ordered_desktops, resolve_desktop_selection};
pub use traits::DesktopResolver;
pub use types::{DesktopId, DesktopLookup};

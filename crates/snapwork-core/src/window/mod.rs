//! Window enumeration and filtering.
//!
//! - [`WindowSource`] - Capability trait over the OS window list
//! - [`WindowEnumerator`] - Filters raw windows into capture candidates
//! - [`backends`] - Native window sources

pub mod backends;
pub mod enumerator;
pub mod errors;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use enumerator::WindowEnumerator;
pub use errors::WindowError;
pub use traits::{EnumerateWindows, WindowSource};
pub use types::{Bounds, CapturePolicy, EnumeratedWindow, RawWindow, SkipReason, WindowHandle};

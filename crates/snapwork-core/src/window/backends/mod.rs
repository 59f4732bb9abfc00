//! Native window sources.

#[cfg(windows)]
pub mod win32;

#[cfg(windows)]
pub use win32::Win32WindowSource;

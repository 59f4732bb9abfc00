//! Native desktop identity resolvers.

#[cfg(windows)]
pub mod com;

#[cfg(windows)]
pub use com::ComDesktopResolver;

use super::errors::DesktopError;
use super::types::DesktopLookup;
use crate::window::WindowHandle;

/// Maps a window to the virtual desktop that owns it.
///
/// Implementations that cannot work on the current platform fail when they
/// are constructed, with [`DesktopError::Unsupported`]. A window the platform
/// simply has no desktop for is `Ok(DesktopLookup::NotFound)`; `Err` from
/// this method is a resolver failure and aborts the capture.
pub trait DesktopResolver {
    fn desktop_id_of(&self, handle: WindowHandle) -> Result<DesktopLookup, DesktopError>;
}

//! Construction of the native capture pipeline for the current OS.

use crate::desktop::DesktopError;
use crate::window::{CapturePolicy, WindowEnumerator};

/// Build a [`WindowEnumerator`] backed by the native window source and
/// virtual desktop resolver.
///
/// # Errors
///
/// Returns [`DesktopError::Unsupported`] when the platform has no virtual
/// desktop support. This is raised once, before any window is enumerated.
#[cfg(windows)]
pub fn native_enumerator(policy: CapturePolicy) -> Result<WindowEnumerator, DesktopError> {
    use crate::desktop::backends::ComDesktopResolver;
    use crate::window::backends::Win32WindowSource;

    let resolver = ComDesktopResolver::new()?;
    Ok(WindowEnumerator::new(
        Box::new(Win32WindowSource::new()),
        Box::new(resolver),
        policy,
    ))
}

#[cfg(not(windows))]
pub fn native_enumerator(_policy: CapturePolicy) -> Result<WindowEnumerator, DesktopError> {
    tracing::warn!(
        event = "core.platform.desktop_unsupported",
        os = std::env::consts::OS
    );
    Err(DesktopError::Unsupported {
        message: "Virtual desktops require Windows.".to_string(),
    })
}

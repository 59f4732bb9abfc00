//! Window capability traits.

use super::errors::WindowError;
use super::types::{EnumeratedWindow, RawWindow, WindowHandle};

/// Access to the OS list of top-level windows.
///
/// Per-window lookups never fail: anything the OS cannot answer is reported
/// as `None` and handled by the enumerator.
pub trait WindowSource {
    /// List top-level windows in the OS enumeration order.
    fn list_top_level_windows(&self) -> Result<Vec<RawWindow>, WindowError>;

    /// Raw device name of the display nearest to the window.
    fn monitor_device_name(&self, handle: WindowHandle) -> Option<String>;

    /// Absolute path of the executable for a process id.
    fn process_image_path(&self, process_id: u32) -> Option<String>;
}

/// Produces the candidate windows for an export.
pub trait EnumerateWindows {
    fn enumerate(&self) -> Result<Vec<EnumeratedWindow>, WindowError>;
}

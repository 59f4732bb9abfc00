//! Virtual desktop lookup through the shell's `IVirtualDesktopManager` COM object.

use std::mem::ManuallyDrop;

use tracing::info;
use uuid::Uuid;
use windows::Win32::Foundation::HWND;
use windows::Win32::System::Com::{
    CLSCTX_ALL, COINIT_APARTMENTTHREADED, CoCreateInstance, CoInitializeEx, CoUninitialize,
};
use windows::Win32::UI::Shell::{IVirtualDesktopManager, VirtualDesktopManager};
use windows::core::{GUID, HRESULT};

use crate::desktop::errors::DesktopError;
use crate::desktop::traits::DesktopResolver;
use crate::desktop::types::{DesktopId, DesktopLookup};
use crate::window::WindowHandle;

/// `HRESULT_FROM_WIN32(ERROR_NOT_FOUND)`: the window has no desktop assignment.
const ELEMENT_NOT_FOUND: HRESULT = HRESULT(0x8007_0490_u32 as i32);

/// Owns one COM initialization of the creating thread.
///
/// The manager is released before `CoUninitialize` runs on drop, so the
/// resolver must be dropped on the thread that created it.
pub struct ComDesktopResolver {
    manager: ManuallyDrop<IVirtualDesktopManager>,
}

impl ComDesktopResolver {
    /// Create the COM virtual desktop manager for the calling thread.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::Unsupported`] if COM cannot be initialized or
    /// the shell does not provide the virtual desktop manager.
    pub fn new() -> Result<Self, DesktopError> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }
            .ok()
            .map_err(|e| DesktopError::Unsupported {
                message: format!("COM initialization failed: {}", e),
            })?;

        let manager: IVirtualDesktopManager =
            match unsafe { CoCreateInstance(&VirtualDesktopManager, None, CLSCTX_ALL) } {
                Ok(manager) => manager,
                Err(e) => {
                    unsafe { CoUninitialize() };
                    return Err(DesktopError::Unsupported {
                        message: format!(
                            "Virtual desktop manager is unsupported on this system: {}",
                            e
                        ),
                    });
                }
            };

        info!(event = "core.desktop.resolver_created", backend = "com");
        Ok(Self {
            manager: ManuallyDrop::new(manager),
        })
    }
}

impl Drop for ComDesktopResolver {
    fn drop(&mut self) {
        unsafe {
            ManuallyDrop::drop(&mut self.manager);
            CoUninitialize();
        }
    }
}

impl DesktopResolver for ComDesktopResolver {
    fn desktop_id_of(&self, handle: WindowHandle) -> Result<DesktopLookup, DesktopError> {
        lookup_from_result(unsafe { self.manager.GetWindowDesktopId(HWND::from(handle)) })
    }
}

/// Map a `GetWindowDesktopId` result onto a desktop lookup.
///
/// `ELEMENT_NOT_FOUND` and the nil GUID both mean the window has no desktop.
fn lookup_from_result(result: windows::core::Result<GUID>) -> Result<DesktopLookup, DesktopError> {
    match result {
        Ok(guid) => {
            let uuid = Uuid::from_u128(guid.to_u128());
            if uuid.is_nil() {
                Ok(DesktopLookup::NotFound)
            } else {
                Ok(DesktopLookup::Found(DesktopId::from(uuid)))
            }
        }
        Err(e) if e.code() == ELEMENT_NOT_FOUND => Ok(DesktopLookup::NotFound),
        Err(e) => Err(DesktopError::QueryFailed {
            message: e.to_string(),
        }),
    }
}

//! In-memory window and desktop capabilities for tests.

use std::collections::HashMap;

use crate::desktop::{DesktopError, DesktopId, DesktopLookup, DesktopResolver};

use super::errors::WindowError;
use super::traits::WindowSource;
use super::types::{Bounds, RawWindow, WindowHandle};

/// Visible 800x600 window at the origin.
pub fn raw_window(handle: u64, title: &str, class_name: &str, pid: u32) -> RawWindow {
    RawWindow {
        handle: WindowHandle::new(handle),
        visible: true,
        title: title.to_string(),
        class_name: class_name.to_string(),
        bounds: Bounds::new(0, 0, 800, 600),
        owner_process_id: pid,
    }
}

#[derive(Default)]
pub struct FakeWindowSource {
    windows: Vec<RawWindow>,
    processes: HashMap<u32, String>,
    monitors: HashMap<u64, String>,
    failure: Option<String>,
}

impl FakeWindowSource {
    pub fn new(windows: Vec<RawWindow>) -> Self {
        Self {
            windows,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn with_process(mut self, pid: u32, path: &str) -> Self {
        self.processes.insert(pid, path.to_string());
        self
    }

    pub fn with_monitor(mut self, handle: u64, device_name: &str) -> Self {
        self.monitors.insert(handle, device_name.to_string());
        self
    }
}

impl WindowSource for FakeWindowSource {
    fn list_top_level_windows(&self) -> Result<Vec<RawWindow>, WindowError> {
        match &self.failure {
            Some(message) => Err(WindowError::EnumerationFailed {
                message: message.clone(),
            }),
            None => Ok(self.windows.clone()),
        }
    }

    fn monitor_device_name(&self, handle: WindowHandle) -> Option<String> {
        self.monitors.get(&handle.raw()).cloned()
    }

    fn process_image_path(&self, process_id: u32) -> Option<String> {
        self.processes.get(&process_id).cloned()
    }
}

#[derive(Default)]
pub struct FakeDesktopResolver {
    desktops: HashMap<u64, DesktopId>,
    fallback: Option<DesktopId>,
    failure: Option<String>,
}

impl FakeDesktopResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_desktop(mut self, handle: u64, desktop: DesktopId) -> Self {
        self.desktops.insert(handle, desktop);
        self
    }

    /// Report `desktop` for every window without an explicit mapping.
    pub fn with_all(mut self, desktop: DesktopId) -> Self {
        self.fallback = Some(desktop);
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

impl DesktopResolver for FakeDesktopResolver {
    fn desktop_id_of(&self, handle: WindowHandle) -> Result<DesktopLookup, DesktopError> {
        if let Some(message) = &self.failure {
            return Err(DesktopError::QueryFailed {
                message: message.clone(),
            });
        }

        Ok(self
            .desktops
            .get(&handle.raw())
            .copied()
            .or(self.fallback)
            .map_or(DesktopLookup::NotFound, DesktopLookup::Found))
    }
}

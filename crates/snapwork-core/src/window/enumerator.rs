use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::desktop::{DesktopLookup, DesktopResolver};

use super::errors::WindowError;
use super::traits::{EnumerateWindows, WindowSource};
use super::types::{CapturePolicy, EnumeratedWindow, RawWindow, SkipReason};

/// Drives a [`WindowSource`] and a [`DesktopResolver`] to produce capture candidates.
///
/// Filters are applied per window in a fixed order, stopping at the first
/// failure: visibility, title, ignored class, geometry, process path,
/// monitor (never drops), desktop. Output order is the source's order.
pub struct WindowEnumerator {
    source: Box<dyn WindowSource>,
    resolver: Box<dyn DesktopResolver>,
    policy: CapturePolicy,
}

impl WindowEnumerator {
    pub fn new(
        source: Box<dyn WindowSource>,
        resolver: Box<dyn DesktopResolver>,
        policy: CapturePolicy,
    ) -> Self {
        Self {
            source,
            resolver,
            policy,
        }
    }

    /// Resolve a single raw window.
    ///
    /// `Ok(Err(reason))` means the window was dropped; `Err` is a resolver
    /// failure that aborts the whole enumeration.
    fn resolve_window(
        &self,
        raw: RawWindow,
    ) -> Result<Result<EnumeratedWindow, SkipReason>, WindowError> {
        if let Some(reason) = self.policy.rejects(&raw) {
            return Ok(Err(reason));
        }

        let process_path = match raw.owner_process_id {
            0 => None,
            pid => self.source.process_image_path(pid),
        };
        let Some(process_path) = process_path.filter(|p| !p.trim().is_empty()) else {
            return Ok(Err(SkipReason::ProcessUnresolved));
        };

        let device_name = self.source.monitor_device_name(raw.handle);
        let monitor_id = self.policy.normalize_monitor_id(device_name.as_deref());

        let desktop_id = match self.resolver.desktop_id_of(raw.handle)? {
            DesktopLookup::Found(id) => id,
            DesktopLookup::NotFound => return Ok(Err(SkipReason::DesktopUnresolved)),
        };

        Ok(Ok(EnumeratedWindow {
            handle: raw.handle,
            process_path,
            title: raw.title,
            class_name: raw.class_name,
            monitor_id,
            desktop_id: Some(desktop_id),
            bounds: raw.bounds,
        }))
    }
}

impl EnumerateWindows for WindowEnumerator {
    fn enumerate(&self) -> Result<Vec<EnumeratedWindow>, WindowError> {
        info!(event = "core.window.enumerate_started");

        let raw_windows = self.source.list_top_level_windows()?;
        let listed_count = raw_windows.len();

        let mut windows = Vec::new();
        let mut skipped: BTreeMap<&'static str, usize> = BTreeMap::new();

        for raw in raw_windows {
            let handle = raw.handle.raw();
            match self.resolve_window(raw)? {
                Ok(window) => windows.push(window),
                Err(reason) => {
                    debug!(
                        event = "core.window.skipped",
                        handle = handle,
                        reason = reason.as_str()
                    );
                    *skipped.entry(reason.as_str()).or_default() += 1;
                }
            }
        }

        info!(
            event = "core.window.enumerate_completed",
            listed_count = listed_count,
            count = windows.len(),
            skipped = ?skipped
        );
        Ok(windows)
    }
}

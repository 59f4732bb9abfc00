use crate::desktop::DesktopId;

/// Opaque OS window identifier, only meaningful while enumeration runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(u64);

impl WindowHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Window rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Attributes of a top-level window as reported by a [`super::WindowSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWindow {
    pub handle: WindowHandle,
    pub visible: bool,
    pub title: String,
    pub class_name: String,
    pub bounds: Bounds,
    /// Owning process id, 0 when the OS did not report one
    pub owner_process_id: u32,
}

/// A window that survived filtering, with its process, monitor and desktop resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratedWindow {
    pub handle: WindowHandle,
    pub process_path: String,
    pub title: String,
    pub class_name: String,
    pub monitor_id: String,
    pub desktop_id: Option<DesktopId>,
    pub bounds: Bounds,
}

/// Policy tables applied while filtering windows.
///
/// Built from [`crate::config::CaptureConfig::policy`]; `Default` holds the
/// built-in values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePolicy {
    pub ignored_classes: Vec<String>,
    pub monitor_prefixes: Vec<String>,
    pub unknown_monitor: String,
}

impl CapturePolicy {
    pub fn is_ignored_class(&self, class_name: &str) -> bool {
        self.ignored_classes
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(class_name))
    }

    /// Normalize a raw monitor device name into a logical monitor id.
    ///
    /// Strips the first matching device prefix and uppercases the rest.
    /// Missing or blank names map to the unknown-monitor sentinel.
    pub fn normalize_monitor_id(&self, device_name: Option<&str>) -> String {
        let Some(name) = device_name else {
            return self.unknown_monitor.clone();
        };

        let stripped = self
            .monitor_prefixes
            .iter()
            .find_map(|prefix| name.strip_prefix(prefix.as_str()))
            .unwrap_or(name);

        if stripped.trim().is_empty() {
            self.unknown_monitor.clone()
        } else {
            stripped.to_uppercase()
        }
    }

    /// Check the attribute-only filters (visibility, title, class, geometry).
    ///
    /// Returns the first failing filter, or `None` when the window passes.
    pub fn rejects(&self, window: &RawWindow) -> Option<SkipReason> {
        if !window.visible {
            return Some(SkipReason::Invisible);
        }
        if window.title.trim().is_empty() {
            return Some(SkipReason::BlankTitle);
        }
        if self.is_ignored_class(&window.class_name) {
            return Some(SkipReason::IgnoredClass);
        }
        if window.bounds.is_empty() {
            return Some(SkipReason::EmptyBounds);
        }
        None
    }
}

/// Why a window was dropped during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
    Invisible,
    BlankTitle,
    IgnoredClass,
    EmptyBounds,
    ProcessUnresolved,
    DesktopUnresolved,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Invisible => "invisible",
            SkipReason::BlankTitle => "blank_title",
            SkipReason::IgnoredClass => "ignored_class",
            SkipReason::EmptyBounds => "empty_bounds",
            SkipReason::ProcessUnresolved => "process_unresolved",
            SkipReason::DesktopUnresolved => "desktop_unresolved",
        }
    }
}

//! Desktop selection for exports.
//!
//! A selector is either a zero-based index into the desktops observed during
//! enumeration (first-seen order) or an explicit desktop GUID.

use std::collections::HashSet;

use tracing::info;

use super::errors::SelectionError;
use super::types::DesktopId;
use crate::window::EnumeratedWindow;

/// Distinct desktop ids across `windows`, in first-seen order.
///
/// Windows without a desktop id are skipped.
pub fn ordered_desktops(windows: &[EnumeratedWindow]) -> Vec<DesktopId> {
    let mut seen = HashSet::new();
    windows
        .iter()
        .filter_map(|w| w.desktop_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Resolve a desktop selector against the candidate windows.
///
/// Returns `Ok(None)` when no selector was given (export every desktop).
///
/// # Errors
///
/// - [`SelectionError::NoDesktops`] if no window carries a desktop id
/// - [`SelectionError::IndexOutOfRange`] for an integer outside `0..count`
/// - [`SelectionError::InvalidSelector`] if the selector is neither a 32-bit integer nor a GUID
/// - [`SelectionError::DesktopNotFound`] for a GUID no candidate window is on
pub fn resolve_desktop_selection(
    windows: &[EnumeratedWindow],
    selector: Option<&str>,
) -> Result<Option<DesktopId>, SelectionError> {
    let Some(selector) = selector.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let desktops = ordered_desktops(windows);
    if desktops.is_empty() {
        return Err(SelectionError::NoDesktops);
    }

    // Index selectors are 32-bit; anything wider falls through to GUID parsing
    if let Ok(index) = selector.parse::<i32>() {
        let desktop = usize::try_from(index)
            .ok()
            .and_then(|i| desktops.get(i))
            .copied()
            .ok_or_else(|| SelectionError::IndexOutOfRange {
                selector: selector.to_string(),
                max_index: desktops.len() - 1,
            })?;

        info!(
            event = "core.desktop.selection_resolved",
            selector = selector,
            desktop_id = %desktop,
            desktop_count = desktops.len()
        );
        return Ok(Some(desktop));
    }

    let parsed: DesktopId = selector
        .parse()
        .map_err(|_| SelectionError::InvalidSelector {
            selector: selector.to_string(),
        })?;

    if !desktops.contains(&parsed) {
        return Err(SelectionError::DesktopNotFound {
            selector: selector.to_string(),
        });
    }

    info!(
        event = "core.desktop.selection_resolved",
        selector = selector,
        desktop_id = %parsed,
        desktop_count = desktops.len()
    );
    Ok(Some(parsed))
}

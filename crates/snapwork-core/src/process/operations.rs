use sysinfo::{Pid as SysinfoPid, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::debug;

/// Resolve the absolute executable path of a running process.
///
/// Returns `None` when the process id is zero, the process has exited, or the
/// OS denies the query. The underlying process handle is opened and released
/// within this call.
pub fn resolve_image_path(pid: u32) -> Option<String> {
    if pid == 0 {
        return None;
    }

    let mut system = System::new();
    let pid_obj = SysinfoPid::from_u32(pid);
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid_obj]),
        true,
        ProcessRefreshKind::nothing().with_exe(UpdateKind::Always),
    );

    let Some(process) = system.process(pid_obj) else {
        debug!(event = "core.process.not_found", pid = pid);
        return None;
    };

    match process.exe() {
        Some(path) if !path.as_os_str().is_empty() => Some(path.display().to_string()),
        _ => {
            debug!(event = "core.process.image_path_unavailable", pid = pid);
            None
        }
    }
}

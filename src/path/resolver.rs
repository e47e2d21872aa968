use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use tracing::trace;

/// Finds `name` in the first search path entry that holds an executable
/// file of that name. Entry order is priority order.
pub fn resolve(search_path: &[String], name: &str) -> Option<PathBuf> {
    search_path
        .iter()
        .map(|dir| PathBuf::from(format!("{}/{}", dir, name)))
        .find(|candidate| {
            let hit = is_executable(candidate);
            trace!(candidate = %candidate.display(), hit, "probing search path");
            hit
        })
}

/// True for a regular file the current user may execute.
pub fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };

    // SAFETY: `c_path` is a valid NUL-terminated string for the duration of the call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

//! Executable lookup along the process search path.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const EXE_SUFFIXES: &[&str] = &[".exe", ".bat", ".cmd"];

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.is_file()
            && std::fs::metadata(path)
                .map(|m| m.permissions().mode() & 0o111 != 0)
                .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

fn candidate_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    let plain = dir.join(name);
    if is_executable(&plain) {
        return Some(plain);
    }
    #[cfg(windows)]
    for suffix in EXE_SUFFIXES {
        let with_suffix = dir.join(format!("{name}{suffix}"));
        if with_suffix.is_file() {
            return Some(with_suffix);
        }
    }
    None
}

/// Resolves `name` against the given PATH-style value.
pub fn find_in_path_from(name: &str, path_value: Option<OsString>) -> Option<PathBuf> {
    let path_value = path_value?;
    env::split_paths(&path_value).find_map(|dir| candidate_in_dir(&dir, name))
}

/// Resolves `name` against the process's `PATH`.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    find_in_path_from(name, env::var_os("PATH"))
}

/// Resolves `name` against an explicit list of directories, first hit wins.
pub fn find_in_dirs<I>(name: &str, dirs: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    dirs.into_iter()
        .find_map(|dir| candidate_in_dir(&dir, name))
}

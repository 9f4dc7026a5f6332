//! Android SDK root detection and tool resolution.
//!
//! The fallback install-path candidates deliberately stay per-platform
//! rather than being unified into one list; each list mirrors where the
//! vendor installer actually puts the SDK on that OS.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use skillbridge_exec::{find_in_dirs, find_in_path_from};

/// Executables the validator requires.
pub const REQUIRED_TOOLS: [&str; 3] = ["adb", "emulator", "avdmanager"];

/// SDK subdirectories probed when a tool is not on PATH.
const SDK_TOOL_DIRS: [&str; 4] = [
    "platform-tools",
    "emulator",
    "cmdline-tools/latest/bin",
    "tools/bin",
];

/// Where the SDK root was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdkOrigin {
    AndroidHome,
    AndroidSdkRoot,
    Fallback,
}

/// OS-conventional SDK install locations, probed when neither env var is set.
#[cfg(target_os = "macos")]
pub fn fallback_sdk_dirs(home: &Path) -> Vec<PathBuf> {
    vec![home.join("Library/Android/sdk")]
}

#[cfg(target_os = "windows")]
pub fn fallback_sdk_dirs(home: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(local) = std::env::var_os("LOCALAPPDATA") {
        dirs.push(PathBuf::from(local).join("Android").join("Sdk"));
    }
    dirs.push(home.join("AppData").join("Local").join("Android").join("Sdk"));
    dirs
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn fallback_sdk_dirs(home: &Path) -> Vec<PathBuf> {
    vec![home.join("Android/Sdk"), home.join(".android/sdk")]
}

/// Resolves the SDK root from `ANDROID_HOME`, then `ANDROID_SDK_ROOT`, then
/// the per-platform fallback list. Only existing directories count.
pub fn detect_sdk_root(
    android_home: Option<&Path>,
    android_sdk_root: Option<&Path>,
    home: &Path,
) -> Option<(PathBuf, SdkOrigin)> {
    if let Some(dir) = android_home.filter(|d| d.is_dir()) {
        return Some((dir.to_path_buf(), SdkOrigin::AndroidHome));
    }
    if let Some(dir) = android_sdk_root.filter(|d| d.is_dir()) {
        return Some((dir.to_path_buf(), SdkOrigin::AndroidSdkRoot));
    }
    fallback_sdk_dirs(home)
        .into_iter()
        .find(|d| d.is_dir())
        .map(|d| (d, SdkOrigin::Fallback))
}

/// Resolution of a single tool executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolLocation {
    OnPath(PathBuf),
    /// Found inside the SDK's known subfolders but not on PATH.
    InSdk(PathBuf),
    Missing,
}

/// Resolves a tool via PATH, falling back to the SDK's known subfolders.
pub fn resolve_tool(
    name: &str,
    sdk_root: Option<&Path>,
    path_value: Option<OsString>,
) -> ToolLocation {
    if let Some(found) = find_in_path_from(name, path_value) {
        return ToolLocation::OnPath(found);
    }
    if let Some(root) = sdk_root {
        let candidates = SDK_TOOL_DIRS.iter().map(|sub| root.join(sub));
        if let Some(found) = find_in_dirs(name, candidates) {
            return ToolLocation::InSdk(found);
        }
    }
    ToolLocation::Missing
}

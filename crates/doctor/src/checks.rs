//! The validation pass itself.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use skillbridge_exec::CommandRunner;

use crate::report::Report;
use crate::sdk::{detect_sdk_root, resolve_tool, SdkOrigin, ToolLocation, REQUIRED_TOOLS};

/// Snapshot of the environment the validator inspects.
///
/// Captured up-front so tests can fabricate arbitrary environments without
/// mutating process globals.
#[derive(Debug, Clone)]
pub struct DoctorEnv {
    pub home: PathBuf,
    pub android_home: Option<PathBuf>,
    pub android_sdk_root: Option<PathBuf>,
    pub path: Option<OsString>,
}

impl DoctorEnv {
    pub fn from_process() -> Result<Self> {
        #[cfg(unix)]
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir);
        #[cfg(not(unix))]
        let home = dirs::home_dir();

        Ok(Self {
            home: home.ok_or_else(|| anyhow!("home directory not found"))?,
            android_home: std::env::var_os("ANDROID_HOME").map(PathBuf::from),
            android_sdk_root: std::env::var_os("ANDROID_SDK_ROOT").map(PathBuf::from),
            path: std::env::var_os("PATH"),
        })
    }
}

fn tool_remedy(tool: &str) -> String {
    match tool {
        "adb" => "install platform-tools: sdkmanager \"platform-tools\"".to_string(),
        "emulator" => "install the emulator package: sdkmanager \"emulator\"".to_string(),
        "avdmanager" => {
            "install command-line tools: sdkmanager \"cmdline-tools;latest\"".to_string()
        }
        other => format!("install {other} via sdkmanager"),
    }
}

fn check_sdk_root(env: &DoctorEnv, report: &mut Report) -> Option<PathBuf> {
    match detect_sdk_root(
        env.android_home.as_deref(),
        env.android_sdk_root.as_deref(),
        &env.home,
    ) {
        Some((path, SdkOrigin::AndroidHome)) => {
            report.pass("sdk-root", format!("ANDROID_HOME = {}", path.display()));
            Some(path)
        }
        Some((path, SdkOrigin::AndroidSdkRoot)) => {
            report.pass("sdk-root", format!("ANDROID_SDK_ROOT = {}", path.display()));
            Some(path)
        }
        Some((path, SdkOrigin::Fallback)) => {
            report.warn(
                "sdk-root",
                format!("found at conventional location {}", path.display()),
                format!("export ANDROID_HOME={}", path.display()),
            );
            Some(path)
        }
        None => {
            report.warn(
                "sdk-root",
                "neither ANDROID_HOME nor ANDROID_SDK_ROOT is set and no conventional install was found",
                "install the Android SDK and export ANDROID_HOME",
            );
            None
        }
    }
}

fn check_tools(env: &DoctorEnv, sdk_root: Option<&PathBuf>, report: &mut Report) -> ToolPaths {
    let mut paths = ToolPaths::default();
    for tool in REQUIRED_TOOLS {
        match resolve_tool(tool, sdk_root.map(|p| p.as_path()), env.path.clone()) {
            ToolLocation::OnPath(path) => {
                report.pass(tool, format!("on PATH at {}", path.display()));
                paths.set(tool, path);
            }
            ToolLocation::InSdk(path) => {
                let dir = path.parent().map(|p| p.display().to_string()).unwrap_or_default();
                report.warn(
                    tool,
                    format!("found in SDK at {}", path.display()),
                    format!("add {dir} to PATH"),
                );
                paths.set(tool, path);
            }
            ToolLocation::Missing => {
                report.fail(tool, "not found on PATH or in the SDK", tool_remedy(tool));
            }
        }
    }
    paths
}

#[derive(Debug, Default)]
struct ToolPaths {
    adb: Option<PathBuf>,
    emulator: Option<PathBuf>,
}

impl ToolPaths {
    fn set(&mut self, tool: &str, path: PathBuf) {
        match tool {
            "adb" => self.adb = Some(path),
            "emulator" => self.emulator = Some(path),
            _ => {}
        }
    }
}

/// Lines of `emulator -list-avds` output that name an AVD.
fn parse_avds(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with("INFO"))
        .map(str::to_string)
        .collect()
}

/// Serials reported as `device` by `adb devices` (header line excluded).
fn parse_devices(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|l| {
            let mut cols = l.split_whitespace();
            match (cols.next(), cols.next()) {
                (Some(serial), Some("device")) => Some(serial.to_string()),
                _ => None,
            }
        })
        .collect()
}

fn check_avds(runner: &dyn CommandRunner, emulator: Option<&PathBuf>, report: &mut Report) {
    let Some(emulator) = emulator else {
        report.warn(
            "avds",
            "skipped: emulator executable unavailable",
            "resolve the emulator check above first",
        );
        return;
    };
    match runner.run(&emulator.to_string_lossy(), &["-list-avds"]) {
        Ok(out) if out.success() => {
            let avds = parse_avds(&out.stdout);
            if avds.is_empty() {
                report.warn(
                    "avds",
                    "no virtual devices registered",
                    "create one: avdmanager create avd -n pixel -k \"system-images;android-34;google_apis;x86_64\"",
                );
            } else {
                report.pass("avds", format!("{} registered: {}", avds.len(), avds.join(", ")));
            }
        }
        Ok(out) => report.warn(
            "avds",
            format!("emulator -list-avds exited with {:?}", out.code),
            "run 'emulator -list-avds' manually to inspect the failure",
        ),
        Err(e) => report.warn(
            "avds",
            format!("could not enumerate virtual devices: {e}"),
            "run 'emulator -list-avds' manually to inspect the failure",
        ),
    }
}

fn check_devices(runner: &dyn CommandRunner, adb: Option<&PathBuf>, report: &mut Report) {
    let Some(adb) = adb else {
        report.warn(
            "devices",
            "skipped: adb executable unavailable",
            "resolve the adb check above first",
        );
        return;
    };
    match runner.run(&adb.to_string_lossy(), &["devices"]) {
        Ok(out) if out.success() => {
            let devices = parse_devices(&out.stdout);
            if devices.is_empty() {
                report.pass("devices", "no devices attached");
            } else {
                report.pass(
                    "devices",
                    format!("{} attached: {}", devices.len(), devices.join(", ")),
                );
            }
        }
        Ok(out) => report.warn(
            "devices",
            format!("adb devices exited with {:?}", out.code),
            "restart the adb daemon: adb kill-server && adb start-server",
        ),
        Err(e) => report.warn(
            "devices",
            format!("could not enumerate devices: {e}"),
            "restart the adb daemon: adb kill-server && adb start-server",
        ),
    }
}

/// Runs every check against the given environment snapshot.
///
/// Checks never short-circuit each other: a missing SDK still lets the tool
/// probes run (they may be on PATH), and a missing tool only downgrades the
/// enumeration checks that depend on it.
pub fn validate(runner: &dyn CommandRunner, env: &DoctorEnv) -> Report {
    let mut report = Report::default();
    let sdk_root = check_sdk_root(env, &mut report);
    let tools = check_tools(env, sdk_root.as_ref(), &mut report);
    check_avds(runner, tools.emulator.as_ref(), &mut report);
    check_devices(runner, tools.adb.as_ref(), &mut report);
    tracing::debug!(
        checks = report.checks.len(),
        warnings = report.warnings(),
        failures = report.failures(),
        "validation complete"
    );
    report
}

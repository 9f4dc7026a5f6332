//! Flutter SDK probe.

use anyhow::{bail, Result};
use skillbridge_exec::{CommandRunner, ExecError};

pub const FLUTTER_INSTALL_URL: &str = "https://docs.flutter.dev/get-started/install";

/// Queries the installed Flutter SDK version.
///
/// Fatal when the `flutter` command is absent from the execution path; the
/// whole bootstrap sequence requires it before touching the filesystem.
pub fn flutter_version(runner: &dyn CommandRunner) -> Result<String> {
    let output = match runner.run("flutter", &["--version"]) {
        Ok(out) => out,
        Err(ExecError::NotFound { .. }) => {
            bail!("flutter command not found. Install the Flutter SDK: {FLUTTER_INSTALL_URL}")
        }
        Err(e) => return Err(e.into()),
    };
    if !output.success() {
        bail!(
            "flutter --version exited with {:?}: {}",
            output.code,
            output.stderr.trim()
        );
    }
    let version = output
        .stdout
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    tracing::debug!(%version, "flutter toolchain detected");
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillbridge_test_utils::ScriptedRunner;

    #[test]
    fn reports_first_line_of_version_output() {
        let runner = ScriptedRunner::new()
            .respond("flutter", "Flutter 3.24.0 • channel stable\nTools • Dart 3.5.0\n");
        let version = flutter_version(&runner).unwrap();
        assert_eq!(version, "Flutter 3.24.0 • channel stable");
    }

    #[test]
    fn missing_command_mentions_install_url() {
        let runner = ScriptedRunner::new();
        let err = flutter_version(&runner).unwrap_err();
        assert!(err.to_string().contains(FLUTTER_INSTALL_URL));
    }

    #[test]
    fn nonzero_exit_is_fatal() {
        let runner = ScriptedRunner::new().fail_with("flutter", 66, "doctor says no");
        let err = flutter_version(&runner).unwrap_err();
        assert!(err.to_string().contains("doctor says no"));
    }
}

//! The linear bootstrap sequence.
//!
//! `check-toolchain → prompt-for-name → create-directories →
//! create-or-recreate-app-project → install-dependencies →
//! write-config-files → print-summary`, with no branching back. The first
//! error aborts the whole run and leaves partial state as-is; every step is
//! idempotent so the operator fixes the condition and re-invokes.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use skillbridge_exec::CommandRunner;

use crate::prompt::Prompter;
use crate::toolchain::flutter_version;

const DEFAULT_APP_NAME: &str = "my_app";

/// Marker file that says `mobile/` already holds a generated project.
const PROJECT_MARKER: &str = "pubspec.yaml";

const ROOT_README: &str = "# {name}\n\nMobile monorepo scaffolded by skillbridge.\n\n- `mobile/` — Flutter application\n- `backend/` — server-side code\n";

const ROOT_GITIGNORE: &str = ".DS_Store\n*.log\n.env\nbuild/\n.dart_tool/\n";

const BACKEND_README: &str = "# backend\n\nServer-side code for the app. Pick your stack and wire CI here.\n";

const MOBILE_ANALYSIS_OPTIONS: &str = "include: package:flutter_lints/flutter.yaml\n\nlinter:\n  rules:\n    - prefer_const_constructors\n    - avoid_print\n";

/// Parameters of one bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Workspace root receiving the `mobile/` and `backend/` directories.
    pub root: PathBuf,
    /// Project name; prompts with a default when absent.
    pub app_name: Option<String>,
    /// Skip confirmations (non-interactive mode).
    pub assume_yes: bool,
}

/// How a bootstrap run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Completed {
        app_name: String,
        flutter_version: String,
    },
    /// The operator declined a confirmation: clean early exit, nothing touched
    /// beyond steps already completed.
    Declined,
}

/// Dart package names: lowercase letters, digits, underscores, no leading digit.
fn valid_app_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn dir_has_content(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

/// Deletes everything under `dir` except version-control metadata.
fn wipe_except_git(dir: &Path) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))? {
        let entry = entry?;
        if entry.file_name() == ".git" {
            continue;
        }
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        }
        .with_context(|| format!("failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Writes a starter file unless one is already there; user edits survive
/// re-runs. Returns whether the file was written.
fn write_if_absent(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

fn resolve_app_name(config: &BootstrapConfig, prompter: &dyn Prompter) -> Result<String> {
    let name = match &config.app_name {
        Some(name) => name.clone(),
        None if config.assume_yes => DEFAULT_APP_NAME.to_string(),
        None => prompter.text("Project name", DEFAULT_APP_NAME)?,
    };
    if !valid_app_name(&name) {
        bail!(
            "invalid project name '{name}': use lowercase letters, digits, and underscores"
        );
    }
    Ok(name)
}

fn generate_project(
    runner: &dyn CommandRunner,
    prompter: &dyn Prompter,
    config: &BootstrapConfig,
    mobile: &Path,
    app_name: &str,
) -> Result<()> {
    if mobile.join(PROJECT_MARKER).exists() {
        let regenerate = if config.assume_yes {
            false
        } else {
            prompter.confirm(
                "mobile/ already contains a Flutter project. Wipe and regenerate?",
                false,
            )?
        };
        if !regenerate {
            println!("  Keeping existing Flutter project in {}", mobile.display());
            return Ok(());
        }
        wipe_except_git(mobile)?;
        println!("  Wiped {} (kept .git)", mobile.display());
    }

    let mobile_str = mobile.to_string_lossy();
    let out = runner
        .run("flutter", &["create", "--project-name", app_name, &mobile_str])
        .context("failed to invoke flutter create")?;
    if !out.success() {
        bail!(
            "flutter create exited with {:?}: {}",
            out.code,
            out.stderr.trim()
        );
    }
    println!("  Generated Flutter project '{app_name}'");
    Ok(())
}

fn install_dependencies(runner: &dyn CommandRunner, mobile: &Path) -> Result<()> {
    let out = runner
        .run_in(mobile, "flutter", &["pub", "get"])
        .context("failed to invoke flutter pub get")?;
    if !out.success() {
        bail!(
            "flutter pub get exited with {:?}: {}",
            out.code,
            out.stderr.trim()
        );
    }
    println!("  Dependencies installed");
    Ok(())
}

fn write_starter_files(root: &Path, mobile: &Path, backend: &Path, app_name: &str) -> Result<()> {
    let files = [
        (root.join("README.md"), ROOT_README.replace("{name}", app_name)),
        (root.join(".gitignore"), ROOT_GITIGNORE.to_string()),
        (backend.join("README.md"), BACKEND_README.to_string()),
        (
            mobile.join("analysis_options.yaml"),
            MOBILE_ANALYSIS_OPTIONS.to_string(),
        ),
    ];
    for (path, content) in files {
        if write_if_absent(&path, &content)? {
            println!("  Wrote {}", path.display());
        }
    }
    Ok(())
}

/// Runs the whole bootstrap sequence.
pub fn bootstrap(
    runner: &dyn CommandRunner,
    prompter: &dyn Prompter,
    config: &BootstrapConfig,
) -> Result<BootstrapOutcome> {
    let version = flutter_version(runner)?;
    println!("Using {version}");

    let app_name = resolve_app_name(config, prompter)?;

    let mobile = config.root.join("mobile");
    let backend = config.root.join("backend");

    if dir_has_content(&mobile) && !config.assume_yes {
        let proceed = prompter.confirm("mobile/ already contains files. Continue?", false)?;
        if !proceed {
            println!("Bootstrap cancelled; nothing changed.");
            return Ok(BootstrapOutcome::Declined);
        }
    }

    for dir in [&mobile, &backend] {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    println!("  Created {} and {}", mobile.display(), backend.display());

    generate_project(runner, prompter, config, &mobile, &app_name)?;
    install_dependencies(runner, &mobile)?;
    write_starter_files(&config.root, &mobile, &backend, &app_name)?;

    println!("\nBootstrap complete. Next steps:");
    println!("  cd {} && flutter run", mobile.display());

    Ok(BootstrapOutcome::Completed {
        app_name,
        flutter_version: version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::scripted::ScriptedPrompter;
    use skillbridge_test_utils::ScriptedRunner;
    use tempfile::tempdir;

    fn flutter_ok() -> ScriptedRunner {
        ScriptedRunner::new().respond("flutter", "Flutter 3.24.0 • channel stable\n")
    }

    fn config(root: &Path, name: Option<&str>, yes: bool) -> BootstrapConfig {
        BootstrapConfig {
            root: root.to_path_buf(),
            app_name: name.map(str::to_string),
            assume_yes: yes,
        }
    }

    #[test]
    fn missing_toolchain_aborts_before_creating_directories() {
        /*
        GIVEN no flutter command available
        WHEN bootstrapping
        THEN the run fails and no directory was created
        */
        let root = tempdir().unwrap();
        let runner = ScriptedRunner::new();
        let prompter = ScriptedPrompter::new(vec![], vec![]);

        let err = bootstrap(&runner, &prompter, &config(root.path(), None, true)).unwrap_err();
        assert!(err.to_string().contains("flutter command not found"));
        assert!(!root.path().join("mobile").exists());
        assert!(!root.path().join("backend").exists());
    }

    #[test]
    fn clean_run_scaffolds_everything() {
        /*
        GIVEN a clean workspace root and a working toolchain
        WHEN bootstrapping non-interactively
        THEN directories, starter files, and all three flutter calls happen
        */
        let root = tempdir().unwrap();
        let runner = flutter_ok();
        let prompter = ScriptedPrompter::new(vec![], vec![]);

        let outcome =
            bootstrap(&runner, &prompter, &config(root.path(), Some("demo_app"), true)).unwrap();
        assert!(matches!(outcome, BootstrapOutcome::Completed { ref app_name, .. } if app_name == "demo_app"));

        assert!(root.path().join("mobile").is_dir());
        assert!(root.path().join("backend").is_dir());
        assert!(root.path().join("README.md").is_file());
        assert!(root.path().join(".gitignore").is_file());
        assert!(root.path().join("backend/README.md").is_file());
        assert!(root.path().join("mobile/analysis_options.yaml").is_file());

        // version + create + pub get
        assert_eq!(runner.invoked().len(), 3);
    }

    #[test]
    fn declined_overwrite_leaves_directory_untouched() {
        /*
        GIVEN a non-empty mobile directory
        WHEN the operator answers no to the overwrite guard
        THEN the run ends cleanly with nothing changed
        */
        let root = tempdir().unwrap();
        let mobile = root.path().join("mobile");
        fs::create_dir_all(&mobile).unwrap();
        fs::write(mobile.join("precious.txt"), "keep me").unwrap();

        let runner = flutter_ok();
        let prompter = ScriptedPrompter::new(vec![false], vec![]);

        let outcome =
            bootstrap(&runner, &prompter, &config(root.path(), Some("demo_app"), false)).unwrap();
        assert_eq!(outcome, BootstrapOutcome::Declined);
        assert!(mobile.join("precious.txt").exists());
        assert!(!root.path().join("backend").exists());
        // Only the toolchain probe ran.
        assert_eq!(runner.invoked().len(), 1);
    }

    #[test]
    fn affirmed_overwrite_proceeds() {
        let root = tempdir().unwrap();
        let mobile = root.path().join("mobile");
        fs::create_dir_all(&mobile).unwrap();
        fs::write(mobile.join("stray.txt"), "whatever").unwrap();

        let runner = flutter_ok();
        let prompter = ScriptedPrompter::new(vec![true], vec![]);

        let outcome =
            bootstrap(&runner, &prompter, &config(root.path(), Some("demo_app"), false)).unwrap();
        assert!(matches!(outcome, BootstrapOutcome::Completed { .. }));
        assert!(root.path().join("backend").is_dir());
    }

    #[test]
    fn regeneration_wipes_everything_but_git() {
        /*
        GIVEN an existing Flutter project marker and a yes to regeneration
        WHEN bootstrapping interactively
        THEN old entries are removed while .git survives
        */
        let root = tempdir().unwrap();
        let mobile = root.path().join("mobile");
        fs::create_dir_all(mobile.join(".git")).unwrap();
        fs::write(mobile.join(".git/HEAD"), "ref: refs/heads/main").unwrap();
        fs::write(mobile.join("pubspec.yaml"), "name: old_app").unwrap();
        fs::write(mobile.join("stale.dart"), "void main() {}").unwrap();

        let runner = flutter_ok();
        // First confirm: continue into non-empty dir. Second: wipe and regenerate.
        let prompter = ScriptedPrompter::new(vec![true, true], vec![]);

        bootstrap(&runner, &prompter, &config(root.path(), Some("demo_app"), false)).unwrap();

        assert!(mobile.join(".git/HEAD").exists());
        assert!(!mobile.join("pubspec.yaml").exists());
        assert!(!mobile.join("stale.dart").exists());
    }

    #[test]
    fn assume_yes_keeps_existing_project() {
        let root = tempdir().unwrap();
        let mobile = root.path().join("mobile");
        fs::create_dir_all(&mobile).unwrap();
        fs::write(mobile.join("pubspec.yaml"), "name: existing").unwrap();

        let runner = flutter_ok();
        let prompter = ScriptedPrompter::new(vec![], vec![]);

        bootstrap(&runner, &prompter, &config(root.path(), Some("demo_app"), true)).unwrap();

        assert_eq!(
            fs::read_to_string(mobile.join("pubspec.yaml")).unwrap(),
            "name: existing"
        );
        // version + pub get only, no create
        assert_eq!(runner.invoked().len(), 2);
    }

    #[test]
    fn rerun_preserves_user_edited_starter_files() {
        /*
        GIVEN a completed bootstrap with a hand-edited README
        WHEN bootstrapping again
        THEN the edit survives
        */
        let root = tempdir().unwrap();
        let runner = flutter_ok();
        let prompter = ScriptedPrompter::new(vec![], vec![]);
        let cfg = config(root.path(), Some("demo_app"), true);

        bootstrap(&runner, &prompter, &cfg).unwrap();
        fs::write(root.path().join("README.md"), "# my own notes").unwrap();

        bootstrap(&runner, &prompter, &cfg).unwrap();
        assert_eq!(
            fs::read_to_string(root.path().join("README.md")).unwrap(),
            "# my own notes"
        );
    }

    #[test]
    fn prompted_name_defaults_when_blank() {
        let root = tempdir().unwrap();
        let runner = flutter_ok();
        let prompter = ScriptedPrompter::new(vec![], vec![]);

        let outcome = bootstrap(&runner, &prompter, &config(root.path(), None, false)).unwrap();
        assert!(matches!(outcome, BootstrapOutcome::Completed { ref app_name, .. } if app_name == "my_app"));
    }

    #[test]
    fn invalid_project_name_is_rejected() {
        let root = tempdir().unwrap();
        let runner = flutter_ok();
        let prompter = ScriptedPrompter::new(vec![], vec![]);

        let err = bootstrap(
            &runner,
            &prompter,
            &config(root.path(), Some("My-App"), true),
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid project name"));
    }

    #[test]
    fn app_name_validation_rules() {
        assert!(valid_app_name("my_app"));
        assert!(valid_app_name("app2"));
        assert!(valid_app_name("_private"));
        assert!(!valid_app_name("2app"));
        assert!(!valid_app_name("My-App"));
        assert!(!valid_app_name(""));
    }
}

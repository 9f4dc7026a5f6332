//! Shared test utilities for skillbridge crates.
//!
//! Provides env-var guards for tests that touch process-global state, a
//! scratch-repository fixture with a populated `skills/` tree, and a
//! scripted [`CommandRunner`] for faking toolchain invocations.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, MutexGuard};

use skillbridge_exec::{CommandOutput, CommandRunner, ExecError};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original
/// value on drop.
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Scratch repository with a `skills/` tree, plus a scratch home directory.
///
/// Both tempdirs are cleaned up when the fixture drops.
pub struct RepoFixture {
    pub repo: tempfile::TempDir,
    pub home: tempfile::TempDir,
}

impl RepoFixture {
    pub fn new() -> std::io::Result<Self> {
        let repo = tempfile::tempdir()?;
        let home = tempfile::tempdir()?;
        std::fs::create_dir_all(repo.path().join("skills"))?;
        Ok(Self { repo, home })
    }

    pub fn repo_root(&self) -> &std::path::Path {
        self.repo.path()
    }

    pub fn home_path(&self) -> &std::path::Path {
        self.home.path()
    }

    /// Creates a skill directory with a `SKILL.md` marker, returning its path.
    pub fn create_skill(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let dir = self.repo.path().join("skills").join(name);
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join("SKILL.md"), content)?;
        Ok(dir)
    }

    /// RAII guard that points HOME at this fixture's scratch home.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(self.home.path().to_str().unwrap()))
    }
}

/// Scripted stand-in for real toolchain commands.
///
/// Responses are keyed by command name; unknown commands behave like a
/// missing executable. Invocations are recorded for assertions.
pub struct ScriptedRunner {
    responses: HashMap<String, CommandOutput>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Scripts a successful invocation with the given stdout.
    pub fn respond(mut self, name: &str, stdout: &str) -> Self {
        self.responses.insert(
            name.to_string(),
            CommandOutput {
                code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    /// Scripts a failing invocation with the given exit code and stderr.
    pub fn fail_with(mut self, name: &str, code: i32, stderr: &str) -> Self {
        self.responses.insert(
            name.to_string(),
            CommandOutput {
                code: Some(code),
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Names of commands invoked so far, in order.
    pub fn invoked(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, name: &str, args: &[&str]) -> Result<CommandOutput, ExecError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((name.to_string(), args.iter().map(|a| a.to_string()).collect()));
        // Commands resolved to absolute paths still match on the file stem.
        let key = std::path::Path::new(name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.to_string());
        self.responses
            .get(&key)
            .or_else(|| self.responses.get(name))
            .cloned()
            .ok_or_else(|| ExecError::NotFound {
                name: name.to_string(),
            })
    }

    fn run_in(
        &self,
        _dir: &std::path::Path,
        name: &str,
        args: &[&str],
    ) -> Result<CommandOutput, ExecError> {
        self.run(name, args)
    }
}

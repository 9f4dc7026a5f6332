//! The idempotent link-creation engine.
//!
//! Each destination is handled by delete-then-link: whatever occupies the
//! path (file, directory, or symlink, stale or correct) is removed and a
//! fresh symlink is created. The two steps are not atomic; a crash in
//! between leaves the destination absent until the next run. There is no
//! rollback: links created before a failure stay created, and the operator
//! re-runs after fixing the underlying condition.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::{skill_dirs, SkillDir};
use crate::manifest::write_manifest_if_absent;
use crate::targets::{default_targets, LinkKind, LinkTarget};

/// One symlink created (or re-created) during a run.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub tool: &'static str,
    pub dest: PathBuf,
    pub src: PathBuf,
}

impl CreatedLink {
    /// One human-readable progress line.
    pub fn describe(&self) -> String {
        format!(
            "[{}] {} -> {}",
            self.tool,
            self.dest.display(),
            self.src.display()
        )
    }
}

/// Outcome of one orchestrator run.
#[derive(Debug, Default)]
pub struct LinkReport {
    pub created: Vec<CreatedLink>,
    pub manifest_written: bool,
    pub skills: usize,
}

impl LinkReport {
    pub fn format_summary(&self) -> String {
        format!(
            "{} links across {} skills{}\n",
            self.created.len(),
            self.skills,
            if self.manifest_written {
                ", manifest written"
            } else {
                ""
            }
        )
    }
}

#[cfg(unix)]
fn symlink_dir(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(src, dest)
}

#[cfg(windows)]
fn symlink_dir(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dest)
}

/// Removes whatever currently occupies `dest`. An occupied destination is
/// expected on re-runs, never an error.
fn clear_destination(dest: &Path) -> Result<()> {
    match fs::symlink_metadata(dest) {
        Ok(meta) => {
            if meta.is_dir() {
                fs::remove_dir_all(dest)
            } else {
                // Covers regular files and symlinks (dangling ones included).
                fs::remove_file(dest)
            }
            .with_context(|| format!("failed to remove existing {}", dest.display()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("failed to inspect {}", dest.display())),
    }
}

/// Replaces `dest` with a symlink to `src`, creating parent directories.
///
/// A privilege failure aborts the whole run: on Windows, symlink creation
/// needs Developer Mode or an elevated shell, and re-running after acquiring
/// the privilege is the supported recovery path.
fn replace_with_link(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    clear_destination(dest)?;
    symlink_dir(src, dest).with_context(|| {
        if cfg!(windows) {
            format!(
                "failed to create symlink {} (on Windows, enable Developer Mode or run elevated)",
                dest.display()
            )
        } else {
            format!("failed to create symlink {}", dest.display())
        }
    })
}

fn link_target(
    target: &LinkTarget,
    skills_root: &Path,
    skills: &[SkillDir],
    home: &Path,
    repo_root: &Path,
    report: &mut LinkReport,
    on_link: &mut dyn FnMut(&CreatedLink),
) -> Result<()> {
    let dest = target.resolve(home, repo_root);
    match target.kind {
        LinkKind::Root => {
            replace_with_link(skills_root, &dest)?;
            tracing::debug!(tool = target.tool, dest = %dest.display(), "linked skills root");
            let link = CreatedLink {
                tool: target.tool,
                dest,
                src: skills_root.to_path_buf(),
            };
            on_link(&link);
            report.created.push(link);
        }
        LinkKind::PerSkill => {
            for skill in skills {
                let skill_dest = dest.join(&skill.name);
                replace_with_link(&skill.path, &skill_dest)?;
                tracing::debug!(
                    tool = target.tool,
                    skill = %skill.name,
                    dest = %skill_dest.display(),
                    "linked skill"
                );
                let link = CreatedLink {
                    tool: target.tool,
                    dest: skill_dest,
                    src: skill.path.clone(),
                };
                on_link(&link);
                report.created.push(link);
            }
        }
    }
    Ok(())
}

/// Projects `<repo_root>/skills` into every destination of the mapping table.
///
/// Safe to re-run: consecutive runs converge to the same link state. The
/// Gemini extension manifest is written into the skills root on the first
/// run only and never touched afterwards.
pub fn sync(repo_root: &Path, home: &Path) -> Result<LinkReport> {
    sync_with_progress(repo_root, home, |_| {})
}

/// Like [`sync`] but invokes `on_link` for each link as it is created, so
/// callers can report progress while a large fan-out is still running.
pub fn sync_with_progress(
    repo_root: &Path,
    home: &Path,
    mut on_link: impl FnMut(&CreatedLink),
) -> Result<LinkReport> {
    let skills_root = repo_root.join("skills");
    if !skills_root.is_dir() {
        bail!(
            "skills directory not found at {} (run from the repository root)",
            skills_root.display()
        );
    }

    let skills = skill_dirs(&skills_root)?;
    let mut report = LinkReport {
        manifest_written: write_manifest_if_absent(&skills_root)?,
        skills: skills.len(),
        ..Default::default()
    };

    for target in default_targets() {
        link_target(
            &target,
            &skills_root,
            &skills,
            home,
            repo_root,
            &mut report,
            &mut on_link,
        )?;
    }
    Ok(report)
}

//! Static mapping table of symlink destinations.

use std::path::{Path, PathBuf};

/// Directory name of the Gemini CLI extension, shared by the symlink target
/// and the generated manifest.
pub const GEMINI_EXTENSION_NAME: &str = "flutter-skills";

/// Whether a destination is resolved against the home directory or the
/// repository root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestBase {
    Home,
    Repo,
}

/// How a target consumes the skills directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// One symlink pointing at the whole skills root.
    Root,
    /// One symlink per immediate subdirectory of the skills root, created
    /// under the destination directory and named after the skill.
    PerSkill,
}

/// One entry of the destination mapping table.
#[derive(Debug, Clone)]
pub struct LinkTarget {
    /// Tool identifier for progress output ("cursor", "claude", ...).
    pub tool: &'static str,
    pub base: DestBase,
    /// Destination relative to `base`. For [`LinkKind::PerSkill`] this is the
    /// parent directory that receives one link per skill.
    pub dest: &'static str,
    pub kind: LinkKind,
}

impl LinkTarget {
    /// Resolves the destination path against the given base directories.
    pub fn resolve(&self, home: &Path, repo_root: &Path) -> PathBuf {
        match self.base {
            DestBase::Home => home.join(self.dest),
            DestBase::Repo => repo_root.join(self.dest),
        }
    }
}

/// The five tool integrations shipped by default.
pub fn default_targets() -> Vec<LinkTarget> {
    vec![
        LinkTarget {
            tool: "cursor",
            base: DestBase::Home,
            dest: ".cursor/rules/skills",
            kind: LinkKind::Root,
        },
        LinkTarget {
            tool: "kiro",
            base: DestBase::Home,
            dest: ".kilocode/rules/skills",
            kind: LinkKind::Root,
        },
        LinkTarget {
            tool: "claude",
            base: DestBase::Repo,
            dest: ".claude/skills",
            kind: LinkKind::PerSkill,
        },
        LinkTarget {
            tool: "gemini",
            base: DestBase::Home,
            dest: ".gemini/extensions/flutter-skills",
            kind: LinkKind::Root,
        },
        LinkTarget {
            tool: "codex",
            base: DestBase::Repo,
            dest: "codex/skills",
            kind: LinkKind::PerSkill,
        },
    ]
}

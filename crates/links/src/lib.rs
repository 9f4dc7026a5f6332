//! Symlink orchestration for skillbridge.
//!
//! Makes one canonical `skills/` directory visible to Cursor, Kiro, Claude,
//! Gemini, and Codex by creating symbolic links at each tool's expected
//! location. Re-runnable: every run converges to the same filesystem state.
//!
//! The destination set lives in a static mapping table ([`default_targets`]),
//! so wiring up another tool is a one-line data addition.

#![deny(unsafe_code)]

pub mod discovery;
pub mod manifest;
pub mod orchestrator;
pub mod targets;

pub use discovery::{skill_dirs, SkillDir, SKILL_MARKER};
pub use manifest::{write_manifest_if_absent, GeminiExtension, MANIFEST_FILE};
pub use orchestrator::{sync, sync_with_progress, CreatedLink, LinkReport};
pub use targets::{default_targets, DestBase, LinkKind, LinkTarget, GEMINI_EXTENSION_NAME};

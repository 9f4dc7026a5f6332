//! Workspace scaffolding for skillbridge.
//!
//! Creates the two-directory monorepo layout (`mobile/` plus `backend/`),
//! drives `flutter create` and `flutter pub get`, and writes starter files.
//! Fail-fast: the first error anywhere aborts the sequence, and re-running
//! skips steps that already completed.

#![deny(unsafe_code)]

pub mod prompt;
pub mod scaffold;
pub mod toolchain;

pub use prompt::{InquirePrompter, Prompter};
pub use scaffold::{bootstrap, BootstrapConfig, BootstrapOutcome};
pub use toolchain::{flutter_version, FLUTTER_INSTALL_URL};

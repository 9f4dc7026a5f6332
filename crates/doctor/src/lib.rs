//! Android environment diagnostics for skillbridge.
//!
//! A pure read/report tool: inspects `ANDROID_HOME`/`ANDROID_SDK_ROOT`,
//! resolves the platform tools, and enumerates emulators and attached
//! devices. Nothing on disk or in the environment is mutated. Every check
//! runs regardless of earlier results; the exit decision is a pure function
//! of the accumulated [`Report`].

#![deny(unsafe_code)]

pub mod checks;
pub mod report;
pub mod sdk;

pub use checks::{validate, DoctorEnv};
pub use report::{Check, CheckStatus, Report};
pub use sdk::{
    detect_sdk_root, fallback_sdk_dirs, resolve_tool, SdkOrigin, ToolLocation, REQUIRED_TOOLS,
};

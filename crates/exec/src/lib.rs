//! External command invocation for skillbridge.
//!
//! Every toolchain interaction (Flutter SDK, Android tooling) goes through
//! the [`CommandRunner`] trait so callers can substitute a scripted fake in
//! tests instead of touching real toolchains.

#![deny(unsafe_code)]

pub mod lookup;
pub mod runner;

pub use lookup::{find_in_dirs, find_in_path, find_in_path_from};
pub use runner::{CommandOutput, CommandRunner, ExecError, SystemRunner};

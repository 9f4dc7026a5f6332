//! Interactive prompts behind a narrow trait so tests can script answers.

use anyhow::{Context, Result};
use inquire::{Confirm, Text};

/// Interaction seam for the bootstrap flow.
pub trait Prompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
    fn text(&self, message: &str, default: &str) -> Result<String>;
}

/// Production prompter backed by `inquire`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Confirm::new(message)
            .with_default(default)
            .prompt()
            .context("failed to get user confirmation")
    }

    fn text(&self, message: &str, default: &str) -> Result<String> {
        let input = Text::new(message)
            .with_default(default)
            .prompt()
            .context("failed to get user input")?;
        if input.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input.trim().to_string())
        }
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Queue-driven prompter for tests: confirms and texts are popped in
    /// the order the flow asks for them.
    pub struct ScriptedPrompter {
        confirms: Mutex<VecDeque<bool>>,
        texts: Mutex<VecDeque<String>>,
    }

    impl ScriptedPrompter {
        pub fn new(confirms: Vec<bool>, texts: Vec<&str>) -> Self {
            Self {
                confirms: Mutex::new(confirms.into()),
                texts: Mutex::new(texts.into_iter().map(str::to_string).collect()),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, _message: &str, default: bool) -> Result<bool> {
            Ok(self
                .confirms
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .pop_front()
                .unwrap_or(default))
        }

        fn text(&self, _message: &str, default: &str) -> Result<String> {
            Ok(self
                .texts
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .pop_front()
                .unwrap_or_else(|| default.to_string()))
        }
    }
}

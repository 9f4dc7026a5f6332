//! Gemini CLI extension manifest, written once into the skills root.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::targets::GEMINI_EXTENSION_NAME;

/// File name of the generated descriptor, co-located with the skills root so
/// it is visible through the `~/.gemini/extensions` symlink.
pub const MANIFEST_FILE: &str = "gemini-extension.json";

/// Static descriptor consumed by the Gemini CLI extension loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeminiExtension {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub repository: String,
}

impl Default for GeminiExtension {
    fn default() -> Self {
        Self {
            name: GEMINI_EXTENSION_NAME.to_string(),
            version: "1.0.0".to_string(),
            description: "Agent skills for Flutter mobile development".to_string(),
            author: "skillbridge".to_string(),
            repository: "https://github.com/skillbridge/skillbridge".to_string(),
        }
    }
}

/// Writes the default manifest into the skills root if no file is present.
///
/// Existing files are left byte-for-byte untouched, even when their content
/// is stale or malformed. Returns `true` when a file was written.
pub fn write_manifest_if_absent(skills_root: &Path) -> Result<bool> {
    let path = skills_root.join(MANIFEST_FILE);
    if path.exists() {
        tracing::debug!(path = %path.display(), "manifest already present, leaving as-is");
        return Ok(false);
    }
    let body = serde_json::to_string_pretty(&GeminiExtension::default())?;
    fs::write(&path, body)
        .with_context(|| format!("failed to write manifest {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_manifest_on_first_run() {
        /*
        GIVEN a skills root without a manifest
        WHEN writing the manifest
        THEN a parseable descriptor with the extension name appears
        */
        let tmp = tempdir().unwrap();
        let written = write_manifest_if_absent(tmp.path()).unwrap();
        assert!(written);

        let raw = fs::read_to_string(tmp.path().join(MANIFEST_FILE)).unwrap();
        let parsed: GeminiExtension = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.name, GEMINI_EXTENSION_NAME);
    }

    #[test]
    fn leaves_existing_manifest_untouched() {
        /*
        GIVEN a manifest that already exists with malformed content
        WHEN running the conditional write again
        THEN the file is byte-for-byte unchanged
        */
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(MANIFEST_FILE);
        fs::write(&path, "{not even json").unwrap();

        let written = write_manifest_if_absent(tmp.path()).unwrap();
        assert!(!written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not even json");
    }
}

//! Enumeration of skill subdirectories under the skills root.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Marker file each skill directory is expected to carry.
pub const SKILL_MARKER: &str = "SKILL.md";

/// One skill content unit: a subdirectory of the skills root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDir {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the immediate subdirectories of the skills root, sorted by name.
///
/// Directories without a `SKILL.md` marker are still returned (they are
/// linked regardless) but logged as a warning so authors notice.
pub fn skill_dirs(skills_root: &Path) -> Result<Vec<SkillDir>> {
    let mut skills = Vec::new();
    for entry in WalkDir::new(skills_root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| {
            format!("failed to read skills root {}", skills_root.display())
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let path = entry.into_path();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !path.join(SKILL_MARKER).is_file() {
            tracing::warn!(skill = %name, "skill directory has no SKILL.md marker");
        }
        skills.push(SkillDir { name, path });
    }
    Ok(skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_only_immediate_subdirectories() {
        /*
        GIVEN a skills root with nested directories and loose files
        WHEN enumerating skills
        THEN only depth-one directories are returned, sorted by name
        */
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("beta/nested")).unwrap();
        fs::create_dir(root.join("alpha")).unwrap();
        fs::write(root.join("alpha/SKILL.md"), "# alpha").unwrap();
        fs::write(root.join("stray.md"), "not a skill").unwrap();

        let skills = skill_dirs(root).unwrap();
        let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn empty_root_yields_no_skills() {
        let tmp = tempdir().unwrap();
        assert!(skill_dirs(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = tempdir().unwrap();
        let gone = tmp.path().join("nope");
        assert!(skill_dirs(&gone).is_err());
    }
}

//! Decides which template entries are copied, based on exclude patterns.
use std::path::Path;

use anyhow::{Context, Result};
#[cfg(feature = "colors")]
use colored::Colorize;
use glob::Pattern;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiles validated glob patterns into a single matcher.
pub fn build_globset(patterns: &[Pattern]) -> Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        let glob =
            Glob::new(p.as_str()).with_context(|| format!("Invalid glob pattern: '{p}'"))?;
        b.add(glob);
    }
    Ok(b.build()?)
}

/// "foo\\bar" -> "foo/bar"
pub fn to_fwd_slash(p: &Path) -> String {
    p.to_string_lossy().replace('\\', "/")
}

/// Determines whether a template entry should be copied.
///
/// # Arguments
///
/// * `relative_path` - Path of the entry relative to the template root.
/// * `is_dir` - Directories also match patterns written with a trailing `/`.
/// * `exclude_set` - Compiled exclude patterns.
///
/// # Returns
///
/// * `bool` - `true` if the entry should be copied, `false` otherwise.
pub fn should_copy_entry(relative_path: &Path, is_dir: bool, exclude_set: &GlobSet) -> bool {
    if exclude_set.is_empty() {
        return true;
    }

    let path_str = to_fwd_slash(relative_path);
    let excluded = exclude_set.is_match(&path_str)
        || (is_dir && exclude_set.is_match(format!("{path_str}/")));

    #[cfg(feature = "colors")]
    debug!(
        "Checking template entry: {:?}, {}: {}",
        path_str,
        "excluded".bold().red(),
        excluded
    );
    #[cfg(not(feature = "colors"))]
    debug!(
        "Checking template entry: {:?}, excluded: {}",
        path_str, excluded
    );
    !excluded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn set(patterns: &[&str]) -> GlobSet {
        let pats: Vec<Pattern> = patterns.iter().map(|p| Pattern::new(p).unwrap()).collect();
        build_globset(&pats).unwrap()
    }

    #[test]
    fn no_patterns_copies_everything() {
        let empty = set(&[]);
        assert!(should_copy_entry(&PathBuf::from("src/lib.rs"), false, &empty));
        assert!(should_copy_entry(&PathBuf::from("target"), true, &empty));
    }

    #[test]
    fn trailing_slash_only_matches_directories() {
        let exc = set(&["target/"]);
        assert!(!should_copy_entry(&PathBuf::from("target"), true, &exc));
        assert!(should_copy_entry(&PathBuf::from("target"), false, &exc));
    }

    #[test]
    fn file_globs_match_relative_paths() {
        let exc = set(&["**/*.log"]);
        assert!(!should_copy_entry(&PathBuf::from("logs/run.log"), false, &exc));
        assert!(should_copy_entry(&PathBuf::from("src/main.rs"), false, &exc));
    }
}

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;
use log::{debug, info};

use crate::engine::{
    config::ScaffoldConfig,
    day::DayName,
    filter::{build_globset, should_copy_entry},
    model::{EntryKind, PlannedEntry, ScaffoldPlan, ScaffoldReport},
};

// ────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────

/// Plans the run and, unless `dry_run` is set, materializes it on disk.
pub fn scaffold(cfg: &ScaffoldConfig) -> Result<ScaffoldReport> {
    let plan = plan_scaffold(cfg)?;
    if cfg.dry_run {
        info!(
            "Dry run: {} would be created from {}",
            plan.destination.display(),
            plan.template_root.display()
        );
    } else {
        apply_plan(&plan)?;
    }
    Ok(plan.into_report(cfg.dry_run))
}

/// Walks the template and computes every directory and rewritten file the
/// destination will contain. Nothing is written.
pub fn plan_scaffold(cfg: &ScaffoldConfig) -> Result<ScaffoldPlan> {
    let day_name = cfg.day_name();
    let template_root = cfg.template_root();
    let destination = cfg.destination();

    if !template_root.is_dir() {
        bail!(
            "Template directory not found: {}",
            template_root.display()
        );
    }
    if fs::symlink_metadata(&destination).is_ok() {
        bail!("Destination already exists: {}", destination.display());
    }

    let exclude_set = build_globset(&cfg.exclude_patterns)?;

    // Sequential, sorted walk with every standard filter off: hidden files
    // and ignore files are template content too.
    let filter_root = template_root.clone();
    let walker = WalkBuilder::new(&template_root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let rel = entry
                .path()
                .strip_prefix(&filter_root)
                .unwrap_or(entry.path());
            rel.as_os_str().is_empty()
                || should_copy_entry(rel, entry.path().is_dir(), &exclude_set)
        })
        .build();

    let mut entries = Vec::new();
    for res in walker {
        let entry = res.with_context(|| format!("Failed to walk {}", template_root.display()))?;
        if entry.depth() == 0 {
            continue;
        }

        // Only the template root is swapped for the destination root; a
        // nested directory that shares the template's name keeps it.
        let relative_path = entry
            .path()
            .strip_prefix(&template_root)
            .with_context(|| format!("{} escapes the template root", entry.path().display()))?
            .to_path_buf();

        // `is_dir` follows symlinks, so a linked directory is recreated
        // (empty, since links are not followed) instead of read as a file.
        if entry.path().is_dir() {
            debug!("Planning directory {}", relative_path.display());
            entries.push(PlannedEntry {
                kind: EntryKind::Directory,
                relative_path,
                contents: None,
                replacements: 0,
            });
        } else {
            let (contents, replacements) =
                render_file(entry.path(), &cfg.placeholder, &day_name)?;
            debug!(
                "Planning file {} ({replacements} replacement(s))",
                relative_path.display()
            );
            entries.push(PlannedEntry {
                kind: EntryKind::File,
                relative_path,
                contents: Some(contents),
                replacements,
            });
        }
    }

    Ok(ScaffoldPlan {
        day_name,
        template_root,
        destination,
        entries,
    })
}

/// Creates the destination and every planned entry. Creation is exclusive
/// throughout: an existing directory or file aborts the run, and whatever
/// was already written stays in place.
pub fn apply_plan(plan: &ScaffoldPlan) -> Result<()> {
    fs::create_dir(&plan.destination)
        .with_context(|| format!("Failed to create {}", plan.destination.display()))?;
    info!("Created {}", plan.destination.display());

    for entry in &plan.entries {
        let target = plan.destination.join(&entry.relative_path);
        match entry.kind {
            EntryKind::Directory => {
                fs::create_dir(&target)
                    .with_context(|| format!("Failed to create directory {}", target.display()))?;
            }
            EntryKind::File => {
                let contents = entry.contents.as_deref().unwrap_or_default();
                write_new_file(&target, contents)?;
            }
        }
        debug!("Created {}", target.display());
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────

/// Reads a template file as text and substitutes the placeholder.
/// Returns the new contents and the number of substitutions made.
pub fn render_file(path: &Path, placeholder: &str, day_name: &DayName) -> Result<(String, usize)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file {}", path.display()))?;
    Ok(replace_placeholder(&text, placeholder, day_name))
}

/// Literal, non-overlapping substring replacement.
pub fn replace_placeholder(text: &str, placeholder: &str, day_name: &DayName) -> (String, usize) {
    if placeholder.is_empty() {
        return (text.to_string(), 0);
    }
    let count = text.matches(placeholder).count();
    (text.replace(placeholder, day_name.as_str()), count)
}

fn write_new_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let day = DayName::from_number(7);
        let (out, n) = replace_placeholder("dayNN uses dayNN::part1", "dayNN", &day);
        assert_eq!(out, "day07 uses day07::part1");
        assert_eq!(n, 2);
    }

    #[test]
    fn leaves_text_without_placeholder_alone() {
        let day = DayName::from_number(1);
        let (out, n) = replace_placeholder("fn main() {}", "dayNN", &day);
        assert_eq!(out, "fn main() {}");
        assert_eq!(n, 0);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let day = DayName::from_number(4);
        let (out, n) = replace_placeholder("DAYNN daynn dayNN", "dayNN", &day);
        assert_eq!(out, "DAYNN daynn day04");
        assert_eq!(n, 1);
    }
}

//! Contains the core data structures for a scaffold run.

use std::path::PathBuf;

use serde::Serialize;

use crate::engine::day::DayName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry that will be created under the destination.
#[derive(Debug, Clone)]
pub struct PlannedEntry {
    pub kind: EntryKind,
    /// Path relative to both the template root and the destination.
    pub relative_path: PathBuf,
    /// Rewritten file contents; `None` for directories.
    pub contents: Option<String>,
    pub replacements: usize,
}

/// Everything a run would create, computed before the first write.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub day_name: DayName,
    pub template_root: PathBuf,
    pub destination: PathBuf,
    pub entries: Vec<PlannedEntry>,
}

impl ScaffoldPlan {
    pub fn directories(&self) -> impl Iterator<Item = &PlannedEntry> {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::Directory)
    }

    pub fn files(&self) -> impl Iterator<Item = &PlannedEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::File)
    }

    pub fn into_report(self, dry_run: bool) -> ScaffoldReport {
        ScaffoldReport {
            directories: self.directories().count(),
            files: self.files().count(),
            replacements: self.entries.iter().map(|e| e.replacements).sum(),
            entries: self
                .entries
                .iter()
                .map(|e| ReportEntry {
                    kind: e.kind,
                    path: e.relative_path.clone(),
                })
                .collect(),
            day_name: self.day_name,
            destination: self.destination,
            dry_run,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub kind: EntryKind,
    pub path: PathBuf,
}

/// The serializable outcome of a run, printed by the UI layer.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub day_name: DayName,
    pub destination: PathBuf,
    pub directories: usize,
    pub files: usize,
    pub replacements: usize,
    pub entries: Vec<ReportEntry>,
    pub dry_run: bool,
}

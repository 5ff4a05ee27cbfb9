//! Source discovery: walk a tree and group C/C++ files by directory.
//!
//! Hidden directories (name starting with `.`) are pruned before descent, so
//! nothing beneath them is ever visited. Entries are sorted by file name at
//! every level, which makes the group order a stable pre-order walk.

use crate::model::{DirectoryGroup, FileEntry};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File name suffixes recognized as C/C++ sources (case-sensitive).
pub const SOURCE_EXTENSIONS: &[&str] = &[".c", ".cpp", ".h", ".hpp"];

pub fn is_source_file(name: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    // The scan root is never pruned, even when invoked as `.` or `.algos`.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_string_lossy().starts_with('.')
}

/// Collect every qualifying file under `root`, grouped by containing directory.
///
/// Directories without qualifying files are dropped. Any traversal error is
/// returned as-is; there is no partial result.
pub fn collect(root: &Path) -> Result<Vec<DirectoryGroup<FileEntry>>> {
    let mut groups: Vec<DirectoryGroup<FileEntry>> = Vec::new();
    let mut slots: HashMap<PathBuf, usize> = HashMap::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if is_hidden_dir(entry) {
                log::debug!("skipping hidden directory {}", entry.path().display());
                return false;
            }
            true
        });

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;

        if entry.file_type().is_dir() {
            slots.insert(entry.path().to_path_buf(), groups.len());
            groups.push(DirectoryGroup {
                label: relative_label(root, entry.path()),
                files: Vec::new(),
            });
            continue;
        }

        // Links to directories are neither descended into nor collected.
        if entry.path_is_symlink() && entry.path().is_dir() {
            log::debug!("skipping directory link {}", entry.path().display());
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_source_file(&file_name) {
            continue;
        }

        // A root that is itself a file has no registered parent.
        let Some(slot) = entry.path().parent().and_then(|p| slots.get(p)) else {
            continue;
        };

        log::debug!("collected {}", entry.path().display());
        groups[*slot].files.push(FileEntry {
            path: entry.path().to_path_buf(),
            file_name,
        });
    }

    groups.retain(|group| !group.files.is_empty());
    Ok(groups)
}

/// Directory path relative to `root`, joined with `/`. Empty for the root.
fn relative_label(root: &Path, dir: &Path) -> String {
    dir.strip_prefix(root)
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

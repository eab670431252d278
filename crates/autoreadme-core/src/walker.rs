use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::{DirEntry, WalkDir};

/// Directory names that are never descended into. A file whose name
/// contains any of these is skipped as well.
pub const IGNORED_NAMES: &[&str] = &[
    ".git",
    "__pycache__",
    ".pytest_cache",
    ".venv",
    "venv",
    "node_modules",
    ".DS_Store",
    ".coverage",
    ".tox",
    ".mypy_cache",
    ".ruff_cache",
];

/// Compiled bytecode, skipped even when its parent directory is walked.
pub const IGNORED_FILE_PATTERNS: &[&str] = &["*.pyc", "*.pyo", "*.pyd"];

fn build_globset(patterns: &[&str]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Render a relative path with `/` separators regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Recursively enumerates files under a root, pruning ignored directories.
pub struct DirectoryWalker {
    ignored_files: GlobSet,
}

impl Default for DirectoryWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryWalker {
    pub fn new() -> Self {
        Self {
            ignored_files: build_globset(IGNORED_FILE_PATTERNS),
        }
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        IGNORED_NAMES.contains(&name)
    }

    pub fn is_ignored_file(&self, name: &str) -> bool {
        IGNORED_NAMES.iter().any(|ignored| name.contains(ignored))
            || self.ignored_files.is_match(name)
    }

    /// Lazily yield every non-ignored file under `root`, relative to `root`.
    ///
    /// Ignored directories are pruned before descent, so nothing beneath them
    /// is ever visited. Unreadable entries are logged and skipped.
    pub fn walk<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(move |entry| entry.depth() == 0 || !self.prunes(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::debug!("skipping unreadable entry: {e}");
                    None
                }
            })
            .filter(is_file_like)
            .filter(move |entry| !self.is_ignored_file(&entry.file_name().to_string_lossy()))
            .filter_map(move |entry| {
                entry
                    .path()
                    .strip_prefix(root)
                    .ok()
                    .map(Path::to_path_buf)
            })
    }

    fn prunes(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir() && self.is_ignored_dir(&entry.file_name().to_string_lossy())
    }
}

/// Regular files, plus symlinks that do not resolve to a directory.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

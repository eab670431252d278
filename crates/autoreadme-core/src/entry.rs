use std::path::Path;

/// Conventional entry-point file names, highest precedence first.
pub const ENTRY_POINT_CANDIDATES: &[&str] = &[
    "main.py",
    "app.py",
    "run.py",
    "server.py",
    "index.py",
    "index.js",
    "app.js",
    "server.js",
    "main.js",
    "index.html",
    "app.html",
];

/// Checks the project root (not subdirectories) for conventional entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntryPointDetector;

impl EntryPointDetector {
    pub fn new() -> Self {
        Self
    }

    /// Candidates that exist as files directly under `root`, in candidate order.
    pub fn detect(&self, root: &Path) -> Vec<String> {
        ENTRY_POINT_CANDIDATES
            .iter()
            .filter(|name| root.join(name).is_file())
            .map(|name| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_detect_preserves_candidate_order() {
        let tmp = tempfile::tempdir().unwrap();
        // Created in reverse precedence order
        for name in ["index.html", "server.js", "app.py"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }

        let found = EntryPointDetector::new().detect(tmp.path());
        assert_eq!(found, vec!["app.py", "server.js", "index.html"]);
    }

    #[test]
    fn test_detect_ignores_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/main.py"), "").unwrap();
        // A directory with a candidate name is not an entry point
        fs::create_dir_all(tmp.path().join("app.js")).unwrap();

        assert!(EntryPointDetector::new().detect(tmp.path()).is_empty());
    }

    #[test]
    fn test_detect_empty_root() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(EntryPointDetector::new().detect(tmp.path()).is_empty());
    }
}

use std::collections::BTreeSet;
use std::path::Path;

use crate::walker::DirectoryWalker;

/// Language names keyed by file suffix.
const LANGUAGE_SUFFIXES: &[(&[&str], &str)] = &[
    (&[".py"], "Python"),
    (&[".js", ".ts"], "JavaScript/TypeScript"),
    (&[".java"], "Java"),
    (&[".go"], "Go"),
    (&[".rs"], "Rust"),
];

const PROFILE_CONFIG_SUFFIXES: &[&str] = &[".json", ".yaml", ".yml", ".toml"];
const MAIN_FILE_NAMES: &[&str] = &["main.py", "app.py", "index.js", "main.go"];

/// Coarse facts about a project, gathered for enhancement and summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectProfile {
    pub project_name: String,
    pub file_count: usize,
    pub languages: BTreeSet<String>,
    pub has_tests: bool,
    pub has_docs: bool,
    pub has_config: bool,
    /// Main files found anywhere in the tree, in walk order.
    pub main_files: Vec<String>,
}

impl ProjectProfile {
    /// Walk the project (with the usual pruning) and record what it contains.
    pub fn collect(walker: &DirectoryWalker, project_path: &Path) -> Self {
        let mut profile = ProjectProfile {
            project_name: crate::pipeline::project_name(project_path),
            ..Default::default()
        };

        for rel_path in walker.walk(project_path) {
            let Some(name) = rel_path.file_name().map(|n| n.to_string_lossy().to_string()) else {
                continue;
            };
            profile.record(&name);
        }
        profile
    }

    fn record(&mut self, name: &str) {
        self.file_count += 1;

        if let Some(language) = detect_language(name) {
            self.languages.insert(language.to_string());
        }

        // A file contributes to at most one of these flags.
        if name.ends_with(".md") {
            self.has_docs = true;
        } else if PROFILE_CONFIG_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            self.has_config = true;
        } else if is_test_name(name) {
            self.has_tests = true;
        } else if MAIN_FILE_NAMES.contains(&name) {
            self.main_files.push(name.to_string());
        }
    }
}

/// Language for a file name, if its suffix is recognised.
pub fn detect_language(name: &str) -> Option<&'static str> {
    LANGUAGE_SUFFIXES
        .iter()
        .find(|(suffixes, _)| suffixes.iter().any(|s| name.ends_with(s)))
        .map(|(_, language)| *language)
}

fn is_test_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("test") || lower.contains("spec")
}

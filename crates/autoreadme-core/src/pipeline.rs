use std::path::Path;

use crate::classify::FileClassifier;
use crate::entry::EntryPointDetector;
use crate::manifest::DependencyExtractor;
use crate::types::{CategorizedFiles, ProjectSnapshot};
use crate::walker::{to_slash, DirectoryWalker};

/// Walk → classify → extract → detect, producing a [`ProjectSnapshot`].
pub struct AnalysisPipeline {
    walker: DirectoryWalker,
    classifier: FileClassifier,
    extractor: DependencyExtractor,
    detector: EntryPointDetector,
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisPipeline {
    pub fn new() -> Self {
        Self {
            walker: DirectoryWalker::new(),
            classifier: FileClassifier::new(),
            extractor: DependencyExtractor::new(),
            detector: EntryPointDetector::new(),
        }
    }

    /// Run a full analysis of the project rooted at `project_path`.
    pub fn analyze(&self, project_path: &Path) -> ProjectSnapshot {
        let name = project_name(project_path);
        log::debug!("analyzing project '{name}' at {}", project_path.display());

        let categorized_files = self.categorize(project_path);
        log::debug!("classified {} files", categorized_files.total());
        for (category, files) in categorized_files.non_empty() {
            log::debug!("  {category}: {}", files.len());
        }

        let dependencies = self.extractor.extract(project_path);
        let entry_points = self.detector.detect(project_path);
        log::debug!("main files found: {entry_points:?}");

        ProjectSnapshot {
            name,
            categorized_files,
            dependencies,
            entry_points,
        }
    }

    fn categorize(&self, project_path: &Path) -> CategorizedFiles {
        let mut files = CategorizedFiles::new();
        for rel_path in self.walker.walk(project_path) {
            let category = self.classifier.classify_path(&rel_path);
            files.insert(category, to_slash(&rel_path));
        }
        files
    }
}

/// Project name: the final component of the (canonicalized) root path.
pub fn project_name(project_path: &Path) -> String {
    let resolved = project_path
        .canonicalize()
        .unwrap_or_else(|_| project_path.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| resolved.to_string_lossy().to_string())
}

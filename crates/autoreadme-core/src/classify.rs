use std::path::Path;

use crate::types::Category;

/// Suffix rules in priority order. The first category whose suffix list
/// matches the file name wins; anything unmatched is [`Category::Other`].
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Python, &[".py"]),
    (Category::JavaScript, &[".js", ".ts", ".jsx", ".tsx"]),
    (Category::Html, &[".html", ".htm"]),
    (Category::Css, &[".css", ".scss", ".sass"]),
    (
        Category::Config,
        &[".json", ".yaml", ".yml", ".toml", ".ini", ".cfg"],
    ),
    (Category::Documentation, &[".md", ".txt", ".rst"]),
];

/// Classifies file paths into categories using an ordered suffix table.
#[derive(Debug, Clone, Copy)]
pub struct FileClassifier {
    rules: &'static [(Category, &'static [&'static str])],
}

impl Default for FileClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FileClassifier {
    pub fn new() -> Self {
        Self {
            rules: CATEGORY_RULES,
        }
    }

    /// Classify a path. Only the final path component is inspected.
    pub fn classify(&self, path: &str) -> Category {
        let normalized = path.replace('\\', "/");
        let file_name = normalized.rsplit('/').next().unwrap_or(&normalized);

        self.rules
            .iter()
            .find(|(_, suffixes)| suffixes.iter().any(|s| file_name.ends_with(s)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    pub fn classify_path(&self, path: &Path) -> Category {
        self.classify(&path.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_rule() {
        let classifier = FileClassifier::new();
        assert_eq!(classifier.classify("main.py"), Category::Python);
        assert_eq!(classifier.classify("src/app.tsx"), Category::JavaScript);
        assert_eq!(classifier.classify("lib/util.ts"), Category::JavaScript);
        assert_eq!(classifier.classify("templates/index.htm"), Category::Html);
        assert_eq!(classifier.classify("static/site.scss"), Category::Css);
        assert_eq!(classifier.classify("setup.cfg"), Category::Config);
        assert_eq!(classifier.classify("package.json"), Category::Config);
        assert_eq!(classifier.classify("requirements.txt"), Category::Documentation);
        assert_eq!(classifier.classify("docs/guide.rst"), Category::Documentation);
    }

    #[test]
    fn test_classify_fallback_is_other() {
        let classifier = FileClassifier::new();
        assert_eq!(classifier.classify("Makefile"), Category::Other);
        assert_eq!(classifier.classify("LICENSE"), Category::Other);
        assert_eq!(classifier.classify("image.png"), Category::Other);
        assert_eq!(classifier.classify(""), Category::Other);
    }

    #[test]
    fn test_classify_uses_file_name_only() {
        let classifier = FileClassifier::new();
        // Directory names that look like suffixes must not leak into the result
        assert_eq!(classifier.classify("notes.md/data.bin"), Category::Other);
        assert_eq!(classifier.classify("pkg.py\\run.js"), Category::JavaScript);
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let classifier = FileClassifier::new();
        assert_eq!(classifier.classify("README.MD"), Category::Other);
    }

    #[test]
    fn test_rule_table_order() {
        let order: Vec<_> = CATEGORY_RULES.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                Category::Python,
                Category::JavaScript,
                Category::Html,
                Category::Css,
                Category::Config,
                Category::Documentation,
            ]
        );
    }

    #[test]
    fn test_every_input_gets_exactly_one_category() {
        let classifier = FileClassifier::new();
        let samples = [
            "a.py", "b.js", "c.html", "d.css", "e.toml", "f.md", "g", ".env", "h.pyc",
            "dir/i.sass", "j.yml", "k.ini",
        ];
        for sample in samples {
            let category = classifier.classify(sample);
            let matching_rules = CATEGORY_RULES
                .iter()
                .filter(|(_, suffixes)| suffixes.iter().any(|s| sample.ends_with(s)))
                .count();
            // Suffix sets are disjoint, so at most one rule can claim a file
            assert!(matching_rules <= 1, "{sample} matched {matching_rules} rules");
            if matching_rules == 0 {
                assert_eq!(category, Category::Other, "{sample}");
            } else {
                assert_ne!(category, Category::Other, "{sample}");
            }
        }
    }
}

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Semantic category of a discovered file.
/// Variants are listed in display order; every file maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Primary source language (Python).
    Python,
    /// Secondary source language (JavaScript/TypeScript).
    JavaScript,
    Html,
    Css,
    Config,
    Documentation,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Python,
        Category::JavaScript,
        Category::Html,
        Category::Css,
        Category::Config,
        Category::Documentation,
        Category::Other,
    ];

    /// Heading used when listing the category in the Structure section.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Python => "Python Files",
            Category::JavaScript => "Javascript Files",
            Category::Html => "Html Files",
            Category::Css => "Css Files",
            Category::Config => "Config Files",
            Category::Documentation => "Documentation",
            Category::Other => "Other Files",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Python => write!(f, "python"),
            Category::JavaScript => write!(f, "javascript"),
            Category::Html => write!(f, "html"),
            Category::Css => write!(f, "css"),
            Category::Config => write!(f, "config"),
            Category::Documentation => write!(f, "documentation"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// Package ecosystem whose manifest declares dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ecosystem {
    /// requirements.txt / pyproject.toml
    Python,
    /// package.json
    Node,
}

impl Ecosystem {
    pub const ALL: [Ecosystem; 2] = [Ecosystem::Python, Ecosystem::Node];

    pub fn label(&self) -> &'static str {
        match self {
            Ecosystem::Python => "Python",
            Ecosystem::Node => "Node.js",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ecosystem::Python => write!(f, "python"),
            Ecosystem::Node => write!(f, "node"),
        }
    }
}

/// Relative file paths grouped by category.
///
/// Paths use `/` separators and iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedFiles(BTreeMap<Category, BTreeSet<String>>);

impl CategorizedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, rel_path: String) -> bool {
        self.0.entry(category).or_default().insert(rel_path)
    }

    /// Files in `category`, lexicographically ordered. Empty when none.
    pub fn get(&self, category: Category) -> impl Iterator<Item = &str> {
        self.0
            .get(&category)
            .into_iter()
            .flat_map(|files| files.iter().map(String::as_str))
    }

    pub fn count(&self, category: Category) -> usize {
        self.0.get(&category).map_or(0, BTreeSet::len)
    }

    pub fn total(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    /// Categories with at least one file, in display order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &BTreeSet<String>)> {
        self.0
            .iter()
            .filter(|(_, files)| !files.is_empty())
            .map(|(category, files)| (*category, files))
    }

}

/// Dependency names per ecosystem, in manifest declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies(BTreeMap<Ecosystem, Vec<String>>);

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, ecosystem: Ecosystem, names: Vec<String>) {
        self.0.insert(ecosystem, names);
    }

    pub fn get(&self, ecosystem: Ecosystem) -> &[String] {
        self.0.get(&ecosystem).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

/// Everything the README is rendered from. Built once per generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub name: String,
    pub categorized_files: CategorizedFiles,
    pub dependencies: Dependencies,
    pub entry_points: Vec<String>,
}

impl ProjectSnapshot {
    /// An empty snapshot for a project called `name`.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categorized_files: CategorizedFiles::new(),
            dependencies: Dependencies::new(),
            entry_points: Vec::new(),
        }
    }
}

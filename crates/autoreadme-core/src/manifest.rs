use std::path::Path;

use serde::Deserialize;

use crate::error::ManifestError;
use crate::types::{Dependencies, Ecosystem};

/// How a manifest file is turned into dependency names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// Line-oriented `requirements.txt`.
    Requirements,
    /// `[project].dependencies` in `pyproject.toml`.
    Pyproject,
    /// `dependencies` + `devDependencies` keys in `package.json`.
    PackageJson,
    /// Recognised and given precedence, but never read.
    Unparsed,
}

/// Python manifest candidates in precedence order. Only the first one
/// present under the project root is consulted; later ones are not merged.
pub const PYTHON_MANIFESTS: &[(&str, ManifestFormat)] = &[
    ("requirements.txt", ManifestFormat::Requirements),
    ("pyproject.toml", ManifestFormat::Pyproject),
    ("setup.py", ManifestFormat::Unparsed),
    ("Pipfile", ManifestFormat::Unparsed),
];

pub const NODE_MANIFEST: (&str, ManifestFormat) = ("package.json", ManifestFormat::PackageJson);

/// Characters that start a version specifier in a requirement string.
const SPECIFIER_CHARS: &[char] = &['<', '>', '=', '!', '~'];

/// Result of probing one ecosystem's manifests.
#[derive(Debug)]
pub enum ManifestOutcome {
    /// No candidate manifest exists.
    Missing,
    Parsed {
        manifest: &'static str,
        names: Vec<String>,
    },
    /// The winning manifest is a format that is detected but not read.
    Unparsed { manifest: &'static str },
    Failed {
        manifest: &'static str,
        error: ManifestError,
    },
}

impl ManifestOutcome {
    pub fn manifest(&self) -> Option<&'static str> {
        match self {
            ManifestOutcome::Missing => None,
            ManifestOutcome::Parsed { manifest, .. }
            | ManifestOutcome::Unparsed { manifest }
            | ManifestOutcome::Failed { manifest, .. } => Some(*manifest),
        }
    }

    /// Dependency names, degrading every non-parsed outcome to an empty list.
    pub fn into_names(self) -> Vec<String> {
        match self {
            ManifestOutcome::Parsed { names, .. } => names,
            _ => Vec::new(),
        }
    }
}

/// Strip a trailing version specifier from a requirement string.
///
/// Splits on the first of `< > = ! ~` and trims the left-hand side, so
/// `"flask==2.0.1"` becomes `"flask"`. Applying it twice is a no-op.
pub fn strip_version_specifier(requirement: &str) -> &str {
    let name = match requirement.find(SPECIFIER_CHARS) {
        Some(idx) => &requirement[..idx],
        None => requirement,
    };
    name.trim()
}

/// Parse a `requirements.txt` body, skipping blank and `#` comment lines.
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| strip_version_specifier(line).to_string())
        .collect()
}

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    project: Option<PyProjectTable>,
}

#[derive(Debug, Default, Deserialize)]
struct PyProjectTable {
    #[serde(default)]
    dependencies: Option<Vec<String>>,
}

/// Parse `[project].dependencies` from a `pyproject.toml` body.
/// A missing table or key is an empty list, not an error.
pub fn parse_pyproject(content: &str, path: &Path) -> Result<Vec<String>, ManifestError> {
    let pyproject: PyProject = toml::from_str(content).map_err(|source| ManifestError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(pyproject
        .project
        .and_then(|p| p.dependencies)
        .unwrap_or_default()
        .iter()
        .map(|dep| strip_version_specifier(dep).to_string())
        .collect())
}

/// Parse a `package.json` body: `dependencies` keys first, then
/// `devDependencies` keys, each in declaration order.
pub fn parse_package_json(content: &str, path: &Path) -> Result<Vec<String>, ManifestError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let root = value.as_object().ok_or_else(|| ManifestError::Shape {
        path: path.to_path_buf(),
        field: "<root>",
        expected: "JSON object",
    })?;

    let mut names = Vec::new();
    for field in ["dependencies", "devDependencies"] {
        let Some(section) = root.get(field) else {
            continue;
        };
        let section = section.as_object().ok_or_else(|| ManifestError::Shape {
            path: path.to_path_buf(),
            field,
            expected: "JSON object",
        })?;
        names.extend(section.keys().cloned());
    }
    Ok(names)
}

/// Locates and parses dependency manifests directly under a project root.
#[derive(Debug, Default, Clone, Copy)]
pub struct DependencyExtractor;

impl DependencyExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Probe the Python candidates and read the first one found.
    pub fn python(&self, root: &Path) -> ManifestOutcome {
        PYTHON_MANIFESTS
            .iter()
            .find(|(name, _)| root.join(name).exists())
            .map(|&(name, format)| read_manifest(root, name, format))
            .unwrap_or(ManifestOutcome::Missing)
    }

    pub fn node(&self, root: &Path) -> ManifestOutcome {
        let (name, format) = NODE_MANIFEST;
        if root.join(name).exists() {
            read_manifest(root, name, format)
        } else {
            ManifestOutcome::Missing
        }
    }

    pub fn probe(&self, root: &Path, ecosystem: Ecosystem) -> ManifestOutcome {
        match ecosystem {
            Ecosystem::Python => self.python(root),
            Ecosystem::Node => self.node(root),
        }
    }

    /// Probe every ecosystem, logging failures and collecting the names.
    ///
    /// Failures are reported at debug level and degrade to an empty list.
    pub fn extract(&self, root: &Path) -> Dependencies {
        let mut dependencies = Dependencies::new();
        for ecosystem in Ecosystem::ALL {
            let outcome = self.probe(root, ecosystem);
            let source = outcome.manifest().unwrap_or_default();
            match &outcome {
                ManifestOutcome::Missing => {
                    log::debug!("no {ecosystem} manifest found");
                }
                ManifestOutcome::Parsed { names, .. } => {
                    log::debug!("found {source}: {} {ecosystem} dependencies", names.len());
                }
                ManifestOutcome::Unparsed { .. } => {
                    log::debug!("found {source}; dependency listing is not read from this format");
                }
                ManifestOutcome::Failed { error, .. } => {
                    log::debug!("error parsing {source}: {error}");
                }
            }
            dependencies.set(ecosystem, outcome.into_names());
        }
        dependencies
    }
}

fn read_manifest(root: &Path, name: &'static str, format: ManifestFormat) -> ManifestOutcome {
    if format == ManifestFormat::Unparsed {
        return ManifestOutcome::Unparsed { manifest: name };
    }

    let path = root.join(name);
    let parsed = std::fs::read_to_string(&path)
        .map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })
        .and_then(|content| match format {
            ManifestFormat::Requirements => Ok(parse_requirements(&content)),
            ManifestFormat::Pyproject => parse_pyproject(&content, &path),
            ManifestFormat::PackageJson => parse_package_json(&content, &path),
            ManifestFormat::Unparsed => Ok(Vec::new()),
        });

    match parsed {
        Ok(names) => ManifestOutcome::Parsed {
            manifest: name,
            names,
        },
        Err(error) => ManifestOutcome::Failed {
            manifest: name,
            error,
        },
    }
}

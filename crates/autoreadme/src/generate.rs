use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use thiserror::Error;

use autoreadme_core::capability::Capabilities;
use autoreadme_core::enhance::{run_enhancer, Enhancer};
use autoreadme_core::pipeline::AnalysisPipeline;
use autoreadme_core::types::ProjectSnapshot;
use autoreadme_report::markdown::format_readme;
use autoreadme_report::text::format_capabilities;

/// What to generate and how.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub project_path: PathBuf,
    /// File name (or path) relative to `project_path`.
    pub output_file: String,
    pub force: bool,
    pub enhance: bool,
    pub capabilities: Capabilities,
}

impl GenerateOptions {
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
            output_file: "README.md".to_string(),
            force: false,
            enhance: true,
            capabilities: Capabilities::default(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_path.join(&self.output_file)
    }
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("project path '{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A README that was written, plus the analysis it came from.
#[derive(Debug)]
pub struct GeneratedReadme {
    pub path: PathBuf,
    pub snapshot: ProjectSnapshot,
    pub enhanced: bool,
}

#[derive(Debug)]
pub enum GenerateOutcome {
    Written(GeneratedReadme),
    /// The output file exists and `force` was not set. Nothing was touched.
    AlreadyExists(PathBuf),
    Failed(GenerateError),
}

impl GenerateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerateOutcome::Written(_))
    }
}

/// Generate a README, stamping the footer with the current local time.
pub fn generate(options: &GenerateOptions, enhancer: &dyn Enhancer) -> GenerateOutcome {
    generate_at(options, enhancer, Local::now().naive_local())
}

/// Boolean view of [`generate`]: `true` only when the README was written.
pub fn generate_readme(options: &GenerateOptions, enhancer: &dyn Enhancer) -> bool {
    generate(options, enhancer).is_success()
}

/// Generate a README with an explicit render timestamp.
///
/// Never panics on I/O or manifest problems: every failure is reduced to a
/// [`GenerateOutcome`] and logged.
pub fn generate_at(
    options: &GenerateOptions,
    enhancer: &dyn Enhancer,
    rendered_at: NaiveDateTime,
) -> GenerateOutcome {
    let output_path = options.output_path();
    if output_path.exists() && !options.force {
        log::debug!("{} exists and force is off", output_path.display());
        return GenerateOutcome::AlreadyExists(output_path);
    }

    if !options.project_path.is_dir() {
        let err = GenerateError::NotADirectory(options.project_path.clone());
        log::error!("{err}");
        return GenerateOutcome::Failed(err);
    }

    log::debug!(
        "starting README generation for {}",
        options.project_path.display()
    );

    let snapshot = AnalysisPipeline::new().analyze(&options.project_path);
    let content = format_readme(&snapshot, &rendered_at);

    let (content, enhanced) = if options.enhance {
        enhance_or_original(enhancer, content, &options.project_path, &options.capabilities)
    } else {
        (content, false)
    };

    if let Err(source) = std::fs::write(&output_path, content) {
        let err = GenerateError::Write {
            path: output_path,
            source,
        };
        log::error!("{err}");
        return GenerateOutcome::Failed(err);
    }
    log::debug!("README written to {}", output_path.display());

    GenerateOutcome::Written(GeneratedReadme {
        path: output_path,
        snapshot,
        enhanced,
    })
}

/// Run the enhancer, keeping `content` unchanged if it fails.
fn enhance_or_original(
    enhancer: &dyn Enhancer,
    content: String,
    project_path: &Path,
    capabilities: &Capabilities,
) -> (String, bool) {
    log::info!("{}", format_capabilities(capabilities));

    log::debug!("enhancing README with {}", enhancer.name());
    match run_enhancer(enhancer, &content, project_path) {
        Ok(enhanced) => (enhanced, true),
        Err(e) => {
            log::warn!("enhancement failed, keeping generated README: {e}");
            (content, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreadme_core::enhance::Passthrough;
    use autoreadme_core::error::EnhanceError;
    use chrono::NaiveDate;
    use std::fs;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    #[test]
    fn test_generate_writes_readme() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("main.py"), "print('hi')\n").unwrap();

        let options = GenerateOptions::new(tmp.path());
        let outcome = generate_at(&options, &Passthrough, fixed_time());
        let GenerateOutcome::Written(readme) = outcome else {
            panic!("expected README to be written");
        };
        assert_eq!(readme.path, tmp.path().join("README.md"));
        assert_eq!(readme.snapshot.entry_points, vec!["main.py"]);
        assert!(readme.enhanced);

        let content = fs::read_to_string(&readme.path).unwrap();
        assert!(content.contains("python main.py"));
        assert!(content.ends_with("*Generated on 2025-01-02 03:04:05*\n"));
    }

    #[test]
    fn test_existing_output_is_left_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let readme = tmp.path().join("README.md");
        fs::write(&readme, b"hand written\n").unwrap();

        let options = GenerateOptions::new(tmp.path());
        for _ in 0..2 {
            let outcome = generate_at(&options, &Passthrough, fixed_time());
            assert!(matches!(outcome, GenerateOutcome::AlreadyExists(_)));
            assert!(!outcome.is_success());
            assert_eq!(fs::read(&readme).unwrap(), b"hand written\n");
        }
    }

    #[test]
    fn test_force_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("README.md"), "old").unwrap();

        let options = GenerateOptions {
            force: true,
            ..GenerateOptions::new(tmp.path())
        };
        assert!(generate_at(&options, &Passthrough, fixed_time()).is_success());
        let content = fs::read_to_string(tmp.path().join("README.md")).unwrap();
        assert!(content.starts_with("# "));
    }

    #[test]
    fn test_failed_enhancement_keeps_original_text() {
        let tmp = tempfile::tempdir().unwrap();
        let failing = |_: &str, _: &Path| -> Result<String, EnhanceError> {
            Err(EnhanceError::Other("service down".to_string()))
        };

        let options = GenerateOptions::new(tmp.path());
        let outcome = generate_at(&options, &failing, fixed_time());
        let GenerateOutcome::Written(readme) = outcome else {
            panic!("enhancement failure must not fail generation");
        };
        assert!(!readme.enhanced);

        let expected = format_readme(&readme.snapshot, &fixed_time());
        assert_eq!(fs::read_to_string(&readme.path).unwrap(), expected);
    }

    #[test]
    fn test_enhancement_applied_when_enabled() {
        let tmp = tempfile::tempdir().unwrap();
        let stamp = |content: &str, _: &Path| -> Result<String, EnhanceError> {
            Ok(format!("{content}<!-- enhanced -->\n"))
        };

        let options = GenerateOptions::new(tmp.path());
        assert!(generate_at(&options, &stamp, fixed_time()).is_success());
        let content = fs::read_to_string(tmp.path().join("README.md")).unwrap();
        assert!(content.ends_with("<!-- enhanced -->\n"));
    }

    #[test]
    fn test_enhancement_skipped_when_disabled() {
        let tmp = tempfile::tempdir().unwrap();
        let stamp = |_: &str, _: &Path| -> Result<String, EnhanceError> {
            Ok("replaced".to_string())
        };

        let options = GenerateOptions {
            enhance: false,
            ..GenerateOptions::new(tmp.path())
        };
        assert!(generate_at(&options, &stamp, fixed_time()).is_success());
        let content = fs::read_to_string(tmp.path().join("README.md")).unwrap();
        assert_ne!(content, "replaced");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            output_file: "missing-dir/README.md".to_string(),
            ..GenerateOptions::new(tmp.path())
        };
        let outcome = generate_at(&options, &Passthrough, fixed_time());
        assert!(matches!(
            outcome,
            GenerateOutcome::Failed(GenerateError::Write { .. })
        ));
        assert!(!generate_readme(&options, &Passthrough));
    }

    #[test]
    fn test_missing_project_dir_fails_cleanly() {
        let tmp = tempfile::tempdir().unwrap();
        let options = GenerateOptions::new(tmp.path().join("nope"));
        let outcome = generate_at(&options, &Passthrough, fixed_time());
        assert!(matches!(
            outcome,
            GenerateOutcome::Failed(GenerateError::NotADirectory(_))
        ));
    }
}

use std::path::Path;

use crate::error::EnhanceError;

/// Optional rewrite step applied to the assembled README before it is written.
///
/// Implementations must not touch the filesystem when they fail; the caller
/// falls back to the unenhanced text on any error.
pub trait Enhancer {
    /// Short name used in log output.
    fn name(&self) -> &str {
        "enhancer"
    }

    fn enhance(&self, content: &str, project_path: &Path) -> Result<String, EnhanceError>;
}

/// Returns the content unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl Enhancer for Passthrough {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn enhance(&self, content: &str, _project_path: &Path) -> Result<String, EnhanceError> {
        Ok(content.to_string())
    }
}

impl<F> Enhancer for F
where
    F: Fn(&str, &Path) -> Result<String, EnhanceError>,
{
    fn enhance(&self, content: &str, project_path: &Path) -> Result<String, EnhanceError> {
        self(content, project_path)
    }
}

/// Run `enhancer` and reject blank output as unusable.
pub fn run_enhancer(
    enhancer: &dyn Enhancer,
    content: &str,
    project_path: &Path,
) -> Result<String, EnhanceError> {
    let enhanced = enhancer.enhance(content, project_path)?;
    if enhanced.trim().is_empty() {
        return Err(EnhanceError::Empty);
    }
    Ok(enhanced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_is_identity() {
        let out = run_enhancer(&Passthrough, "# demo\n", Path::new(".")).unwrap();
        assert_eq!(out, "# demo\n");
    }

    #[test]
    fn test_closure_enhancer() {
        let shout = |content: &str, _: &Path| -> Result<String, EnhanceError> {
            Ok(content.to_uppercase())
        };
        let out = run_enhancer(&shout, "# demo\n", Path::new(".")).unwrap();
        assert_eq!(out, "# DEMO\n");
    }

    #[test]
    fn test_blank_output_is_rejected() {
        let blank = |_: &str, _: &Path| -> Result<String, EnhanceError> { Ok("  \n".to_string()) };
        let err = run_enhancer(&blank, "# demo\n", Path::new(".")).unwrap_err();
        assert!(matches!(err, EnhanceError::Empty));
    }

    #[test]
    fn test_errors_propagate() {
        let failing = |_: &str, _: &Path| -> Result<String, EnhanceError> {
            Err(EnhanceError::Unavailable("no credentials".to_string()))
        };
        let err = run_enhancer(&failing, "# demo\n", Path::new(".")).unwrap_err();
        assert_eq!(err.to_string(), "enhancement unavailable: no credentials");
    }
}

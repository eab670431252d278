/// Which enhancement services have credentials configured.
///
/// Built once at startup and passed into generation; nothing downstream
/// reads the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub available_services: Vec<String>,
}

impl Capabilities {
    /// Probe `credential_vars` through `is_set`, recording a service for each hit.
    pub fn probe<F>(credential_vars: &[String], is_set: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let available_services = credential_vars
            .iter()
            .filter(|var| is_set(var))
            .map(|var| service_name(var))
            .collect();
        Self { available_services }
    }

    /// Probe the real process environment. Empty values count as unset.
    pub fn from_env(credential_vars: &[String]) -> Self {
        Self::probe(credential_vars, |var| {
            std::env::var_os(var).is_some_and(|v| !v.is_empty())
        })
    }

    pub fn enhancement_available(&self) -> bool {
        !self.available_services.is_empty()
    }
}

/// `OPENAI_API_KEY` -> `openai`
fn service_name(var: &str) -> String {
    var.strip_suffix("_API_KEY")
        .unwrap_or(var)
        .to_lowercase()
}

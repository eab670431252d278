use chrono::NaiveDateTime;

use autoreadme_core::types::{Category, Ecosystem, ProjectSnapshot};

/// Maximum number of files or dependency names listed before an overflow line.
pub const MAX_LISTED: usize = 10;
/// Maximum number of names spelled out in an explicit `pip install` line.
pub const MAX_PIP_NAMES: usize = 5;

pub const FOOTER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Run commands checked before falling back to the first detected entry point.
const RUN_COMMANDS: &[(&str, &str)] = &[
    ("main.py", "python main.py"),
    ("app.py", "python app.py"),
    ("index.js", "node index.js"),
];

/// README sections, in the order they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Title,
    Description,
    Features,
    Installation,
    Usage,
    Structure,
    Dependencies,
    Contributing,
    License,
    Footer,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Title,
        Section::Description,
        Section::Features,
        Section::Installation,
        Section::Usage,
        Section::Structure,
        Section::Dependencies,
        Section::Contributing,
        Section::License,
        Section::Footer,
    ];
}

/// Render one section. Sections with nothing to say may return an empty string.
pub fn format_section(
    section: Section,
    snapshot: &ProjectSnapshot,
    rendered_at: &NaiveDateTime,
) -> String {
    match section {
        Section::Title => format!("# {}\n\n", snapshot.name),
        Section::Description => {
            "## Description\n\nA brief description of what this project does and who it's for.\n\n"
                .to_string()
        }
        Section::Features => "## Features\n\n- Feature 1\n- Feature 2\n- Feature 3\n\n".to_string(),
        Section::Installation => format_installation(snapshot),
        Section::Usage => format_usage(&snapshot.entry_points),
        Section::Structure => format_structure(snapshot),
        Section::Dependencies => format_dependencies(snapshot),
        Section::Contributing => format_contributing(),
        Section::License => "## License\n\nThis project is licensed under the MIT License - see the [LICENSE](LICENSE) file for details.\n\n".to_string(),
        Section::Footer => format!(
            "---\n\n*Generated on {}*\n",
            rendered_at.format(FOOTER_TIME_FORMAT)
        ),
    }
}

/// Format the full README for a snapshot. Deterministic for a fixed `rendered_at`.
pub fn format_readme(snapshot: &ProjectSnapshot, rendered_at: &NaiveDateTime) -> String {
    Section::ALL
        .iter()
        .map(|section| format_section(*section, snapshot, rendered_at))
        .collect()
}

fn format_installation(snapshot: &ProjectSnapshot) -> String {
    let mut out = String::from("## Installation\n\n");

    let python = snapshot.dependencies.get(Ecosystem::Python);
    if !python.is_empty() {
        out.push_str("### Python Dependencies\n\n```bash\n");
        let has_requirements = snapshot
            .categorized_files
            .get(Category::Config)
            .any(|f| f.ends_with("requirements.txt"));
        if has_requirements {
            out.push_str("pip install -r requirements.txt\n");
        } else {
            let names: Vec<&str> = python
                .iter()
                .take(MAX_PIP_NAMES)
                .map(String::as_str)
                .collect();
            out.push_str(&format!("pip install {}\n", names.join(" ")));
        }
        out.push_str("```\n\n");
    }

    if !snapshot.dependencies.get(Ecosystem::Node).is_empty() {
        out.push_str("### Node.js Dependencies\n\n```bash\nnpm install\n```\n\n");
    }

    out
}

/// Pick the run command for the detected entry points.
pub fn run_command(entry_points: &[String]) -> Option<String> {
    let first = entry_points.first()?;
    let command = RUN_COMMANDS
        .iter()
        .find(|(file, _)| entry_points.iter().any(|e| e.as_str() == *file))
        .map(|(_, command)| command.to_string())
        .unwrap_or_else(|| format!("python {first}"));
    Some(command)
}

fn format_usage(entry_points: &[String]) -> String {
    let mut out = String::from("## Usage\n\n");
    match run_command(entry_points) {
        Some(command) => {
            out.push_str("To run the project:\n\n```bash\n");
            out.push_str(&format!("{command}\n"));
            out.push_str("```\n\n");
        }
        None => {
            out.push_str("```bash\n# Add usage instructions here\n```\n\n");
        }
    }
    out
}

fn format_structure(snapshot: &ProjectSnapshot) -> String {
    let mut out = String::from("## Project Structure\n\n```\n");

    for (category, files) in snapshot.categorized_files.non_empty() {
        out.push_str(&format!("{}:\n", category.label()));
        for file in files.iter().take(MAX_LISTED) {
            out.push_str(&format!("  ├── {file}\n"));
        }
        if files.len() > MAX_LISTED {
            out.push_str(&format!(
                "  └── ... and {} more files\n",
                files.len() - MAX_LISTED
            ));
        }
        out.push('\n');
    }

    out.push_str("```\n\n");
    out
}

fn format_dependencies(snapshot: &ProjectSnapshot) -> String {
    if snapshot.dependencies.is_empty() {
        return String::new();
    }

    let mut out = String::from("## Dependencies\n\n");
    for ecosystem in Ecosystem::ALL {
        let names = snapshot.dependencies.get(ecosystem);
        if names.is_empty() {
            continue;
        }
        out.push_str(&format!("### {}\n\n", ecosystem.label()));
        for name in names.iter().take(MAX_LISTED) {
            out.push_str(&format!("- {name}\n"));
        }
        if names.len() > MAX_LISTED {
            out.push_str(&format!("- ... and {} more\n", names.len() - MAX_LISTED));
        }
        out.push('\n');
    }
    out
}

fn format_contributing() -> String {
    let mut out = String::from("## Contributing\n\nContributions are always welcome!\n\n");
    out.push_str("1. Fork the project\n");
    out.push_str("2. Create your feature branch (`git checkout -b feature/AmazingFeature`)\n");
    out.push_str("3. Commit your changes (`git commit -m 'Add some AmazingFeature'`)\n");
    out.push_str("4. Push to the branch (`git push origin feature/AmazingFeature`)\n");
    out.push_str("5. Open a Pull Request\n\n");
    out
}

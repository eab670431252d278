use std::path::Path;

use colored::Colorize;

use autoreadme_core::capability::Capabilities;
use autoreadme_core::profile::ProjectProfile;
use autoreadme_core::types::{Category, Ecosystem, ProjectSnapshot};

/// Format an analysis summary for terminal output.
pub fn format_summary(snapshot: &ProjectSnapshot, profile: Option<&ProjectProfile>) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", format!("Project: {}", snapshot.name).bold()));
    out.push_str(&format!("{}\n", "=".repeat(40)));

    out.push_str(&format!(
        "\n{}: {} files\n",
        "Files".bold(),
        snapshot.categorized_files.total()
    ));
    for category in Category::ALL {
        let count = snapshot.categorized_files.count(category);
        if count > 0 {
            out.push_str(&format!("  {}: {count}\n", category.label()));
        }
    }

    out.push_str(&format!("\n{}\n", "Dependencies".bold()));
    if snapshot.dependencies.is_empty() {
        out.push_str("  none detected\n");
    } else {
        for ecosystem in Ecosystem::ALL {
            let names = snapshot.dependencies.get(ecosystem);
            if !names.is_empty() {
                out.push_str(&format!("  {}: {}\n", ecosystem.label(), names.len()));
            }
        }
    }

    out.push_str(&format!("\n{}: ", "Entry points".bold()));
    if snapshot.entry_points.is_empty() {
        out.push_str(&format!("{}\n", "none".dimmed()));
    } else {
        out.push_str(&format!("{}\n", snapshot.entry_points.join(", ")));
    }

    if let Some(profile) = profile {
        out.push_str(&format_profile(profile));
    }

    out
}

fn format_profile(profile: &ProjectProfile) -> String {
    let mut out = format!("\n{}\n{}\n", "Profile".bold(), "-".repeat(40));

    let languages = if profile.languages.is_empty() {
        "unknown".to_string()
    } else {
        profile
            .languages
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push_str(&format!("  Languages: {languages}\n"));
    out.push_str(&format!("  Tests: {}\n", yes_no(profile.has_tests)));
    out.push_str(&format!("  Docs: {}\n", yes_no(profile.has_docs)));
    out.push_str(&format!("  Config: {}\n", yes_no(profile.has_config)));
    if !profile.main_files.is_empty() {
        out.push_str(&format!("  Main files: {}\n", profile.main_files.join(", ")));
    }
    out
}

fn yes_no(flag: bool) -> String {
    if flag {
        "yes".green().to_string()
    } else {
        "no".dimmed().to_string()
    }
}

/// One-line description of the enhancement capability.
pub fn format_capabilities(capabilities: &Capabilities) -> String {
    if capabilities.enhancement_available() {
        format!(
            "Available AI services: {}",
            capabilities.available_services.join(", ")
        )
    } else {
        "No AI services configured. Using basic README generation.".to_string()
    }
}

pub fn format_written(output: &Path) -> String {
    format!(
        "{} README generated successfully: {}",
        "✓".green().bold(),
        output.display()
    )
}

pub fn format_already_exists(output: &Path) -> String {
    format!(
        "{} README file already exists: {}\nUse --force to overwrite",
        "!".yellow().bold(),
        output.display()
    )
}

pub fn format_failed(reason: &str) -> String {
    format!("{} Failed to generate README: {reason}", "✗".red().bold())
}

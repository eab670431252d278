use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Parser;

use autoreadme::{generate, GenerateOptions, GenerateOutcome};
use autoreadme_core::capability::Capabilities;
use autoreadme_core::config::Config;
use autoreadme_core::enhance::Passthrough;
use autoreadme_core::profile::ProjectProfile;
use autoreadme_core::walker::DirectoryWalker;
use autoreadme_report::text;

#[derive(Parser)]
#[command(name = "autoreadme")]
#[command(about = "Generate a README file for a project directory")]
#[command(version)]
#[command(after_help = "Examples:
  autoreadme /path/to/your/project
  autoreadme . --output README.md
  autoreadme /path/to/project --force")]
struct Cli {
    /// Path to the project directory
    #[arg(value_parser = parse_project_dir)]
    project_path: PathBuf,
    /// Output filename for the README [default: README.md]
    #[arg(short, long)]
    output: Option<String>,
    /// Overwrite existing README file if it exists
    #[arg(short, long)]
    force: bool,
    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
    /// Write the generated README without running the enhancement step
    #[arg(long)]
    no_enhance: bool,
    /// Config file path (defaults to .autoreadme.toml in the project root or an ancestor)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn parse_project_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if !path.exists() {
        return Err(format!("Path does not exist: {s}"));
    }
    if !path.is_dir() {
        return Err(format!("Path is not a directory: {s}"));
    }
    Ok(path)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\nOperation cancelled by user");
        process::exit(1);
    }) {
        log::debug!("failed to install Ctrl-C handler: {e}");
    }

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}", text::format_failed(&format!("{e:#}")));
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,autoreadme=debug,autoreadme_core=debug,autoreadme_report=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

fn load_config(project_path: &Path, config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(p) => Config::load(p),
        None => Ok(Config::load_or_default(project_path)),
    }
}

/// Returns whether the README was written.
fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli.project_path, cli.config.as_deref())?;

    let options = GenerateOptions {
        output_file: cli.output.unwrap_or_else(|| config.output.file.clone()),
        force: cli.force,
        enhance: config.enhance.enabled && !cli.no_enhance,
        capabilities: Capabilities::from_env(&config.enhance.credential_vars),
        project_path: cli.project_path,
    };

    log::debug!("analyzing project at: {}", options.project_path.display());
    log::debug!("output file: {}", options.output_file);

    // Profiled before writing so the new README is not counted.
    let profile = cli
        .verbose
        .then(|| ProjectProfile::collect(&DirectoryWalker::new(), &options.project_path));

    match generate(&options, &Passthrough) {
        GenerateOutcome::Written(readme) => {
            if let Some(profile) = &profile {
                print!("{}", text::format_summary(&readme.snapshot, Some(profile)));
            }
            println!("{}", text::format_written(&readme.path));
            Ok(true)
        }
        GenerateOutcome::AlreadyExists(path) => {
            eprintln!("{}", text::format_already_exists(&path));
            Ok(false)
        }
        GenerateOutcome::Failed(err) => {
            eprintln!("{}", text::format_failed(&err.to_string()));
            Ok(false)
        }
    }
}

pub mod capability;
pub mod classify;
pub mod config;
pub mod enhance;
pub mod entry;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod profile;
pub mod types;
pub mod walker;

pub use capability::Capabilities;
pub use classify::FileClassifier;
pub use config::Config;
pub use enhance::{Enhancer, Passthrough};
pub use entry::EntryPointDetector;
pub use error::{EnhanceError, ManifestError};
pub use manifest::{DependencyExtractor, ManifestOutcome};
pub use pipeline::AnalysisPipeline;
pub use profile::ProjectProfile;
pub use types::*;
pub use walker::DirectoryWalker;

//! Generate a README for a project directory from its layout, dependency
//! manifests, and conventional entry points.

pub mod generate;

pub use generate::{
    generate, generate_at, generate_readme, GenerateError, GenerateOptions, GenerateOutcome,
    GeneratedReadme,
};

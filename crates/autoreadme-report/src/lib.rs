//! Rendering for autoreadme: the README itself (`markdown`) and terminal
//! status output (`text`).

pub mod markdown;
pub mod text;

pub use markdown::{format_readme, Section};

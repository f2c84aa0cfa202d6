//! Generator configuration for swagen.
//!
//! The configuration is a JSON file consumed as-is by the generation
//! pipeline: output locations, artifact toggles, naming conventions,
//! exclusion rules, and template path overrides. Parsing failures are
//! reported as miette diagnostics pointing into the offending source.

mod error;
mod file;
mod options;

pub use error::{Error, Result};
pub use file::ConfigFile;
pub use options::{ExcludePattern, GeneratorOptions, TemplateOverrides};

//! Template-driven generation pipeline for swagen.
//!
//! This crate turns a pre-parsed schema model into source files on disk:
//!
//! - [`paths`] - logical namespace to filesystem path resolution
//! - [`description`] - explicit type-override directives in description text
//! - [`ordering`] - deterministic ordering of property bags
//! - [`templates`] - Handlebars compilation with a per-engine helper set
//! - [`artifact`] - rendered files and their idempotent persistence
//! - [`pipeline`] - the generation pass tying it all together
//!
//! The pipeline is synchronous and single-threaded; a generation pass owns
//! its output tree for the duration of the run. Writes are content-gated,
//! so a repeated pass over unchanged input touches nothing on disk.

pub mod artifact;
pub mod description;
mod error;
pub mod ordering;
pub mod paths;
pub mod pipeline;
pub mod schema;
pub mod templates;

pub use artifact::{Artifact, ArtifactRegistry, WriteMode, WriteStats};
pub use error::TemplateError;
pub use pipeline::GenerationPass;
pub use schema::{Definition, Property, SchemaModel};
pub use templates::{HelperSet, TemplateEngine, TemplateHandle};

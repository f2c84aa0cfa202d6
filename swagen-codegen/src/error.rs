use std::path::PathBuf;

use thiserror::Error;

/// Template compilation and rendering failures.
///
/// Filesystem failures outside template reading propagate as
/// [`eyre::Report`] from the artifact layer; configuration problems are
/// reported by `swagen-manifest` before a pass ever starts.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template source is not well-formed Handlebars.
    #[error("template '{name}' is not well-formed")]
    Syntax {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// Rendering failed, typically inside a helper.
    #[error("failed to render template '{name}'")]
    Render {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// The template file could not be read.
    #[error("failed to read template file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Handlebars template compilation with an explicit helper set.
//!
//! Each [`TemplateEngine`] owns its own Handlebars registry, so helpers
//! registered for one generation run are invisible to any other. Helpers
//! go in at engine construction and templates compile afterwards, which
//! makes the register-before-compile contract structural instead of a
//! calling convention.
//!
//! Rendering never touches the filesystem; a helper that chooses to do
//! I/O owns that side effect itself.

use std::fs;
use std::path::Path;

use handlebars::{Handlebars, HelperDef, handlebars_helper};
use serde::Serialize;
use swagen_core::{to_camel_case, to_kebab_case, to_pascal_case};

use crate::error::TemplateError;

handlebars_helper!(KebabCaseHelper: |s: String| to_kebab_case(&s));
handlebars_helper!(CamelCaseHelper: |s: String| to_camel_case(&s));
handlebars_helper!(PascalCaseHelper: |s: String| to_pascal_case(&s));

/// A set of named render helpers for one engine.
///
/// Helper names must be unique; registering the same name twice keeps the
/// last registration. Insertion order is otherwise irrelevant.
#[derive(Default)]
pub struct HelperSet {
    helpers: Vec<(String, Box<dyn HelperDef + Send + Sync + 'static>)>,
}

impl HelperSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a helper under `name`, shadowing any earlier registration.
    pub fn with<H>(mut self, name: &str, helper: H) -> Self
    where
        H: HelperDef + Send + Sync + 'static,
    {
        self.helpers.push((name.to_string(), Box::new(helper)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}

/// An opaque handle to a compiled, reusable template.
///
/// Valid only for the engine that compiled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateHandle(String);

impl TemplateHandle {
    /// The name the template was compiled under.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Template compiler and renderer for one generation run.
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create an engine with only the built-in casing helpers
    /// (`kebabCase`, `camelCase`, `pascalCase`).
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_helper("kebabCase", Box::new(KebabCaseHelper));
        registry.register_helper("camelCase", Box::new(CamelCaseHelper));
        registry.register_helper("pascalCase", Box::new(PascalCaseHelper));
        Self { registry }
    }

    /// Create an engine with the built-ins plus `helpers`.
    ///
    /// User helpers are registered after the built-ins, so a user helper
    /// named like a built-in shadows it.
    pub fn with_helpers(helpers: HelperSet) -> Self {
        let mut engine = Self::new();
        for (name, helper) in helpers.helpers {
            engine.registry.register_helper(&name, helper);
        }
        engine
    }

    /// Compile template source under `name`, replacing any template
    /// previously compiled under the same name.
    pub fn compile_str(
        &mut self,
        name: &str,
        source: &str,
    ) -> Result<TemplateHandle, TemplateError> {
        self.registry
            .register_template_string(name, source)
            .map_err(|e| TemplateError::Syntax {
                name: name.to_string(),
                source: Box::new(e),
            })?;
        Ok(TemplateHandle(name.to_string()))
    }

    /// Read a UTF-8 template file and compile it under `name`.
    pub fn compile_file(
        &mut self,
        name: &str,
        path: &Path,
    ) -> Result<TemplateHandle, TemplateError> {
        let source = fs::read_to_string(path).map_err(|e| TemplateError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.compile_str(name, &source)
    }

    /// Render a compiled template with the given data context.
    pub fn render<T: Serialize>(
        &self,
        handle: &TemplateHandle,
        data: &T,
    ) -> Result<String, TemplateError> {
        self.registry
            .render(&handle.0, data)
            .map_err(|e| TemplateError::Render {
                name: handle.0.clone(),
                source: Box::new(e),
            })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! The generation pass: schema model in, idempotent file tree out.
//!
//! Control flow per definition: normalize the namespace and type name,
//! apply the exclusion policies, resolve the output path, render through
//! the template engine, and hand the rendered artifact to the registry
//! for a content-gated write. Everything runs synchronously; one pass
//! owns its output tree for the duration of the run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use eyre::Result;
use serde_json::json;
use swagen_core::{ensure_dir, remove_tree, to_kebab_case};
use swagen_manifest::GeneratorOptions;

use crate::artifact::{Artifact, ArtifactRegistry, WriteStats};
use crate::description::{extract_type, has_type_override};
use crate::ordering::sorted_entries;
use crate::paths::{namespace_to_path, path_to_root};
use crate::schema::{Definition, Property, SchemaModel};
use crate::templates::{HelperSet, TemplateEngine, TemplateHandle};

const DEFAULT_MODEL_TEMPLATE: &str = "\
{{#if description}}/** {{description}} */
{{/if}}export interface {{name}} {
{{#each properties}}  {{name}}{{#unless required}}?{{/unless}}: {{type}};
{{/each}}}
";

const DEFAULT_ENUM_TEMPLATE: &str = "\
{{#each enums}}export enum {{name}} {
{{#each values}}  {{this}} = '{{this}}',
{{/each}}}

{{/each}}";

const DEFAULT_BARREL_TEMPLATE: &str = "\
{{#each files}}export * from './{{this}}';
{{/each}}";

/// One synchronous generation pass over a schema model.
///
/// Construction compiles every template the pass will use, with the
/// helper set already in place, so a malformed template fails the pass
/// before anything is written.
pub struct GenerationPass<'a> {
    options: &'a GeneratorOptions,
    engine: TemplateEngine,
    model_template: TemplateHandle,
    enum_template: TemplateHandle,
    barrel_template: TemplateHandle,
}

impl<'a> GenerationPass<'a> {
    /// Create a pass for `options`, compiling configured template
    /// overrides (or the built-in defaults) with `helpers` registered.
    pub fn new(options: &'a GeneratorOptions, helpers: HelperSet) -> Result<Self> {
        let mut engine = TemplateEngine::with_helpers(helpers);
        let model_template = match &options.templates.models {
            Some(path) => engine.compile_file("model", path)?,
            None => engine.compile_str("model", DEFAULT_MODEL_TEMPLATE)?,
        };
        let enum_template = match &options.templates.enum_file {
            Some(path) => engine.compile_file("enum", path)?,
            None => engine.compile_str("enum", DEFAULT_ENUM_TEMPLATE)?,
        };
        let barrel_template = match &options.templates.barrel {
            Some(path) => engine.compile_file("barrel", path)?,
            None => engine.compile_str("barrel", DEFAULT_BARREL_TEMPLATE)?,
        };
        Ok(Self {
            options,
            engine,
            model_template,
            enum_template,
            barrel_template,
        })
    }

    /// Render all artifacts for `model` without touching disk.
    pub fn plan(&self, model: &SchemaModel) -> Result<ArtifactRegistry> {
        let mut registry = ArtifactRegistry::new();
        // directory -> barrel entries, BTreeMap for a stable barrel order
        let mut barrels: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();

        for (key, definition) in &model.definitions {
            if self.options.is_type_filtered(key) || self.options.is_excluded(key) {
                continue;
            }
            let type_name = self.normalized_type_name(key);
            let namespace = self.normalized_namespace(&definition.namespace);
            let contents = self.render_model(&type_name, &namespace, definition)?;

            let dir = self.model_dir(&namespace);
            let stem = format!("{}.model", to_kebab_case(&type_name));
            if self.options.generate_barrel_files {
                barrels.entry(dir.clone()).or_default().push(stem.clone());
            }
            registry.register(Artifact::generated(dir.join(format!("{stem}.ts")), contents));
        }

        if !model.enums.is_empty() {
            let contents = self.render_enums(model)?;
            registry.register(Artifact::generated(
                self.options.enum_ts_file.clone(),
                contents,
            ));
        }

        for (dir, mut files) in barrels {
            files.sort();
            let contents = self
                .engine
                .render(&self.barrel_template, &json!({ "files": files }))?;
            registry.register(Artifact::generated(dir.join("index.ts"), contents));
        }

        Ok(registry)
    }

    /// Plan and persist all artifacts under `output_root`.
    ///
    /// A second run over unchanged input performs zero writes. On failure
    /// the pass stops at the failing artifact; earlier writes stay on
    /// disk.
    pub fn run(&self, model: &SchemaModel, output_root: &Path) -> Result<WriteStats> {
        let registry = self.plan(model)?;
        ensure_dir(&output_root.join(&self.options.model_folder))?;
        registry.write_all(output_root)
    }

    /// Delete the generated model tree for a regenerate-from-scratch run.
    pub fn clean(&self, output_root: &Path) -> Result<()> {
        remove_tree(&output_root.join(&self.options.model_folder))
    }

    /// Directory a namespace's model files land in, relative to the
    /// output root.
    fn model_dir(&self, namespace: &str) -> PathBuf {
        let ns_path = namespace_to_path(namespace);
        if ns_path.is_empty() {
            self.options.model_folder.clone()
        } else {
            self.options.model_folder.join(ns_path)
        }
    }

    fn normalized_namespace(&self, namespace: &str) -> String {
        let mut ns = namespace.to_string();
        for prefix in &self.options.namespace_prefixes_to_remove {
            if let Some(rest) = ns.strip_prefix(prefix.as_str()) {
                ns = rest.trim_start_matches('.').to_string();
            }
        }
        ns
    }

    fn normalized_type_name(&self, name: &str) -> String {
        let mut n = name.to_string();
        for suffix in &self.options.type_name_suffixes_to_remove {
            if let Some(rest) = n.strip_suffix(suffix.as_str()) {
                n = rest.to_string();
            }
        }
        n
    }

    fn property_type(property: &Property) -> String {
        if let Some(description) = &property.description {
            if has_type_override(description) {
                return extract_type(description);
            }
        }
        property
            .type_name
            .clone()
            .unwrap_or_else(|| "any".to_string())
    }

    fn render_model(
        &self,
        name: &str,
        namespace: &str,
        definition: &Definition,
    ) -> Result<String> {
        let properties = if self.options.sort_model_properties {
            sorted_entries(&definition.properties)
        } else {
            definition.properties.clone()
        };
        let properties: Vec<_> = properties
            .iter()
            .map(|(prop_name, prop)| {
                json!({
                    "name": prop_name,
                    "type": Self::property_type(prop),
                    "required": prop.required,
                })
            })
            .collect();

        let data = json!({
            "name": name,
            "namespace": namespace,
            "description": definition.description,
            "pathToRoot": path_to_root(namespace),
            "properties": properties,
        });
        Ok(self.engine.render(&self.model_template, &data)?)
    }

    fn render_enums(&self, model: &SchemaModel) -> Result<String> {
        let enums = if self.options.sort_enum_types {
            sorted_entries(&model.enums)
        } else {
            model.enums.clone()
        };
        let enums: Vec<_> = enums
            .iter()
            .map(|(name, values)| json!({ "name": name, "values": values }))
            .collect();
        Ok(self.engine.render(&self.enum_template, &json!({ "enums": enums }))?)
    }
}

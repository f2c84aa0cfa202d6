//! Pre-parsed schema model consumed by the generation pass.
//!
//! Ingestion of the source API description format happens upstream; by the
//! time a model reaches this crate it is a plain bag of named definitions.
//! `IndexMap` keeps the upstream ordering intact so that the sorting
//! toggles in the configuration stay meaningful.

use indexmap::IndexMap;
use serde::Deserialize;

/// A schema document: named type definitions and enumerations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaModel {
    #[serde(default)]
    pub definitions: IndexMap<String, Definition>,

    /// Enumeration name to its value list
    #[serde(default)]
    pub enums: IndexMap<String, Vec<String>>,
}

/// A single named entity definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    /// Dotted logical namespace; empty means the generation root
    #[serde(default)]
    pub namespace: String,

    pub description: Option<String>,

    #[serde(default)]
    pub properties: IndexMap<String, Property>,
}

/// A property of a definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    /// Inferred type name, used unless the description overrides it
    #[serde(rename = "type")]
    pub type_name: Option<String>,

    /// Free text, optionally starting with a `ts-type`/`type` directive
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,
}

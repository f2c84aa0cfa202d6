use std::path::PathBuf;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::{Error, Result};

/// A single `exclude` entry.
///
/// The regex is compiled once at config load; an entry that does not
/// compile stays a plain literal. A compiling entry matches as an
/// unanchored regex, so `"Order"` also excludes `"MyOrders"`; anchor
/// with `^...$` for exact-only exclusion.
#[derive(Debug, Clone)]
pub struct ExcludePattern {
    raw: String,
    regex: Option<Regex>,
}

impl ExcludePattern {
    /// The entry as written in the config.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn matches(&self, candidate: &str) -> bool {
        self.raw == candidate || self.regex.as_ref().is_some_and(|re| re.is_match(candidate))
    }
}

impl<'de> Deserialize<'de> for ExcludePattern {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let regex = Regex::new(&raw).ok();
        Ok(Self { raw, regex })
    }
}

/// Generator configuration, deserialized from a JSON config file.
///
/// The configuration is immutable input to the pipeline; nothing in the
/// core mutates it. Unknown keys are ignored so configs can carry
/// project-local annotations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Root directory for generated model files
    pub model_folder: PathBuf,
    /// Target file for the generated enumeration module
    #[serde(rename = "enumTSFile")]
    pub enum_ts_file: PathBuf,

    #[serde(default)]
    pub generate_barrel_files: bool,
    #[serde(default)]
    pub generate_classes: bool,
    #[serde(default)]
    pub generate_form_groups: bool,
    #[serde(default)]
    pub generate_validator_file: bool,

    pub base_model_file_name: Option<String>,
    pub sub_type_factory_file_name: Option<String>,
    pub validators_file_name: Option<String>,

    /// Literal strings or regex patterns; a candidate matching any entry is
    /// skipped entirely. Independent of [`typesToFilter`](Self::types_to_filter),
    /// which is exact-match only.
    #[serde(default)]
    pub exclude: Vec<ExcludePattern>,

    #[serde(rename = "enumI18NHtmlFile")]
    pub enum_i18n_html_file: Option<PathBuf>,
    #[serde(default)]
    pub enum_language_files: Vec<PathBuf>,

    pub model_module_name: Option<String>,
    pub enum_module_name: Option<String>,
    pub enum_ref: Option<String>,
    pub sub_type_property_name: Option<String>,

    #[serde(default)]
    pub namespace_prefixes_to_remove: Vec<String>,
    #[serde(default)]
    pub type_name_suffixes_to_remove: Vec<String>,

    /// Exact-match list of schema type names excluded from generation
    pub types_to_filter: Option<Vec<String>>,

    #[serde(default)]
    pub sort_model_properties: bool,
    #[serde(default)]
    pub sort_enum_types: bool,

    #[serde(default)]
    pub templates: TemplateOverrides,
}

/// Override paths for each named template kind.
///
/// Absent entries fall back to whatever default the driver ships. The
/// original system also allowed a helper map here; helpers are callables
/// and therefore registered programmatically on the template engine, not
/// through the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateOverrides {
    pub validators: Option<PathBuf>,
    pub base_model: Option<PathBuf>,
    pub models: Option<PathBuf>,
    pub sub_type_factory: Option<PathBuf>,
    pub barrel: Option<PathBuf>,
    #[serde(rename = "enum")]
    pub enum_file: Option<PathBuf>,
    pub enum_language: Option<PathBuf>,
}

impl GeneratorOptions {
    /// Parse options from a JSON string with a filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// True iff `typeKey` appears verbatim in `typesToFilter`.
    ///
    /// An absent list filters nothing. Entries are never interpreted as
    /// patterns; pattern matching belongs to [`is_excluded`](Self::is_excluded).
    pub fn is_type_filtered(&self, type_key: &str) -> bool {
        self.types_to_filter
            .as_ref()
            .is_some_and(|types| types.iter().any(|t| t == type_key))
    }

    /// True iff `candidate` matches any entry of the `exclude` option.
    ///
    /// Each entry is tried as a literal first, then as its precompiled
    /// regex; see [`ExcludePattern`] for the unanchored-match caveat.
    pub fn is_excluded(&self, candidate: &str) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches(candidate))
    }
}

impl FromStr for GeneratorOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "swagen.config.json")
    }
}

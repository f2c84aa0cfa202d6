use std::path::{Path, PathBuf};

use crate::{Error, GeneratorOptions, Result};

/// A generator config file loaded from disk.
///
/// Keeps the path alongside the parsed options so that downstream
/// reporting can name the file it is acting on.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    options: GeneratorOptions,
}

impl ConfigFile {
    /// Read and parse the config file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io(path.to_path_buf(), e))?;
        let options =
            GeneratorOptions::from_str_with_filename(&content, &path.display().to_string())?;
        Ok(Self {
            path: path.to_path_buf(),
            options,
        })
    }

    /// The path this config was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed generator options.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }
}

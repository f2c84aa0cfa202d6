//! Rendered artifacts and their idempotent persistence.
//!
//! An [`Artifact`] is a (path, contents) pair computed fresh on every
//! generation pass. Persistence is whole-file and gated: synced artifacts
//! hit disk only when their contents changed, scaffolded artifacts only
//! when the file does not exist yet.

use std::path::{Path, PathBuf};

use eyre::Result;
use swagen_core::{WriteResult, ensure_file, write_if_changed};

/// How an artifact treats an existing file at its target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Regenerate and keep in sync: overwrite only when contents differ.
    SyncIfChanged,
    /// Scaffold once, never clobber user edits.
    ScaffoldOnce,
}

/// A rendered output file waiting to be persisted.
#[derive(Debug, Clone)]
pub struct Artifact {
    path: PathBuf,
    contents: String,
    mode: WriteMode,
}

impl Artifact {
    /// A generated file kept in sync with the schema.
    pub fn generated(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            mode: WriteMode::SyncIfChanged,
        }
    }

    /// A scaffold file written once and left alone afterwards.
    pub fn scaffold(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            mode: WriteMode::ScaffoldOnce,
        }
    }

    /// Target path relative to the output root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Persist this artifact under `base` according to its write mode.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let target = base.join(&self.path);
        match self.mode {
            WriteMode::SyncIfChanged => write_if_changed(&target, &self.contents),
            WriteMode::ScaffoldOnce => ensure_file(&target, &self.contents),
        }
    }
}

/// Statistics for one pass over a registry.
#[derive(Debug, Default, Clone)]
pub struct WriteStats {
    pub written: usize,
    pub skipped: usize,
    pub written_paths: Vec<PathBuf>,
    pub skipped_paths: Vec<PathBuf>,
}

impl WriteStats {
    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}

/// Registry collecting the artifacts of one generation pass.
#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    artifacts: Vec<Artifact>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    pub fn register_all(&mut self, artifacts: impl IntoIterator<Item = Artifact>) {
        self.artifacts.extend(artifacts);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Write all artifacts under `base` in registration order.
    ///
    /// Stops at the first failure; artifacts already written stay on disk.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();
        for artifact in &self.artifacts {
            match artifact.write(base)? {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(artifact.path.clone());
                }
                WriteResult::Skipped => {
                    stats.skipped += 1;
                    stats.skipped_paths.push(artifact.path.clone());
                }
            }
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_all_reports_written_and_skipped() {
        let temp = TempDir::new().unwrap();
        let mut registry = ArtifactRegistry::new();
        registry.register(Artifact::generated("a/one.ts", "one"));
        registry.register(Artifact::generated("two.ts", "two"));

        let first = registry.write_all(temp.path()).unwrap();
        assert_eq!(first.written, 2);
        assert_eq!(first.skipped, 0);
        assert_eq!(first.total(), registry.len());

        let second = registry.write_all(temp.path()).unwrap();
        assert_eq!(second.written, 0);
        assert_eq!(second.skipped, 2);
        assert_eq!(second.total(), registry.len());
        assert_eq!(
            second.skipped_paths,
            vec![PathBuf::from("a/one.ts"), PathBuf::from("two.ts")]
        );
    }

    #[test]
    fn test_scaffold_artifact_survives_regeneration() {
        let temp = TempDir::new().unwrap();
        let scaffold = Artifact::scaffold("base-model.ts", "v1");
        assert_eq!(scaffold.mode(), WriteMode::ScaffoldOnce);
        scaffold.write(temp.path()).unwrap();

        fs::write(temp.path().join("base-model.ts"), "user edits").unwrap();
        let changed = Artifact::scaffold("base-model.ts", "v2");
        let result = changed.write(temp.path()).unwrap();

        assert_eq!(result, swagen_core::WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("base-model.ts")).unwrap(),
            "user edits"
        );
    }

    #[test]
    fn test_generated_artifact_rewrites_on_change() {
        let temp = TempDir::new().unwrap();
        let first = Artifact::generated("m.ts", "v1");
        assert_eq!(first.mode(), WriteMode::SyncIfChanged);
        first.write(temp.path()).unwrap();
        let result = Artifact::generated("m.ts", "v2").write(temp.path()).unwrap();

        assert!(result.is_written());
        assert_eq!(fs::read_to_string(temp.path().join("m.ts")).unwrap(), "v2");
    }
}

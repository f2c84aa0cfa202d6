//! Idempotent file writing and output-tree management.
//!
//! Generated artifacts fall into two write disciplines:
//!
//! - [`write_if_changed`] keeps a generated file in sync, touching disk only
//!   when the rendered contents actually differ from what is already there.
//! - [`ensure_file`] scaffolds a file once and never overwrites it, so user
//!   edits survive regeneration.
//!
//! All reads and writes are UTF-8 text.

use std::fs;
use std::io;
use std::path::Path;

use eyre::{Result, WrapErr};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was left untouched (identical contents or already present)
    Skipped,
}

impl WriteResult {
    /// Whether the operation touched the file on disk.
    pub fn is_written(&self) -> bool {
        matches!(self, WriteResult::Written)
    }
}

/// Write `contents` to `path` only if the file is absent or its current
/// contents differ.
///
/// The comparison is verbatim: no normalization of line endings or
/// whitespace. Parent directories are created as needed before the first
/// write. An unreadable existing file is a hard error, not a rewrite.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteResult> {
    if path.exists() {
        let existing = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read existing file {}", path.display()))?;
        if existing == contents {
            return Ok(WriteResult::Skipped);
        }
    }
    write_file(path, contents)?;
    Ok(WriteResult::Written)
}

/// Create `path` with `contents` unless it already exists.
///
/// Never overwrites: a pre-existing file keeps its contents even when they
/// differ from `contents`. Parent directories are created as needed.
pub fn ensure_file(path: &Path, contents: &str) -> Result<WriteResult> {
    if path.exists() {
        return Ok(WriteResult::Skipped);
    }
    write_file(path, contents)?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Create `path` and any missing ancestors. No-op if it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .wrap_err_with(|| format!("failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Recursively delete the directory tree rooted at `path`.
///
/// Files are removed first, subdirectories after, the root last. Symbolic
/// links are unlinked as leaves and never traversed, so a link pointing
/// outside the tree cannot drag foreign files into the deletion. Calling
/// this on a path that does not exist is a no-op.
pub fn remove_tree(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(e).wrap_err_with(|| format!("failed to stat {}", path.display()));
        }
    }
    for entry in
        fs::read_dir(path).wrap_err_with(|| format!("failed to read {}", path.display()))?
    {
        let entry = entry?;
        let entry_path = entry.path();
        // file_type() does not follow symlinks, so a link to a directory
        // is unlinked here instead of recursed into
        if entry.file_type()?.is_dir() {
            remove_tree(&entry_path)?;
        } else {
            fs::remove_file(&entry_path)
                .wrap_err_with(|| format!("failed to delete {}", entry_path.display()))?;
        }
    }
    fs::remove_dir(path).wrap_err_with(|| format!("failed to remove {}", path.display()))?;
    Ok(())
}

/// List the names of the immediate subdirectories of `path`, sorted.
///
/// Symbolic links are not counted as directories.
pub fn directories(path: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in
        fs::read_dir(path).wrap_err_with(|| format!("failed to read {}", path.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_if_changed_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.ts");

        let result = write_if_changed(&path, "export class Foo {}").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export class Foo {}");
    }

    #[test]
    fn test_write_if_changed_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("out.ts");

        write_if_changed(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_if_changed_skips_identical_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.ts");

        assert_eq!(
            write_if_changed(&path, "same").unwrap(),
            WriteResult::Written
        );
        assert_eq!(
            write_if_changed(&path, "same").unwrap(),
            WriteResult::Skipped
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "same");
    }

    #[test]
    fn test_write_if_changed_rewrites_on_difference() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.ts");

        write_if_changed(&path, "first").unwrap();
        let result = write_if_changed(&path, "second").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_if_changed_compares_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.ts");

        write_if_changed(&path, "line\n").unwrap();
        // CRLF differs from LF, so this is a real write
        let result = write_if_changed(&path, "line\r\n").unwrap();

        assert_eq!(result, WriteResult::Written);
    }

    #[test]
    fn test_ensure_file_creates_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deep").join("scaffold.ts");

        let result = ensure_file(&path, "stub").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "stub");
    }

    #[test]
    fn test_ensure_file_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scaffold.ts");

        fs::write(&path, "user edits").unwrap();
        let result = ensure_file(&path, "different contents").unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "user edits");
    }

    #[test]
    fn test_ensure_dir_creates_ancestry() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c");

        ensure_dir(&path).unwrap();
        assert!(path.is_dir());

        // second call is a no-op
        ensure_dir(&path).unwrap();
    }

    #[test]
    fn test_remove_tree_deletes_nested_tree() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("out");
        fs::create_dir_all(root.join("a").join("b")).unwrap();
        fs::write(root.join("top.ts"), "x").unwrap();
        fs::write(root.join("a").join("mid.ts"), "y").unwrap();
        fs::write(root.join("a").join("b").join("leaf.ts"), "z").unwrap();

        remove_tree(&root).unwrap();

        assert!(!root.exists());
    }

    #[test]
    fn test_remove_tree_missing_path_is_noop() {
        let temp = TempDir::new().unwrap();
        remove_tree(&temp.path().join("never-existed")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_tree_unlinks_symlink_without_following() {
        let temp = TempDir::new().unwrap();
        let outside = temp.path().join("outside");
        fs::create_dir(&outside).unwrap();
        fs::write(outside.join("keep.txt"), "keep").unwrap();

        let root = temp.path().join("out");
        fs::create_dir(&root).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("link")).unwrap();

        remove_tree(&root).unwrap();

        assert!(!root.exists());
        assert_eq!(
            fs::read_to_string(outside.join("keep.txt")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_directories_lists_sorted_subdirs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("zeta")).unwrap();
        fs::create_dir(temp.path().join("alpha")).unwrap();
        fs::write(temp.path().join("file.txt"), "not a dir").unwrap();

        let dirs = directories(temp.path()).unwrap();

        assert_eq!(dirs, vec!["alpha".to_string(), "zeta".to_string()]);
    }
}

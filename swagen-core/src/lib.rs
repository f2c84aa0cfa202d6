//! Core utilities for the swagen model generator.
//!
//! This crate provides the low-level building blocks shared by the
//! generation pipeline: idempotent file writing, output-tree management,
//! and the casing conversions used to derive file and directory names.

mod casing;
mod fs;

// String utilities
pub use casing::{to_camel_case, to_kebab_case, to_pascal_case};
// File and directory operations
pub use fs::{
    WriteResult, directories, ensure_dir, ensure_file, remove_tree, write_if_changed,
};

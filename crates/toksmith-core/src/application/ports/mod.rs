//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `toksmith-adapters` implement
//! these.

use std::path::Path;

use crate::error::TokResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `toksmith_adapters::filesystem::LocalFilesystem` (production)
/// - `toksmith_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The surface is intentionally small: a build run only ever creates
/// directories and overwrites text files. Overwrite-on-rerun is the whole
/// recovery story, so there is no removal or permission handling here.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TokResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> TokResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

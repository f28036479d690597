//! Driven (output) ports - implemented by infrastructure.
//!
//! The `stencil-adapters` crate provides implementations.

use std::io;
use std::path::Path;

use crate::domain::Permissions;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Methods return the raw [`io::Error`]; services attach the section and
/// path context before surfacing it.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, permissions: Permissions) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

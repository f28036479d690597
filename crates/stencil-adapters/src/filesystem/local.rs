//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stencil_core::{application::ports::Filesystem, domain::Permissions};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content)
    }

    fn set_permissions(&self, path: &Path, permissions: Permissions) -> io::Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            trace!(
                path = %path.display(),
                mode = %format!("{:o}", permissions.mode()),
                "set_permissions"
            );
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(permissions.mode()))
        }
        #[cfg(not(unix))]
        {
            // Only the read-only bit exists outside Unix.
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_readonly(!permissions.writable());
            std::fs::set_permissions(path, perms)
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

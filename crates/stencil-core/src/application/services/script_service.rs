//! Dependency script generation.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{ScriptError, ports::Filesystem},
    domain::{INSTALL_SCRIPT_NAME, InstallScript, Permissions},
};

/// Write `install_dependencies.sh` into `project_path` and mark it executable.
///
/// Overwrites any previous script.
#[instrument(skip_all, fields(project = %project_path.display()))]
pub fn write_install_script(
    filesystem: &dyn Filesystem,
    project_path: &Path,
    script: &InstallScript,
) -> Result<PathBuf, ScriptError> {
    let path = project_path.join(INSTALL_SCRIPT_NAME);

    filesystem
        .write_file(&path, &script.render())
        .map_err(|source| ScriptError::Write {
            path: path.clone(),
            source,
        })?;

    filesystem
        .set_permissions(&path, Permissions::executable())
        .map_err(|source| ScriptError::Permissions {
            path: path.clone(),
            source,
        })?;

    info!(
        path = %path.display(),
        backend = script.backend().is_some(),
        frontend = script.frontend().is_some(),
        "Installer script written"
    );
    Ok(path)
}

//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Check the base path and create the project root
//! 2. Plan every section (render templates, resolve schemas)
//! 3. Write each planned file, collecting warnings for skipped sections
//! 4. Write the installer script
//!
//! Steps run in order with no transaction around them: a failure stops the
//! run and leaves whatever was already written.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ScaffoldError, ScriptError, ports::Filesystem, write_install_script},
    domain::{
        ConfigurationWarning, InstallScript, LayoutPlan, LayoutPlanner, ProjectConfig, Section,
        TemplateRegistry,
    },
    error::StencilResult,
};

/// A file generated for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedFile {
    pub section: Section,
    pub path: PathBuf,
}

/// Result of a successful scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    /// `<base>/<project_name>`.
    pub root: PathBuf,
    /// Generated section files, in section order.
    pub created: Vec<CreatedFile>,
    /// One entry per skipped section.
    pub warnings: Vec<ConfigurationWarning>,
    pub install_script: PathBuf,
}

impl ProjectSummary {
    pub fn created_paths(&self) -> impl Iterator<Item = &Path> {
        self.created.iter().map(|f| f.path.as_path())
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stencil_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(Box::new(filesystem));
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Decide what a scaffold run would do, without touching the filesystem.
    pub fn plan(&self, config: &ProjectConfig, registry: &TemplateRegistry) -> LayoutPlan {
        LayoutPlanner::plan(config, registry)
    }

    /// Scaffold a project under `base_path`.
    ///
    /// `base_path` must already exist; only the project subtree is created.
    /// A missing base fails with [`ScaffoldError::CreateRoot`] and a
    /// `NotFound` source. Existing generated files are overwritten.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name,
            base_path = %base_path.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        base_path: impl AsRef<Path>,
        config: &ProjectConfig,
        registry: &TemplateRegistry,
    ) -> StencilResult<ProjectSummary> {
        let base = base_path.as_ref();
        let root = base.join(config.project_name.as_str());

        // 1. Project root, under a base owned by the caller
        if !self.filesystem.exists(base) {
            return Err(ScaffoldError::CreateRoot {
                path: root,
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("base directory does not exist: {}", base.display()),
                ),
            }
            .into());
        }
        if self.filesystem.exists(&root) {
            debug!(root = %root.display(), "Project root exists, generated files will be replaced");
        }
        self.filesystem
            .create_dir_all(&root)
            .map_err(|source| ScaffoldError::CreateRoot {
                path: root.clone(),
                source,
            })?;

        // 2. Plan
        let plan = self.plan(config, registry);

        // 3. Sections
        let mut created = Vec::new();
        let mut warnings = Vec::new();
        for (section, relative, content) in plan.creates() {
            let path = self.write_section(&root, section, relative, content)?;
            created.push(CreatedFile { section, path });
        }
        for warning in plan.warnings() {
            warn!(section = %warning.section, "{warning}");
            warnings.push(warning);
        }

        // 4. Installer script
        let install_script = self.generate_install_script(&root, config, &plan)?;

        info!(
            files = created.len(),
            warnings = warnings.len(),
            "Scaffold completed"
        );

        Ok(ProjectSummary {
            root,
            created,
            warnings,
            install_script,
        })
    }

    /// Write the installer script for an already planned project.
    pub fn generate_install_script(
        &self,
        project_path: &Path,
        config: &ProjectConfig,
        plan: &LayoutPlan,
    ) -> Result<PathBuf, ScriptError> {
        let script = InstallScript::from_plan(config, plan);
        write_install_script(self.filesystem.as_ref(), project_path, &script)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_section(
        &self,
        root: &Path,
        section: Section,
        relative: &Path,
        content: &str,
    ) -> Result<PathBuf, ScaffoldError> {
        let path = root.join(relative);

        if let Some(parent) = path.parent() {
            debug!(%section, dir = %parent.display(), "Creating directory");
            self.filesystem
                .create_dir_all(parent)
                .map_err(|source| ScaffoldError::CreateDirectory {
                    section,
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        self.filesystem
            .write_file(&path, content)
            .map_err(|source| ScaffoldError::WriteFile {
                section,
                path: path.clone(),
                source,
            })?;

        info!(%section, path = %path.display(), "File written");
        Ok(path)
    }
}

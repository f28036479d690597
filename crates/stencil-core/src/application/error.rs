//! Application layer errors.
//!
//! These are I/O failures while materializing a project. Skipped sections
//! are not errors; see `ConfigurationWarning`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::Section;

/// Failure writing the project tree. Aborts the run; earlier output stays.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("failed to create project root {path}")]
    CreateRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create {section} directory {path}")]
    CreateDirectory {
        section: Section,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {section} file {path}")]
    WriteFile {
        section: Section,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Section being written, `None` for the project root.
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::CreateRoot { .. } => None,
            Self::CreateDirectory { section, .. } | Self::WriteFile { section, .. } => {
                Some(*section)
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::CreateRoot { path, .. }
            | Self::CreateDirectory { path, .. }
            | Self::WriteFile { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::CreateRoot { source, .. }
            | Self::CreateDirectory { source, .. }
            | Self::WriteFile { source, .. } => source,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        let mut out = vec![format!("Failed to access: {}", self.path().display())];
        out.extend(io_suggestions(self.io_error()));
        if self.section().is_some() {
            out.push("Files written before the failure were left in place".into());
        }
        out
    }
}

/// Failure writing the installer script. Project files are already written.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to write installer script {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to make installer script {path} executable")]
    Permissions {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScriptError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Write { path, .. } | Self::Permissions { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Write { source, .. } | Self::Permissions { source, .. } => source,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        let mut out = vec!["The project files were generated".into()];
        out.extend(io_suggestions(self.io_error()));
        if matches!(self, Self::Permissions { .. }) {
            out.push(format!("Run: chmod +x {}", self.path().display()));
        }
        out
    }
}

fn io_suggestions(err: &io::Error) -> Vec<String> {
    match err.kind() {
        io::ErrorKind::PermissionDenied => vec!["Check that you have write permissions".into()],
        io::ErrorKind::NotFound => vec!["Ensure the output directory exists".into()],
        _ => vec!["Check available disk space and the path".into()],
    }
}

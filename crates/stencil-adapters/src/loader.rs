//! JSON loading for the project configuration and the template registry.
//!
//! # Configuration file
//!
//! ```json
//! {
//!   "project_name": "MyCoolApp",
//!   "backend":  { "framework": "flask", "dependencies": ["flask"] },
//!   "frontend": { "framework": "react", "dependencies": ["react", "react-dom"] },
//!   "database": { "type": "sqlite", "schema": null }
//! }
//! ```
//!
//! # Template registry file
//!
//! ```json
//! {
//!   "backend":  { "flask":  "from flask import Flask\n..." },
//!   "frontend": { "react":  "..." },
//!   "database": { "sqlite": "CREATE TABLE ..." }
//! }
//! ```
//!
//! Failures are returned as [`LoadError`]; nothing here exits the process.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use stencil_core::domain::{ProjectConfig, Section, TemplateRegistry};

/// Which input file failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Config,
    Registry,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => write!(f, "configuration"),
            Self::Registry => write!(f, "template registry"),
        }
    }
}

/// Failure reading or parsing an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {kind} file {path}")]
    Io {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid {kind} file {path}")]
    Parse {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    /// `true` when the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { kind, path, .. } if self.is_not_found() => vec![
                format!("The {} file '{}' does not exist", kind, path.display()),
                "Check the path and try again".into(),
            ],
            Self::Io { .. } => vec!["Check that the file is readable".into()],
            Self::Parse { source, .. } => vec![
                format!(
                    "Fix the JSON at line {}, column {}",
                    source.line(),
                    source.column()
                ),
                "project_name must be a single directory name".into(),
            ],
        }
    }
}

/// Load a project configuration from a JSON file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_config(path: impl AsRef<Path>) -> Result<ProjectConfig, LoadError> {
    let config: ProjectConfig = load_json(path.as_ref(), InputKind::Config)?;
    debug!(project = %config.project_name, "Configuration loaded");
    Ok(config)
}

/// Load a template registry from a JSON file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_registry(path: impl AsRef<Path>) -> Result<TemplateRegistry, LoadError> {
    let registry: TemplateRegistry = load_json(path.as_ref(), InputKind::Registry)?;
    debug!(
        backend = registry.names(Section::Backend).count(),
        frontend = registry.names(Section::Frontend).count(),
        database = registry.names(Section::Database).count(),
        "Template registry loaded"
    );
    Ok(registry)
}

fn load_json<T: DeserializeOwned>(path: &Path, kind: InputKind) -> Result<T, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        kind,
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "config.json",
            r#"{"project_name": "demo", "backend": {"framework": "flask", "dependencies": ["flask"]}}"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.project_name.as_str(), "demo");
        assert_eq!(config.framework(Section::Backend), Some("flask"));
    }

    #[test]
    fn loads_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "templates.json",
            r#"{"backend": {"flask": "x"}, "database": {"sqlite": "CREATE TABLE t (x);"}}"#,
        );

        let registry = load_registry(&path).unwrap();
        assert_eq!(registry.get(Section::Database, "sqlite"), Some("CREATE TABLE t (x);"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("nope.json")).unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("failed to read configuration file"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "templates.json", "{ not json");

        let err = load_registry(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                kind: InputKind::Registry,
                ..
            }
        ));
        assert!(!err.is_not_found());
    }

    #[test]
    fn unsafe_project_name_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "config.json", r#"{"project_name": "a/b"}"#);

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}

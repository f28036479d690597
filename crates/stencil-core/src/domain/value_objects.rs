//! Value objects: project name, sections, ecosystems, permissions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

// ============================================================================
// ProjectName
// ============================================================================

/// A project name that is safe to use as a single path segment.
///
/// Invariant: non-blank, not `.`/`..`, no path separators, no NUL.
/// Enforced at construction, including during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reason = if name.trim().is_empty() {
            Some("name cannot be empty")
        } else if name == "." || name == ".." {
            Some("name cannot be a relative directory reference")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else if name.contains('\0') {
            Some("name cannot contain NUL bytes")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidProjectName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Section
// ============================================================================

/// One independently planned part of a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Backend,
    Frontend,
    Database,
}

impl Section {
    /// Planning order.
    pub const ALL: [Section; 3] = [Section::Backend, Section::Frontend, Section::Database];

    /// Position in [`Section::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Subdirectory under the project root; also the registry category key.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Database => "database",
        }
    }

    /// Name of the single file generated for this section.
    pub fn file_name(self, framework: Option<&str>) -> String {
        let ext = Ecosystem::infer(self, framework).map_or("sql", Ecosystem::extension);
        match self {
            Self::Backend => format!("app.{ext}"),
            Self::Frontend => format!("index.{ext}"),
            Self::Database => format!("schema.{ext}"),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

// ============================================================================
// Ecosystem
// ============================================================================

/// Backend frameworks that run on Node rather than Python.
const NODE_BACKENDS: &[&str] = &["express", "koa", "fastify", "nestjs", "hapi"];

/// Language/package-manager family a generated source file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Python,
    Node,
}

impl Ecosystem {
    /// Infer the ecosystem from a section and its (optional) framework name.
    ///
    /// Frontends are always Node. Backends are Python unless the framework is
    /// a known Node server framework. Databases have no ecosystem.
    pub fn infer(section: Section, framework: Option<&str>) -> Option<Self> {
        match section {
            Section::Frontend => Some(Self::Node),
            Section::Backend => match framework {
                Some(name)
                    if NODE_BACKENDS
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(name.trim())) =>
                {
                    Some(Self::Node)
                }
                _ => Some(Self::Python),
            },
            Section::Database => None,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Node => "js",
        }
    }

    pub const fn package_manager(self) -> &'static str {
        match self {
            Self::Python => "pip",
            Self::Node => "npm",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Node => write!(f, "node"),
        }
    }
}

// ============================================================================
// Permissions
// ============================================================================

/// Capability-based permissions model.
///
/// The owner gets every enabled capability; group and other get read, plus
/// execute when the file is executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    readable: bool,
    writable: bool,
    executable: bool,
}

impl Permissions {
    pub const fn read_write() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: false,
        }
    }

    pub const fn executable() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: true,
        }
    }

    pub const fn writable(&self) -> bool {
        self.writable
    }

    /// Unix mode bits, e.g. `0o755` for [`Permissions::executable`].
    pub const fn mode(&self) -> u32 {
        let mut owner = 0;
        let mut shared = 0;
        if self.readable {
            owner |= 0o4;
            shared |= 0o4;
        }
        if self.writable {
            owner |= 0o2;
        }
        if self.executable {
            owner |= 0o1;
            shared |= 0o1;
        }
        (owner << 6) | (shared << 3) | shared
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}

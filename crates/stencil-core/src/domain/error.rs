// ============================================================================
// domain/error.rs
// ============================================================================

use serde::Serialize;
use thiserror::Error;

/// Root domain error type.
///
/// Domain errors never carry I/O causes, so they stay `Clone + PartialEq`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    #[error("invalid template: {0}")]
    Template(#[from] TemplateError),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("'{}' cannot be used as a directory name: {}", name, reason),
                "Use a single path segment, e.g. \"my-app\" or \"my_app\"".into(),
            ],
            Self::Template(TemplateError::UnknownPlaceholder { name, .. }) => vec![
                format!("'{{{}}}' is not a known placeholder", name),
                "The only placeholder is {project_name}".into(),
                "Write literal braces as '{{' and '}}'".into(),
            ],
            Self::Template(_) => vec!["Write literal braces as '{{' and '}}'".into()],
        }
    }
}

/// Why a template body could not be rendered.
///
/// Offsets are byte positions into the template body.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateError {
    #[error("unknown placeholder '{{{name}}}' at byte {offset}")]
    UnknownPlaceholder { name: String, offset: usize },

    #[error("unclosed '{{' at byte {offset}")]
    Unclosed { offset: usize },

    #[error("unmatched '}}' at byte {offset}")]
    UnmatchedClose { offset: usize },
}

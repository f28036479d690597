//! Unified error handling for Stencil Core.
//!
//! Wraps domain and application errors so callers can match on one type
//! while still telling "nothing written" (`Scaffold`) apart from "project
//! written, script failed" (`Script`).

use thiserror::Error;

use crate::application::{ScaffoldError, ScriptError};
use crate::domain::DomainError;

/// Root error type for Stencil Core operations.
#[derive(Debug, Error)]
pub enum StencilError {
    /// Invalid input values (project name, template syntax).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Writing the project tree failed.
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    /// Writing the installer script failed.
    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl StencilError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Scaffold(e) => e.suggestions(),
            Self::Script(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Scaffold(_) | Self::Script(_) => ErrorCategory::Io,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Io,
}

/// Convenient result type alias.
pub type StencilResult<T> = Result<T, StencilError>;

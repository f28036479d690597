//! Core domain layer for Stencil.
//!
//! Pure logic only: no filesystem, no process, no terminal. Everything that
//! touches the outside world goes through the ports in `crate::application`.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: planning, rendering and script generation return values
//! - **Warnings are data**: skipped sections are [`LayoutDecision::Skip`]
//!   values, not log lines
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod planner;
pub mod render;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    ComponentConfig, ConfigurationWarning, DatabaseConfig, INSTALL_SCRIPT_NAME, InstallScript,
    InstallStep, LayoutDecision, LayoutPlan, PlannedSection, ProjectConfig, SkipReason,
    TemplateRegistry,
};

pub use error::{DomainError, TemplateError};

pub use planner::LayoutPlanner;
pub use render::{PROJECT_NAME_VAR, RenderContext};

pub use value_objects::{Ecosystem, Permissions, ProjectName, Section};

//! Application layer for Stencil.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`ScaffoldService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: I/O failures while materializing a project
//!
//! The application layer sequences side effects but makes no layout
//! decisions itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CreatedFile, ProjectSummary, ScaffoldService, write_install_script};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::{ScaffoldError, ScriptError};

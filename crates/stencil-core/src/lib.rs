//! Stencil Core - scaffolding engine.
//!
//! This crate turns a project description ([`ProjectConfig`]) and a table of
//! raw templates ([`TemplateRegistry`]) into a generated project skeleton,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, install script I/O)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! │ (LocalFilesystem, MemoryFilesystem, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (LayoutPlanner, RenderContext, Script)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stencil_core::prelude::*;
//!
//! let config: ProjectConfig = load_config()?;
//! let registry: TemplateRegistry = load_registry()?;
//!
//! let service = ScaffoldService::new(Box::new(filesystem));
//! let summary = service.scaffold("./output", &config, &registry)?;
//! for warning in &summary.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreatedFile, ProjectSummary, ScaffoldError, ScaffoldService, ScriptError,
        ports::Filesystem,
    };
    pub use crate::domain::{
        ComponentConfig, ConfigurationWarning, DatabaseConfig, LayoutDecision, LayoutPlan,
        LayoutPlanner, Permissions, ProjectConfig, ProjectName, RenderContext, Section,
        SkipReason, TemplateError, TemplateRegistry,
    };
    pub use crate::error::{StencilError, StencilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

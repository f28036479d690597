//! Application services - orchestrate use cases.

pub mod scaffold_service;
pub mod script_service;

pub use scaffold_service::{CreatedFile, ProjectSummary, ScaffoldService};
pub use script_service::write_install_script;

pub mod config;
pub mod install_script;
pub mod layout;
pub mod registry;

pub use config::{ComponentConfig, DatabaseConfig, ProjectConfig};
pub use install_script::{INSTALL_SCRIPT_NAME, InstallScript, InstallStep};
pub use layout::{ConfigurationWarning, LayoutDecision, LayoutPlan, PlannedSection, SkipReason};
pub use registry::TemplateRegistry;

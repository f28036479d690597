use std::fmt::Write as _;

use crate::domain::{
    entities::{config::ProjectConfig, layout::LayoutPlan},
    value_objects::{Ecosystem, Section},
};

/// File name of the generated installer, relative to the project root.
pub const INSTALL_SCRIPT_NAME: &str = "install_dependencies.sh";

/// One package-manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    pub package_manager: &'static str,
    pub dependencies: Vec<String>,
}

impl InstallStep {
    fn command(&self) -> String {
        format!(
            "{} install {}",
            self.package_manager,
            self.dependencies.join(" ")
        )
    }
}

/// Content model of `install_dependencies.sh`.
///
/// Rendering is pure and deterministic: identical inputs produce identical
/// bytes, so re-running a scaffold rewrites the same script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallScript {
    backend: Option<InstallStep>,
    frontend: Option<InstallStep>,
}

impl InstallScript {
    /// Derive the script from the configuration and the layout decisions.
    ///
    /// Backend dependencies are installed whether or not the backend template
    /// was recognized. Frontend dependencies need the `frontend/` directory,
    /// so they are only installed when that section was created.
    pub fn from_plan(config: &ProjectConfig, plan: &LayoutPlan) -> Self {
        let backend = step(config, Section::Backend);
        let frontend =
            step(config, Section::Frontend).filter(|_| plan.is_created(Section::Frontend));
        Self { backend, frontend }
    }

    pub fn backend(&self) -> Option<&InstallStep> {
        self.backend.as_ref()
    }

    pub fn frontend(&self) -> Option<&InstallStep> {
        self.frontend.as_ref()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("#!/bin/bash\n\n");
        out.push_str("echo 'Installing dependencies...'\n\n");

        if let Some(backend) = &self.backend {
            out.push_str("# Install backend dependencies\n");
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{}\n", backend.command());
        }

        if let Some(frontend) = &self.frontend {
            out.push_str("# Install frontend dependencies\n");
            let _ = writeln!(
                out,
                "cd {} && {} && cd ..\n",
                Section::Frontend.dir_name(),
                frontend.command()
            );
        }

        out
    }
}

fn step(config: &ProjectConfig, section: Section) -> Option<InstallStep> {
    let dependencies = config.dependencies(section);
    if dependencies.is_empty() {
        return None;
    }

    let ecosystem = Ecosystem::infer(section, config.framework(section))?;
    Some(InstallStep {
        package_manager: ecosystem.package_manager(),
        dependencies: dependencies.to_vec(),
    })
}

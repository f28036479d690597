//! Implementation of the `stencil new` command.
//!
//! Responsibility: load the two input files, call the core scaffold
//! service, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use stencil_adapters::{LocalFilesystem, load_config, load_registry};
use stencil_core::{
    application::{ProjectSummary, ScaffoldService},
    domain::{
        INSTALL_SCRIPT_NAME, InstallScript, LayoutDecision, LayoutPlan, ProjectConfig, Section,
        SkipReason,
    },
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stencil new` command.
///
/// Dispatch sequence:
/// 1. Resolve the registry path and output directory (flag, then config)
/// 2. Load configuration and registry
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Create the output directory, then scaffold via `ScaffoldService`
/// 5. Print the summary and next steps
#[instrument(skip_all, fields(config = %args.config.display()))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resolve paths
    let templates = resolve_templates(args.templates, &config)?;
    let output_dir = args
        .output
        .or(config.defaults.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    // 2. Load inputs
    let project = load_config(&args.config)?;
    let registry = load_registry(&templates)?;
    debug!(
        project = %project.project_name,
        templates = %templates.display(),
        output_dir = %output_dir.display(),
        "Inputs loaded"
    );

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&project, &registry);
        let preview = PlanPreview::new(&output_dir, &project, &plan);
        return show_plan(&preview, &output).map_err(CliError::from);
    }

    // 4. Scaffold
    info!(
        project = %project.project_name,
        path = %output_dir.display(),
        "Scaffold started"
    );
    // The scaffolder never creates its base; the output directory is ours.
    std::fs::create_dir_all(&output_dir).map_err(|e| CliError::Io {
        message: format!("Failed to create output directory '{}'", output_dir.display()),
        source: e,
    })?;
    let summary = service.scaffold(&output_dir, &project, &registry)?;

    // 5. Summary
    show_summary(&summary, &project, &output)?;
    Ok(())
}

pub(crate) fn resolve_templates(arg: Option<PathBuf>, config: &AppConfig) -> CliResult<PathBuf> {
    arg.or_else(|| config.defaults.templates.clone())
        .ok_or_else(|| CliError::InvalidInput {
            message: "no template registry given".into(),
            hint: "Pass TEMPLATES or set defaults.templates in the config file".into(),
        })
}

// ── Dry run ───────────────────────────────────────────────────────────────────

/// What a scaffold run would do, without the rendered file bodies.
#[derive(Debug, Serialize)]
struct PlanPreview<'a> {
    root: PathBuf,
    sections: Vec<SectionPreview<'a>>,
    install_script: String,
}

#[derive(Debug, Serialize)]
struct SectionPreview<'a> {
    section: Section,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<&'a SkipReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

impl<'a> PlanPreview<'a> {
    fn new(output_dir: &Path, project: &ProjectConfig, plan: &'a LayoutPlan) -> Self {
        let root = output_dir.join(project.project_name.as_str());
        let warnings: Vec<_> = plan.warnings().collect();

        let sections = plan
            .sections()
            .map(|planned| match &planned.decision {
                LayoutDecision::Create { path, .. } => SectionPreview {
                    section: planned.section,
                    path: Some(root.join(path)),
                    skipped: None,
                    warning: None,
                },
                LayoutDecision::Skip(reason) => SectionPreview {
                    section: planned.section,
                    path: None,
                    skipped: Some(reason),
                    warning: warnings
                        .iter()
                        .find(|w| w.section == planned.section)
                        .map(ToString::to_string),
                },
            })
            .collect();

        Self {
            install_script: InstallScript::from_plan(project, plan).render(),
            root,
            sections,
        }
    }
}

fn show_plan(preview: &PlanPreview<'_>, output: &OutputManager) -> std::io::Result<()> {
    if output.is_json() {
        return output.json(preview);
    }

    output.header(&format!("Dry run: would create {}", preview.root.display()))?;
    for section in &preview.sections {
        // Section's Display ignores width, so pad the string.
        let label = section.section.to_string();
        match (&section.path, &section.warning) {
            (Some(path), _) => output.info(&format!("{label:<9} {}", path.display()))?,
            (None, Some(warning)) => output.warning(&format!("{label:<9} skipped: {warning}"))?,
            (None, None) => output.warning(&format!("{label:<9} skipped"))?,
        }
    }
    output.info(&format!(
        "{}:",
        preview.root.join(INSTALL_SCRIPT_NAME).display()
    ))?;
    for line in preview.install_script.lines() {
        output.print(&format!("    {line}"))?;
    }
    Ok(())
}

// ── Summary ───────────────────────────────────────────────────────────────────

fn show_summary(
    summary: &ProjectSummary,
    project: &ProjectConfig,
    output: &OutputManager,
) -> std::io::Result<()> {
    if output.is_json() {
        return output.json(summary);
    }

    output.header(&format!(
        "Creating '{}' in {}",
        project.project_name,
        summary.root.display()
    ))?;
    for path in summary.created_paths() {
        let shown = path.strip_prefix(&summary.root).unwrap_or(path);
        output.success(&shown.display().to_string())?;
    }
    for warning in &summary.warnings {
        output.warning(&warning.to_string())?;
    }
    output.success(&format!(
        "Dependency installer written to {}",
        summary.install_script.display()
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", summary.root.display()))?;
        output.print(&format!("  ./{INSTALL_SCRIPT_NAME}"))?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

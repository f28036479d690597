//! Implementation of the `stencil list` command.

use std::collections::BTreeMap;

use stencil_adapters::load_registry;
use stencil_core::domain::{Section, TemplateRegistry};

use crate::{
    cli::ListArgs, commands::new::resolve_templates, config::AppConfig, error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let path = resolve_templates(args.templates, &config)?;
    let registry = load_registry(&path)?;
    let listing = listing(&registry, args.category.map(Section::from));

    if output.is_json() {
        output.json(&listing)?;
        return Ok(());
    }

    for (section, names) in &listing {
        output.header(&format!("{section}:"))?;
        if names.is_empty() {
            output.print("  (none)")?;
        }
        for name in names {
            output.print(&format!("  {name}"))?;
        }
    }

    Ok(())
}

/// Template names per section, in section order and sorted by name.
fn listing(registry: &TemplateRegistry, only: Option<Section>) -> BTreeMap<Section, Vec<&str>> {
    Section::ALL
        .into_iter()
        .filter(|section| only.is_none_or(|o| o == *section))
        .map(|section| (section, registry.names(section).collect()))
        .collect()
}

use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::domain::{
    entities::{
        config::{ComponentConfig, DatabaseConfig, ProjectConfig},
        layout::{LayoutDecision, LayoutPlan, SkipReason},
        registry::TemplateRegistry,
    },
    render::RenderContext,
    value_objects::Section,
};

/// Decides what each section of a project turns into.
///
/// Pure: no I/O, and every section is decided on its own so a skip or a
/// broken template in one section never affects another.
pub struct LayoutPlanner;

impl LayoutPlanner {
    #[instrument(skip_all, fields(project = %config.project_name))]
    pub fn plan(config: &ProjectConfig, registry: &TemplateRegistry) -> LayoutPlan {
        let context = RenderContext::new(&config.project_name);

        LayoutPlan::from_fn(|section| {
            let decision = match section {
                Section::Backend | Section::Frontend => {
                    plan_component(section, config.component(section), registry, &context)
                }
                Section::Database => plan_database(config.database.as_ref(), registry),
            };
            debug!(%section, create = decision.is_create(), "Section planned");
            decision
        })
    }
}

fn plan_component(
    section: Section,
    component: Option<&ComponentConfig>,
    registry: &TemplateRegistry,
    context: &RenderContext,
) -> LayoutDecision {
    let Some(framework) = component.and_then(|c| c.framework.as_deref()) else {
        return LayoutDecision::Skip(SkipReason::Missing);
    };

    let Some(template) = registry.get(section, framework) else {
        return LayoutDecision::Skip(SkipReason::Unsupported {
            name: framework.to_string(),
        });
    };

    match context.render(template) {
        Ok(content) => LayoutDecision::Create {
            path: PathBuf::from(section.dir_name()).join(section.file_name(Some(framework))),
            content,
        },
        Err(error) => LayoutDecision::Skip(SkipReason::InvalidTemplate {
            name: framework.to_string(),
            error,
        }),
    }
}

/// Inline schema wins over the registry; schemas are copied verbatim.
fn plan_database(database: Option<&DatabaseConfig>, registry: &TemplateRegistry) -> LayoutDecision {
    let engine = database.and_then(|d| d.engine.as_deref());
    let inline = database
        .and_then(|d| d.schema.as_deref())
        .filter(|s| !s.is_empty());

    let schema = inline.or_else(|| engine.and_then(|e| registry.get(Section::Database, e)));

    match (schema, engine) {
        (Some(schema), _) => LayoutDecision::Create {
            path: PathBuf::from(Section::Database.dir_name())
                .join(Section::Database.file_name(None)),
            content: schema.to_string(),
        },
        (None, Some(engine)) => LayoutDecision::Skip(SkipReason::Unsupported {
            name: engine.to_string(),
        }),
        (None, None) => LayoutDecision::Skip(SkipReason::Missing),
    }
}

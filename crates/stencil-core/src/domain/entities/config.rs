use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::{ProjectName, Section};

/// Description of the project to generate.
///
/// Constructed once per run (usually deserialized from JSON) and never
/// mutated while scaffolding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_name: ProjectName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<ComponentConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend: Option<ComponentConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl ProjectConfig {
    pub fn new(project_name: ProjectName) -> Self {
        Self {
            project_name,
            backend: None,
            frontend: None,
            database: None,
        }
    }

    pub fn with_backend(mut self, backend: ComponentConfig) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_frontend(mut self, frontend: ComponentConfig) -> Self {
        self.frontend = Some(frontend);
        self
    }

    pub fn with_database(mut self, database: DatabaseConfig) -> Self {
        self.database = Some(database);
        self
    }

    /// The backend or frontend component; `None` for the database section.
    pub fn component(&self, section: Section) -> Option<&ComponentConfig> {
        match section {
            Section::Backend => self.backend.as_ref(),
            Section::Frontend => self.frontend.as_ref(),
            Section::Database => None,
        }
    }

    /// Framework configured for a section, if any.
    pub fn framework(&self, section: Section) -> Option<&str> {
        self.component(section)
            .and_then(|c| c.framework.as_deref())
    }

    /// Dependencies configured for a section, in configuration order.
    pub fn dependencies(&self, section: Section) -> &[String] {
        self.component(section)
            .map(|c| c.dependencies.as_slice())
            .unwrap_or_default()
    }
}

/// A backend or frontend component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConfig {
    #[serde(default)]
    pub framework: Option<String>,
    /// `null` and an absent key both mean no dependencies.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ComponentConfig {
    pub fn new(framework: impl Into<String>) -> Self {
        Self {
            framework: Some(framework.into()),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }
}

/// Database section: an engine name and/or an inline schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(rename = "type", default)]
    pub engine: Option<String>,
    /// Inline schema; takes precedence over the registry entry for `engine`.
    #[serde(default)]
    pub schema: Option<String>,
}

impl DatabaseConfig {
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: Some(engine.into()),
            schema: None,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

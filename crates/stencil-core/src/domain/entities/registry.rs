use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Section;

/// Raw templates keyed by category and framework/engine name.
///
/// Lookups are exact-string keyed. A missing key is a signal to skip the
/// section, never an error. Database entries are schema strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRegistry {
    #[serde(default)]
    backend: BTreeMap<String, String>,
    #[serde(default)]
    frontend: BTreeMap<String, String>,
    #[serde(default)]
    database: BTreeMap<String, String>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(
        mut self,
        section: Section,
        name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        self.insert(section, name, body);
        self
    }

    pub fn insert(&mut self, section: Section, name: impl Into<String>, body: impl Into<String>) {
        self.category_mut(section).insert(name.into(), body.into());
    }

    pub fn get(&self, section: Section, name: &str) -> Option<&str> {
        self.category(section).get(name).map(String::as_str)
    }

    /// Template names registered for a section, sorted.
    pub fn names(&self, section: Section) -> impl Iterator<Item = &str> {
        self.category(section).keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        Section::ALL.iter().map(|s| self.category(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn category(&self, section: Section) -> &BTreeMap<String, String> {
        match section {
            Section::Backend => &self.backend,
            Section::Frontend => &self.frontend,
            Section::Database => &self.database,
        }
    }

    fn category_mut(&mut self, section: Section) -> &mut BTreeMap<String, String> {
        match section {
            Section::Backend => &mut self.backend,
            Section::Frontend => &mut self.frontend,
            Section::Database => &mut self.database,
        }
    }
}

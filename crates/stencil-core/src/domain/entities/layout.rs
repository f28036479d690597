use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::TemplateError, value_objects::Section};

/// What the planner decided for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutDecision {
    /// Write `content` to `path`, relative to the project root.
    Create { path: PathBuf, content: String },
    Skip(SkipReason),
}

impl LayoutDecision {
    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create { .. })
    }
}

/// Why a section produced no file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Neither the section nor its framework/engine was configured.
    Missing,
    /// The configured name has no registry entry.
    Unsupported { name: String },
    /// The registry entry exists but does not render.
    InvalidTemplate { name: String, error: TemplateError },
}

/// A skipped section, surfaced to the caller as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationWarning {
    pub section: Section,
    pub reason: SkipReason,
}

impl ConfigurationWarning {
    pub fn new(section: Section, reason: SkipReason) -> Self {
        Self { section, reason }
    }

    /// The framework or engine name the warning refers to, if one was given.
    pub fn name(&self) -> Option<&str> {
        match &self.reason {
            SkipReason::Missing => None,
            SkipReason::Unsupported { name } | SkipReason::InvalidTemplate { name, .. } => {
                Some(name)
            }
        }
    }
}

impl fmt::Display for ConfigurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = self.section;
        match (&self.reason, section) {
            (SkipReason::Missing, Section::Database) => {
                write!(f, "no database type or schema provided")
            }
            (SkipReason::Missing, _) => write!(f, "no {section} framework configured"),
            (SkipReason::Unsupported { name }, Section::Database) => {
                write!(f, "unsupported database type '{name}' and no schema provided")
            }
            (SkipReason::Unsupported { name }, _) => {
                write!(f, "unsupported {section} framework '{name}'")
            }
            (SkipReason::InvalidTemplate { name, error }, _) => {
                write!(f, "{section} template '{name}' is invalid: {error}")
            }
        }
    }
}

/// One section together with its decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSection {
    pub section: Section,
    pub decision: LayoutDecision,
}

/// Exactly one decision per section, in [`Section::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    sections: [PlannedSection; 3],
}

impl LayoutPlan {
    /// Build a plan by deciding every section in order.
    pub(crate) fn from_fn(mut decide: impl FnMut(Section) -> LayoutDecision) -> Self {
        Self {
            sections: Section::ALL.map(|section| PlannedSection {
                section,
                decision: decide(section),
            }),
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &PlannedSection> {
        self.sections.iter()
    }

    pub fn decision(&self, section: Section) -> &LayoutDecision {
        &self.sections[section.index()].decision
    }

    pub fn is_created(&self, section: Section) -> bool {
        self.decision(section).is_create()
    }

    /// Files to write: `(section, relative path, content)`.
    pub fn creates(&self) -> impl Iterator<Item = (Section, &Path, &str)> {
        self.sections.iter().filter_map(|p| match &p.decision {
            LayoutDecision::Create { path, content } => {
                Some((p.section, path.as_path(), content.as_str()))
            }
            LayoutDecision::Skip(_) => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = ConfigurationWarning> + '_ {
        self.sections.iter().filter_map(|p| match &p.decision {
            LayoutDecision::Skip(reason) => {
                Some(ConfigurationWarning::new(p.section, reason.clone()))
            }
            LayoutDecision::Create { .. } => None,
        })
    }
}

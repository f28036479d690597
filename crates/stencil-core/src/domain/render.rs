//! Placeholder substitution for template bodies.
//!
//! ## Syntax
//!
//! | Template text      | Output                 |
//! |--------------------|------------------------|
//! | `{project_name}`   | the configured name    |
//! | `{{`               | literal `{`            |
//! | `}}`               | literal `}`            |
//!
//! Any other `{name}` is a [`TemplateError::UnknownPlaceholder`]; a `{` with
//! no closing brace or a lone `}` is malformed. Source files with literal
//! braces (JavaScript, CSS) must escape them in the registry.

use crate::domain::{error::TemplateError, value_objects::ProjectName};

/// Name of the only substitution variable.
pub const PROJECT_NAME_VAR: &str = "project_name";

/// Variables available to a template. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project_name: String,
}

impl RenderContext {
    pub fn new(project_name: &ProjectName) -> Self {
        Self {
            project_name: project_name.as_str().to_string(),
        }
    }

    /// Known variable names.
    pub fn variables(&self) -> &'static [&'static str] {
        &[PROJECT_NAME_VAR]
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        (key == PROJECT_NAME_VAR).then_some(self.project_name.as_str())
    }

    /// Render a template body.
    ///
    /// Single left-to-right scan; substituted values are never re-scanned, so
    /// a project name containing braces is emitted verbatim.
    pub fn render(&self, template: &str) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(template.len() + self.project_name.len());
        let mut chars = template.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '{' => {
                    if chars.next_if(|&(_, c)| c == '{').is_some() {
                        out.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed { offset });
                    }

                    match self.get(&name) {
                        Some(value) => out.push_str(value),
                        None => return Err(TemplateError::UnknownPlaceholder { name, offset }),
                    }
                }
                '}' => {
                    if chars.next_if(|&(_, c)| c == '}').is_none() {
                        return Err(TemplateError::UnmatchedClose { offset });
                    }
                    out.push('}');
                }
                c => out.push(c),
            }
        }

        Ok(out)
    }
}

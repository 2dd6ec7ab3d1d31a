//! Template loading and placeholder substitution.
//!
//! Templates are plain text with `{{key}}` placeholders. The generator only
//! needs two things from this module: a [`TemplateSource`] that resolves a
//! template identifier to text, and [`substitute`] to fill it in.

use crate::error::{ClassGenError, ClassGenResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Identifier of the class declaration template.
pub const CLASS_TEMPLATE: &str = "ClassTemplate";

/// File extension of on-disk templates.
pub const TEMPLATE_EXTENSION: &str = "java.tmpl";

mod embedded {
    pub const CLASS_TEMPLATE: &str = include_str!("../templates/ClassTemplate.java.tmpl");
}

/// Resolves template identifiers to raw template text
pub trait TemplateSource: Send + Sync {
    fn load(&self, id: &str) -> ClassGenResult<String>;
}

/// Templates compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn load(&self, id: &str) -> ClassGenResult<String> {
        match id {
            CLASS_TEMPLATE => Ok(embedded::CLASS_TEMPLATE.to_string()),
            other => Err(ClassGenError::TemplateNotFound(other.to_string())),
        }
    }
}

/// Templates read from `<root>/<id>.java.tmpl`
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a template identifier resolves to
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.{TEMPLATE_EXTENSION}"))
    }
}

impl TemplateSource for DirectoryTemplates {
    fn load(&self, id: &str) -> ClassGenResult<String> {
        let path = self.path_for(id);
        if !path.is_file() {
            return Err(ClassGenError::TemplateNotFound(path.display().to_string()));
        }

        tracing::debug!(path = %path.display(), "loading template");
        Ok(std::fs::read_to_string(&path)?)
    }
}

/// Replace every `{{key}}` in `template` with its mapped value.
///
/// Substitution is a single left-to-right pass: replacement text is never
/// rescanned, so generated code containing `{{...}}` comes through intact.
/// Placeholders without a mapping are left as they are.
pub fn substitute(template: &str, values: &BTreeMap<&str, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let replacement = after_open.find("}}").and_then(|end| {
            let key = &after_open[..end];
            let is_key = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if is_key {
                values.get(key).map(|value| (value, end))
            } else {
                None
            }
        });

        match replacement {
            Some((value, end)) => {
                output.push_str(value);
                rest = &after_open[end + 2..];
            }
            None => {
                output.push_str("{{");
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}

//! Import collection for one generated class.

use crate::naming::{is_qualified, package_of, strip_generic};
use std::collections::BTreeSet;

/// Deduplicated set of types the generated class must import.
///
/// Types from the class's own package and unqualified names (primitives,
/// `java.lang` shorthands such as `Object`) are never recorded. Generic
/// arguments are stripped, so `java.util.List<a.b.Item>` records
/// `java.util.List`.
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    owning_package: String,
    imports: BTreeSet<String>,
}

impl ImportRegistry {
    /// Create an empty registry for a class in `owning_package`
    pub fn new(owning_package: impl Into<String>) -> Self {
        Self {
            owning_package: owning_package.into(),
            imports: BTreeSet::new(),
        }
    }

    /// Package of the class being generated
    pub fn owning_package(&self) -> &str {
        &self.owning_package
    }

    /// Record an artifact; returns `true` if it was newly added.
    pub fn register(&mut self, artifact: &str) -> bool {
        if !is_qualified(artifact) {
            tracing::trace!(artifact, "skipping unqualified type");
            return false;
        }

        if package_of(artifact) == self.owning_package {
            tracing::debug!(artifact, "skipping same-package type");
            return false;
        }

        self.imports.insert(strip_generic(artifact))
    }

    /// Record an artifact even when it lives in the owning package.
    ///
    /// Used for imports the schema asks for explicitly. Unqualified names are
    /// still skipped since they cannot form an import line.
    pub fn force(&mut self, artifact: &str) -> bool {
        if !is_qualified(artifact) {
            tracing::trace!(artifact, "skipping unqualified forced import");
            return false;
        }

        self.imports.insert(strip_generic(artifact))
    }

    /// Record several artifacts
    pub fn register_all<'a>(&mut self, artifacts: impl IntoIterator<Item = &'a str>) {
        for artifact in artifacts {
            self.register(artifact);
        }
    }

    pub fn contains(&self, artifact: &str) -> bool {
        self.imports.contains(artifact)
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Recorded types in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// One `import <type>;` line per recorded type
    pub fn render(&self) -> String {
        self.iter()
            .map(|artifact| format!("import {artifact};"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

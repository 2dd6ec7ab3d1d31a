//! Per-call generation state.

use crate::config::GeneratorConfig;
use crate::imports::ImportRegistry;
use chrono::NaiveDateTime;

/// Mutable state shared by every formatter during one generation pass.
///
/// A fresh context is created for each class; formatters take it by
/// `&mut` and only ever add to its import registry.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    imports: ImportRegistry,
    indent: String,
    timestamp: NaiveDateTime,
}

impl GenerationContext {
    pub fn new(
        package: impl Into<String>,
        indent: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            imports: ImportRegistry::new(package),
            indent: indent.into(),
            timestamp,
        }
    }

    /// Build a context using the indentation from `config`
    pub fn from_config(
        package: impl Into<String>,
        config: &GeneratorConfig,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self::new(package, config.indent.clone(), timestamp)
    }

    /// Package of the class being generated
    pub fn package(&self) -> &str {
        self.imports.owning_package()
    }

    /// Record a referenced type
    pub fn register_import(&mut self, artifact: &str) {
        self.imports.register(artifact);
    }

    /// Import requested explicitly, bypassing the same-package filter
    pub fn force_import(&mut self, artifact: &str) {
        self.imports.force(artifact);
    }

    pub fn imports(&self) -> &ImportRegistry {
        &self.imports
    }

    /// Indentation for `depth` nesting levels inside the class body
    pub fn indent(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }

    /// Moment the class is generated at
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

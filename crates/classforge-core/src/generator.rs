//! Class assembly: runs every formatter and fills in the class template.

use crate::annotation::format_annotations;
use crate::attribute::format_attributes;
use crate::config::GeneratorConfig;
use crate::constructor::format_constructors;
use crate::context::GenerationContext;
use crate::error::ClassGenResult;
use crate::javadoc::format_javadoc;
use crate::method::format_methods;
use crate::relationship::format_relationships;
use crate::schema::ClassSchema;
use crate::synthetic::{format_equals_hash_code, format_to_string};
use crate::template::{
    CLASS_TEMPLATE, DirectoryTemplates, EmbeddedTemplates, TemplateSource, substitute,
};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Turns [`ClassSchema`]s into Java source text.
///
/// The generator itself is immutable; every call builds its own
/// [`GenerationContext`], so one instance can serve concurrent callers.
pub struct ClassGenerator {
    config: GeneratorConfig,
    templates: Box<dyn TemplateSource>,
}

impl std::fmt::Debug for ClassGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for ClassGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl ClassGenerator {
    /// Create a generator; `config.template_dir` selects on-disk templates,
    /// otherwise the embedded template is used.
    pub fn new(config: GeneratorConfig) -> Self {
        let templates: Box<dyn TemplateSource> = match &config.template_dir {
            Some(dir) => Box::new(DirectoryTemplates::new(dir.clone())),
            None => Box::new(EmbeddedTemplates),
        };
        Self { config, templates }
    }

    /// Replace the template source
    pub fn with_templates(mut self, templates: impl TemplateSource + 'static) -> Self {
        self.templates = Box::new(templates);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate source for `schema`, stamping serializable classes with the
    /// current local time.
    pub fn generate(&self, schema: &ClassSchema) -> ClassGenResult<String> {
        self.generate_at(schema, chrono::Local::now().naive_local())
    }

    /// Parse a JSON schema and generate its source
    pub fn generate_json(&self, json: &str) -> ClassGenResult<String> {
        self.generate(&ClassSchema::from_json(json)?)
    }

    /// Generate source for `schema` as of `timestamp`.
    ///
    /// Imports are rendered last, once every other fragment has registered
    /// the types it references.
    pub fn generate_at(
        &self,
        schema: &ClassSchema,
        timestamp: NaiveDateTime,
    ) -> ClassGenResult<String> {
        schema.validate()?;

        let name = schema.class_name().unwrap_or_default();
        tracing::debug!(class = name, package = %schema.package, "generating class");

        let mut ctx =
            GenerationContext::from_config(schema.package.clone(), &self.config, timestamp);

        let relationships =
            format_relationships(&schema.extends_classes, &schema.interfaces, &mut ctx);
        let attributes = format_attributes(&schema.attributes, &mut ctx, schema.serializable);
        let constructors = format_constructors(schema, &mut ctx)?;
        let methods = format_methods(&schema.methods, &mut ctx);

        let mut internal_methods = Vec::new();
        if schema.generate_to_string {
            internal_methods.push(format_to_string(name, &schema.attributes, &mut ctx));
        }
        if schema.generate_equals_hash_code {
            internal_methods.push(format_equals_hash_code(name, &schema.attributes, &mut ctx));
        }
        if !attributes.accessors.is_empty() {
            internal_methods.push(attributes.accessors);
        }

        let class_annotations = format_annotations(&schema.annotations_class, &mut ctx, "");
        let class_javadoc = format_javadoc(schema.javadoc.as_deref(), "", schema.author.as_deref());

        for artifact in &schema.additional_imports {
            ctx.force_import(artifact);
        }

        let template = self.templates.load(CLASS_TEMPLATE)?;
        let imports = ctx.imports().render();
        tracing::trace!(imports = ctx.imports().len(), "collected imports");

        let values = BTreeMap::from([
            ("package", schema.package.clone()),
            ("package-declaration", package_declaration(&schema.package)),
            ("imports", block(&imports, "\n\n")),
            ("class-javadoc", block(&class_javadoc, "\n")),
            ("class-annotations", block(&class_annotations, "\n")),
            ("encapsulation", schema.encapsulation.clone()),
            ("name", name.to_string()),
            ("extends", clause(&relationships.extends)),
            ("implements", clause(&relationships.implements)),
            ("attributes", section(&attributes.fields)),
            ("constructors", section(&constructors)),
            ("methods", section(&methods)),
            ("internal-methods", section(&internal_methods.join("\n\n"))),
        ]);

        Ok(substitute(&template, &values))
    }
}

/// Optional header block followed by `separator`
fn block(text: &str, separator: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("{text}{separator}")
    }
}

/// `package` statement, omitted for the default package
fn package_declaration(package: &str) -> String {
    if package.is_empty() {
        String::new()
    } else {
        format!("package {package};\n\n")
    }
}

/// Inheritance clause following the class name
fn clause(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!(" {text}")
    }
}

/// Class body section, preceded by a blank line
fn section(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("\n{text}\n")
    }
}

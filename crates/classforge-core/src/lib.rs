//! classforge-core - Java class generation engine
//!
//! This crate turns a declarative [`ClassSchema`] into Java source text:
//! - [`ClassGenerator`] assembles a complete class through a template
//! - [`GenerationContext`] carries the per-call import registry
//! - formatter modules render annotations, javadoc, fields, accessors,
//!   constructors, methods and inheritance clauses
//! - [`TemplateSource`] and [`substitute`] are the template seams
//!
//! # Example
//!
//! ```
//! use classforge_core::{AttributeSpec, ClassGenerator, ClassSchema};
//!
//! let schema = ClassSchema {
//!     all_args_constructor: true,
//!     ..ClassSchema::new("Person", "com.example")
//!         .with_attribute(AttributeSpec::new("age", "int").with_accessors())
//! };
//!
//! let source = ClassGenerator::default().generate(&schema).unwrap();
//! assert!(source.contains("public Person(int age) {"));
//! assert!(source.contains("public int getAge() {"));
//! ```

pub mod annotation;
pub mod attribute;
mod config;
pub mod constructor;
mod context;
mod error;
mod generator;
pub mod imports;
pub mod javadoc;
pub mod method;
pub mod naming;
pub mod relationship;
mod schema;
pub mod synthetic;
pub mod template;

pub use config::GeneratorConfig;
pub use context::GenerationContext;
pub use error::{ClassGenError, ClassGenResult};
pub use generator::ClassGenerator;
pub use imports::ImportRegistry;
pub use schema::{
    AnnotationParameter, AnnotationSpec, AttributeSpec, ClassSchema, DefaultConstructor,
    MethodSpec, ParameterSpec,
};
pub use template::{DirectoryTemplates, EmbeddedTemplates, TemplateSource, substitute};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AnnotationSpec, AttributeSpec, ClassGenError, ClassGenResult, ClassGenerator, ClassSchema,
        GenerationContext, GeneratorConfig, MethodSpec,
    };
}

//! Generate command implementation

use anyhow::{Context, Result};
use classforge_core::{ClassGenerator, ClassSchema, GeneratorConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Read and parse a JSON class schema
pub fn load_schema(path: impl AsRef<Path>) -> Result<ClassSchema> {
    let path = path.as_ref();
    let content =
        fs::read(path).with_context(|| format!("Failed to read schema: {}", path.display()))?;

    ClassSchema::from_slice(&content)
        .with_context(|| format!("Failed to parse schema: {}", path.display()))
}

/// Location of the generated file below a source root: `<package path>/<Name>.java`
pub fn output_path(source_root: &Path, schema: &ClassSchema) -> Result<PathBuf> {
    let name = schema
        .class_name()
        .context("Schema has no class name; cannot derive an output file name")?;

    let package_dir = schema
        .package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .fold(source_root.to_path_buf(), |dir, segment| dir.join(segment));

    Ok(package_dir.join(format!("{name}.java")))
}

/// Generate the class described by `schema_path`.
///
/// Writes below `output` when given, otherwise prints to stdout.
pub fn run(schema_path: &str, output: Option<&str>, config: GeneratorConfig) -> Result<()> {
    let schema = load_schema(schema_path)?;
    let source = ClassGenerator::new(config)
        .generate(&schema)
        .with_context(|| format!("Failed to generate class from {schema_path}"))?;

    match output {
        Some(output) => {
            let path = write_source(Path::new(output), &schema, &source)?;
            println!("✓ Generated {}", path.display());
        }
        None => print!("{source}"),
    }

    Ok(())
}

/// Write generated source below `source_root`, creating package directories
pub fn write_source(source_root: &Path, schema: &ClassSchema, source: &str) -> Result<PathBuf> {
    let path = output_path(source_root, schema)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&path, source).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote generated class");

    Ok(path)
}

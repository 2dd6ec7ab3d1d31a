//! Check command implementation

use crate::generate::load_schema;
use anyhow::Result;

/// Parse and validate a schema, printing a short summary
pub fn run(schema_path: &str) -> Result<()> {
    let schema = load_schema(schema_path)?;
    schema.validate()?;

    println!(
        "✓ {} is valid: class {} ({} attributes, {} methods)",
        schema_path,
        qualified_name(&schema.package, schema.class_name().unwrap_or("<unnamed>")),
        schema.attributes.len(),
        schema.methods.len()
    );

    Ok(())
}

fn qualified_name(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}

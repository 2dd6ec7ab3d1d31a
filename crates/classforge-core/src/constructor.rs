//! Constructor rendering.

use crate::context::GenerationContext;
use crate::error::{ClassGenError, ClassGenResult};
use crate::naming::simple_type_of;
use crate::schema::ClassSchema;

/// Render the requested constructors, separated by a blank line.
///
/// Fails with [`ClassGenError::Configuration`] when a constructor is
/// requested for a class without a name. Returns an empty string when no
/// constructor is requested.
pub fn format_constructors(
    schema: &ClassSchema,
    ctx: &mut GenerationContext,
) -> ClassGenResult<String> {
    if !schema.wants_constructors() {
        return Ok(String::new());
    }

    let name = schema.class_name().ok_or_else(ClassGenError::missing_class_name)?;
    let mut constructors = Vec::new();

    if schema.constructor_no_args {
        let content = schema
            .default_constructor
            .as_ref()
            .map(|constructor| constructor.content.as_str())
            .unwrap_or_default();
        constructors.push(no_args_constructor(name, content, ctx));
    }

    if schema.all_args_constructor {
        constructors.push(all_args_constructor(name, schema, ctx));
    }

    Ok(constructors.join("\n\n"))
}

fn no_args_constructor(name: &str, content: &str, ctx: &GenerationContext) -> String {
    let indent = ctx.indent(1);
    let mut lines = vec![format!("{indent}public {name}() {{")];
    if !content.is_empty() {
        lines.push(format!("{}{content}", ctx.indent(2)));
    }
    lines.push(format!("{indent}}}"));
    lines.join("\n")
}

fn all_args_constructor(name: &str, schema: &ClassSchema, ctx: &mut GenerationContext) -> String {
    let indent = ctx.indent(1);
    let body_indent = ctx.indent(2);

    for attribute in &schema.attributes {
        ctx.register_import(&attribute.ty);
    }

    let parameters = schema
        .attributes
        .iter()
        .map(|attribute| format!("{} {}", simple_type_of(&attribute.ty), attribute.name))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![format!("{indent}public {name}({parameters}) {{")];
    lines.extend(
        schema
            .attributes
            .iter()
            .map(|attribute| format!("{body_indent}this.{0} = {0};", attribute.name)),
    );
    lines.push(format!("{indent}}}"));
    lines.join("\n")
}

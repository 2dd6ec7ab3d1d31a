//! Method rendering, shared by user-declared, accessor and synthetic methods.

use crate::annotation::format_annotations;
use crate::context::GenerationContext;
use crate::javadoc::format_javadoc;
use crate::naming::simple_type_of;
use crate::schema::MethodSpec;

/// Render one method: javadoc, annotation lines, signature and body.
///
/// The return type, every parameter type and the thrown exception are
/// registered as imports. `content` is placed on the first body line as-is;
/// it is never parsed, so multi-line bodies carry their own indentation.
pub fn format_method(spec: &MethodSpec, ctx: &mut GenerationContext) -> String {
    let indent = ctx.indent(1);

    ctx.register_import(&spec.return_type);
    for parameter in &spec.parameters {
        ctx.register_import(&parameter.ty);
    }
    if let Some(exception) = &spec.throws {
        ctx.register_import(exception);
    }

    let parameters = spec
        .parameters
        .iter()
        .map(|parameter| format!("{} {}", simple_type_of(&parameter.ty), parameter.name))
        .collect::<Vec<_>>()
        .join(", ");

    let throws = spec
        .throws
        .as_deref()
        .map(|exception| format!(" throws {}", simple_type_of(exception)))
        .unwrap_or_default();

    let mut parts = Vec::new();

    let javadoc = format_javadoc(spec.javadoc.as_deref(), &indent, None);
    if !javadoc.is_empty() {
        parts.push(javadoc);
    }

    let annotations = format_annotations(&spec.annotations, ctx, &indent);
    if !annotations.is_empty() {
        parts.push(annotations);
    }

    parts.push(format!(
        "{indent}{} {} {}({parameters}){throws} {{",
        spec.encapsulation,
        simple_type_of(&spec.return_type),
        spec.name,
    ));
    if !spec.content.is_empty() {
        parts.push(format!("{}{}", ctx.indent(2), spec.content));
    }
    parts.push(format!("{indent}}}"));

    parts.join("\n")
}

/// Render methods in order with a blank line between each.
pub fn format_methods(methods: &[MethodSpec], ctx: &mut GenerationContext) -> String {
    methods
        .iter()
        .map(|method| format_method(method, ctx))
        .collect::<Vec<_>>()
        .join("\n\n")
}

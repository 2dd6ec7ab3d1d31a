//! Generated `toString`, `equals` and `hashCode` methods.
//!
//! Each method is described as a [`MethodSpec`] annotated with `@Override`
//! and rendered through [`format_method`], so it follows the same layout and
//! import rules as user-declared methods.

use crate::context::GenerationContext;
use crate::method::format_method;
use crate::naming::simple_type_of;
use crate::schema::{AnnotationSpec, AttributeSpec, MethodSpec};

/// Utility class backing the generated `equals`/`hashCode`.
pub const OBJECTS_ARTIFACT: &str = "java.util.Objects";

fn override_method(name: &str, return_type: &str) -> MethodSpec {
    MethodSpec::new(name, return_type).with_annotation(AnnotationSpec::new("Override"))
}

/// Render `toString()` listing every attribute as `name=value`.
pub fn format_to_string(
    class_name: &str,
    attributes: &[AttributeSpec],
    ctx: &mut GenerationContext,
) -> String {
    let mut terms = vec![format!("\"{class_name}{{\"")];
    let fields = attributes
        .iter()
        .map(|attribute| format!("\"{0}=\" + {0}", attribute.name))
        .collect::<Vec<_>>();
    if !fields.is_empty() {
        terms.push(fields.join(" + \", \" + "));
    }
    terms.push("\"}\"".to_string());

    let spec = override_method("toString", "String")
        .with_content(format!("return {};", terms.join(" + ")));
    format_method(&spec, ctx)
}

/// Render `equals(Object)` and `hashCode()` over every attribute, separated
/// by a blank line.
pub fn format_equals_hash_code(
    class_name: &str,
    attributes: &[AttributeSpec],
    ctx: &mut GenerationContext,
) -> String {
    ctx.register_import(OBJECTS_ARTIFACT);
    let objects = simple_type_of(OBJECTS_ARTIFACT);
    let body_indent = ctx.indent(2);

    let mut lines = vec![
        "if (this == o) return true;".to_string(),
        "if (o == null || getClass() != o.getClass()) return false;".to_string(),
    ];
    if attributes.is_empty() {
        lines.push("return true;".to_string());
    } else {
        lines.push(format!("{class_name} that = ({class_name}) o;"));
        let comparisons = attributes
            .iter()
            .map(|attribute| format!("{objects}.equals({0}, that.{0})", attribute.name))
            .collect::<Vec<_>>()
            .join(" && ");
        lines.push(format!("return {comparisons};"));
    }

    let equals = override_method("equals", "boolean")
        .with_parameter("Object", "o")
        .with_content(lines.join(&format!("\n{body_indent}")));

    let names = attributes
        .iter()
        .map(|attribute| attribute.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let hash_code = override_method("hashCode", "int")
        .with_content(format!("return {objects}.hash({names});"));

    [format_method(&equals, ctx), format_method(&hash_code, ctx)].join("\n\n")
}

#[cfg(test)]
#[path = "synthetic/synthetic_tests.rs"]
mod synthetic_tests;

//! Annotation rendering.

use crate::context::GenerationContext;
use crate::naming::simple_type_of;
use crate::schema::AnnotationSpec;

/// Render one annotation usage and register its type as an import.
///
/// Produces `@Name` or `@Name(k1 = v1, k2 = v2)`; an empty parameter list
/// renders without parentheses.
pub fn format_annotation(spec: &AnnotationSpec, ctx: &mut GenerationContext) -> String {
    ctx.register_import(&spec.name);

    let parameters = spec
        .parameters
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|parameter| format!("{} = {}", parameter.name, parameter.rendered_value()))
        .collect::<Vec<_>>();

    if parameters.is_empty() {
        format!("@{}", simple_type_of(&spec.name))
    } else {
        format!("@{}({})", simple_type_of(&spec.name), parameters.join(", "))
    }
}

/// Render annotations one per line, each prefixed with `indent`.
pub fn format_annotations(
    specs: &[AnnotationSpec],
    ctx: &mut GenerationContext,
    indent: &str,
) -> String {
    specs
        .iter()
        .map(|spec| format!("{indent}{}", format_annotation(spec, ctx)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::context::test_support::context;

    #[test]
    fn format_annotation___marker___renders_simple_name() {
        let mut ctx = context("com.example");

        let text = format_annotation(&AnnotationSpec::new("javax.persistence.Entity"), &mut ctx);

        assert_eq!(text, "@Entity");
        assert!(ctx.imports().contains("javax.persistence.Entity"));
    }

    #[test]
    fn format_annotation___parameters___joined_in_order() {
        let mut ctx = context("com.example");
        let spec = AnnotationSpec::new("javax.persistence.Column")
            .with_parameter("name", "\"first_name\"")
            .with_parameter("nullable", "false");

        let text = format_annotation(&spec, &mut ctx);

        assert_eq!(text, "@Column(name = \"first_name\", nullable = false)");
    }

    #[test]
    fn format_annotation___empty_parameter_list___renders_without_parens() {
        let mut ctx = context("com.example");
        let spec = AnnotationSpec {
            name: "a.b.Marker".into(),
            parameters: Some(Vec::new()),
        };

        assert_eq!(format_annotation(&spec, &mut ctx), "@Marker");
    }

    #[test]
    fn format_annotation___unqualified___not_imported() {
        let mut ctx = context("com.example");

        let text = format_annotation(&AnnotationSpec::new("Override"), &mut ctx);

        assert_eq!(text, "@Override");
        assert!(ctx.imports().is_empty());
    }

    #[test]
    fn format_annotations___indent___prefixes_every_line() {
        let mut ctx = context("com.example");
        let specs = vec![
            AnnotationSpec::new("javax.persistence.Id"),
            AnnotationSpec::new("javax.persistence.GeneratedValue"),
        ];

        let text = format_annotations(&specs, &mut ctx, "    ");

        assert_eq!(text, "    @Id\n    @GeneratedValue");
        assert_eq!(ctx.imports().len(), 2);
    }

    #[test]
    fn format_annotations___empty___returns_empty_string() {
        let mut ctx = context("com.example");

        assert_eq!(format_annotations(&[], &mut ctx, ""), "");
    }
}

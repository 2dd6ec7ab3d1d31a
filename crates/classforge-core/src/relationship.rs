//! `extends` / `implements` clauses.

use crate::context::GenerationContext;
use crate::naming::simple_type_of;

/// Rendered inheritance clauses; each is empty when its list is empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    pub extends: String,
    pub implements: String,
}

/// Render the inheritance clauses and register every listed type.
pub fn format_relationships(
    extends_classes: &[String],
    interfaces: &[String],
    ctx: &mut GenerationContext,
) -> Relationships {
    for artifact in extends_classes.iter().chain(interfaces) {
        ctx.register_import(artifact);
    }

    Relationships {
        extends: clause("extends", extends_classes),
        implements: clause("implements", interfaces),
    }
}

fn clause(keyword: &str, artifacts: &[String]) -> String {
    if artifacts.is_empty() {
        return String::new();
    }

    let names = artifacts
        .iter()
        .map(|artifact| simple_type_of(artifact))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{keyword} {names}")
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::context::test_support::context;

    #[test]
    fn format_relationships___interfaces_only___empty_extends() {
        let mut ctx = context("com.example");

        let clauses = format_relationships(&[], &["a.b.Printable".to_string()], &mut ctx);

        assert_eq!(clauses.extends, "");
        assert_eq!(clauses.implements, "implements Printable");
        assert!(ctx.imports().contains("a.b.Printable"));
    }

    #[test]
    fn format_relationships___both___joins_simple_names() {
        let mut ctx = context("com.example");
        let extends = vec!["com.example.base.BaseEntity".to_string()];
        let interfaces = vec![
            "java.io.Serializable".to_string(),
            "java.lang.Comparable<com.example.Person>".to_string(),
        ];

        let clauses = format_relationships(&extends, &interfaces, &mut ctx);

        assert_eq!(clauses.extends, "extends BaseEntity");
        assert_eq!(clauses.implements, "implements Serializable, Comparable");
        assert_eq!(ctx.imports().len(), 3);
    }

    #[test]
    fn format_relationships___same_package_supertype___not_imported() {
        let mut ctx = context("com.example");

        let clauses = format_relationships(&["com.example.Animal".to_string()], &[], &mut ctx);

        assert_eq!(clauses.extends, "extends Animal");
        assert!(ctx.imports().is_empty());
    }

    #[test]
    fn format_relationships___empty___both_clauses_empty() {
        let mut ctx = context("com.example");

        assert_eq!(format_relationships(&[], &[], &mut ctx), Relationships::default());
    }
}

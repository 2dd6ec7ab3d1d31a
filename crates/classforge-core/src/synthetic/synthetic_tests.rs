#![allow(non_snake_case)]

use super::*;
use crate::context::test_support::context;

fn attributes() -> Vec<AttributeSpec> {
    vec![
        AttributeSpec::new("name", "java.lang.String"),
        AttributeSpec::new("age", "int"),
    ]
}

#[test]
fn format_to_string___concatenates_every_attribute() {
    let mut ctx = context("com.example");

    let text = format_to_string("Person", &attributes(), &mut ctx);

    assert_eq!(
        text,
        "    @Override\n    public String toString() {\n        return \"Person{\" + \"name=\" + name + \", \" + \"age=\" + age + \"}\";\n    }"
    );
}

#[test]
fn format_to_string___no_attributes___braces_only() {
    let mut ctx = context("com.example");

    let text = format_to_string("Empty", &[], &mut ctx);

    assert!(text.contains("return \"Empty{\" + \"}\";"));
}

#[test]
fn format_to_string___imports_nothing() {
    let mut ctx = context("com.example");

    format_to_string("Person", &attributes(), &mut ctx);

    assert!(ctx.imports().is_empty());
}

#[test]
fn format_equals_hash_code___equals___null_safe_conjunction() {
    let mut ctx = context("com.example");

    let text = format_equals_hash_code("Person", &attributes(), &mut ctx);

    let expected_equals = "    @Override\n    public boolean equals(Object o) {\n        if (this == o) return true;\n        if (o == null || getClass() != o.getClass()) return false;\n        Person that = (Person) o;\n        return Objects.equals(name, that.name) && Objects.equals(age, that.age);\n    }";
    assert!(text.starts_with(expected_equals), "{text}");
}

#[test]
fn format_equals_hash_code___hash_code___hashes_every_attribute() {
    let mut ctx = context("com.example");

    let text = format_equals_hash_code("Person", &attributes(), &mut ctx);

    assert!(text.ends_with(
        "\n\n    @Override\n    public int hashCode() {\n        return Objects.hash(name, age);\n    }"
    ));
}

#[test]
fn format_equals_hash_code___registers_objects_import() {
    let mut ctx = context("com.example");

    format_equals_hash_code("Person", &attributes(), &mut ctx);

    assert!(ctx.imports().contains(OBJECTS_ARTIFACT));
}

#[test]
fn format_equals_hash_code___no_attributes___equal_after_class_check() {
    let mut ctx = context("com.example");

    let text = format_equals_hash_code("Marker", &[], &mut ctx);

    assert!(!text.contains("Marker that"));
    assert!(text.contains("return false;\n        return true;"));
    assert!(text.contains("return Objects.hash();"));
}

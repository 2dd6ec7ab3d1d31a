#![allow(non_snake_case)]

use super::*;
use serde_json::json;

#[test]
fn ClassSchema___from_json___parses_camel_case_keys() {
    let json = r#"{
        "name": "Person",
        "package": "com.example.model",
        "annotationsClass": [{ "name": "javax.persistence.Entity" }],
        "extendsClasses": ["com.example.base.Entity"],
        "interfaces": ["java.io.Serializable"],
        "attributes": [
            { "name": "age", "type": "int", "getters": true, "setters": true }
        ],
        "methods": [
            { "name": "greet", "returnType": "java.lang.String", "content": "return \"hi\";" }
        ],
        "constructorNoArgs": true,
        "allArgsConstructor": true,
        "defaultConstructor": { "content": "super();" },
        "serializable": true,
        "generateToString": true,
        "generateEqualsHashCode": true,
        "javadoc": "A person.",
        "author": "Jane",
        "additionalImports": ["java.util.List"]
    }"#;

    let schema = ClassSchema::from_json(json).unwrap();

    assert_eq!(schema.class_name(), Some("Person"));
    assert_eq!(schema.package, "com.example.model");
    assert_eq!(schema.encapsulation, "public");
    assert_eq!(schema.annotations_class.len(), 1);
    assert_eq!(schema.extends_classes, vec!["com.example.base.Entity"]);
    assert_eq!(schema.interfaces, vec!["java.io.Serializable"]);
    assert_eq!(schema.attributes[0].ty, "int");
    assert_eq!(schema.attributes[0].encapsulation, "private");
    assert_eq!(schema.methods[0].return_type, "java.lang.String");
    assert_eq!(schema.methods[0].encapsulation, "public");
    assert!(schema.constructor_no_args);
    assert!(schema.all_args_constructor);
    assert_eq!(schema.default_constructor.unwrap().content, "super();");
    assert!(schema.serializable);
    assert!(schema.generate_to_string);
    assert!(schema.generate_equals_hash_code);
    assert_eq!(schema.author.as_deref(), Some("Jane"));
    assert_eq!(schema.additional_imports, vec!["java.util.List"]);
}

#[test]
fn ClassSchema___from_json___accepts_snake_case_aliases() {
    let json = r#"{
        "name": "Animal",
        "encapsulation_class": "abstract",
        "annotations_class": [{ "name": "a.b.Marker" }],
        "extends_classes": ["a.b.Base"]
    }"#;

    let schema = ClassSchema::from_json(json).unwrap();

    assert_eq!(schema.encapsulation, "abstract");
    assert_eq!(schema.annotations_class[0].name, "a.b.Marker");
    assert_eq!(schema.extends_classes, vec!["a.b.Base"]);
}

#[test]
fn ClassSchema___from_empty_object___uses_defaults() {
    let schema = ClassSchema::from_json("{}").unwrap();

    assert_eq!(schema, ClassSchema::default());
    assert_eq!(schema.encapsulation, "public");
    assert!(schema.class_name().is_none());
}

#[test]
fn ClassSchema___from_invalid_json___returns_schema_error() {
    let result = ClassSchema::from_json("{ not json");

    assert!(matches!(result, Err(ClassGenError::Schema(_))));
}

#[test]
fn ClassSchema___from_json_array___returns_schema_error() {
    let empty = ClassSchema::from_json("[]");
    let positional = ClassSchema::from_json(r#"["Person", "com.x"]"#);

    assert!(matches!(empty, Err(ClassGenError::Schema(_))));
    assert!(matches!(positional, Err(ClassGenError::Schema(_))));
}

#[test]
fn ClassSchema___from_slice_scalar___returns_schema_error() {
    let result = ClassSchema::from_slice(b"\"Person\"");

    match result {
        Err(ClassGenError::Schema(error)) => {
            assert!(error.to_string().contains("a class schema object"));
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn ClassSchema___from_value_object___parses() {
    let schema = ClassSchema::from_value(json!({ "name": "Person", "package": "com.x" })).unwrap();

    assert_eq!(schema, ClassSchema::new("Person", "com.x"));
}

#[test]
fn ClassSchema___validate___constructors_without_name___fails() {
    let schema = ClassSchema {
        constructor_no_args: true,
        ..ClassSchema::default()
    };

    let result = schema.validate();

    assert!(matches!(result, Err(ClassGenError::Configuration(_))));
}

#[test]
fn ClassSchema___validate___empty_name_counts_as_missing() {
    let schema = ClassSchema {
        name: Some(String::new()),
        all_args_constructor: true,
        ..ClassSchema::default()
    };

    assert!(schema.validate().is_err());
}

#[test]
fn ClassSchema___validate___no_constructors_without_name___succeeds() {
    let schema = ClassSchema::default();

    assert!(schema.validate().is_ok());
}

#[test]
fn AnnotationParameter___rendered_value___prints_literals() {
    let string = AnnotationParameter {
        name: "name".into(),
        value: json!("\"person\""),
    };
    let number = AnnotationParameter {
        name: "length".into(),
        value: json!(64),
    };
    let flag = AnnotationParameter {
        name: "nullable".into(),
        value: json!(false),
    };
    let array = AnnotationParameter {
        name: "value".into(),
        value: json!(["\"a\"", "\"b\""]),
    };

    assert_eq!(string.rendered_value(), "\"person\"");
    assert_eq!(number.rendered_value(), "64");
    assert_eq!(flag.rendered_value(), "false");
    assert_eq!(array.rendered_value(), "{\"a\", \"b\"}");
}

#[test]
fn AttributeSpec___builders___set_fields() {
    let attribute = AttributeSpec::new("id", "java.lang.Long")
        .with_accessors()
        .with_value("0L")
        .with_javadoc("Identifier")
        .with_annotation(AnnotationSpec::new("javax.persistence.Id"));

    assert!(attribute.getters);
    assert!(attribute.setters);
    assert_eq!(attribute.value.as_deref(), Some("0L"));
    assert_eq!(attribute.javadoc.as_deref(), Some("Identifier"));
    assert_eq!(attribute.annotations.len(), 1);
}

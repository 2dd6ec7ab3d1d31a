//! Declarative class description consumed by the generator.
//!
//! Schemas are usually written as JSON with camelCase keys. The snake_case
//! spellings used by older schema files (`annotations_class`,
//! `extends_classes`, `encapsulation_class`) are accepted as aliases.
//!
//! ```json
//! {
//!   "name": "Person",
//!   "package": "com.example.model",
//!   "attributes": [
//!     { "name": "age", "type": "int", "getters": true, "setters": true }
//!   ],
//!   "allArgsConstructor": true
//! }
//! ```

use crate::error::{ClassGenError, ClassGenResult};
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};

fn default_public() -> String {
    "public".to_string()
}

fn default_private() -> String {
    "private".to_string()
}

fn default_void() -> String {
    "void".to_string()
}

/// Root description of one class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassSchema {
    /// Simple class identifier
    pub name: Option<String>,

    /// Owning package; types from this package are never imported
    pub package: String,

    /// Visibility keyword of the class
    #[serde(alias = "encapsulationClass", alias = "encapsulation_class")]
    pub encapsulation: String,

    /// Annotations applied to the class declaration
    #[serde(alias = "annotations_class")]
    pub annotations_class: Vec<AnnotationSpec>,

    /// Fully-qualified supertypes
    #[serde(alias = "extends_classes")]
    pub extends_classes: Vec<String>,

    /// Fully-qualified implemented interfaces
    pub interfaces: Vec<String>,

    pub attributes: Vec<AttributeSpec>,

    pub methods: Vec<MethodSpec>,

    /// Emit a no-args constructor whose body is `default_constructor`
    pub constructor_no_args: bool,

    /// Emit a constructor taking every attribute
    pub all_args_constructor: bool,

    pub default_constructor: Option<DefaultConstructor>,

    /// Inject a `serialVersionUID` field
    pub serializable: bool,

    pub generate_to_string: bool,

    pub generate_equals_hash_code: bool,

    /// Class documentation, paragraphs separated by `<br>`
    pub javadoc: Option<String>,

    pub author: Option<String>,

    /// Types imported whether or not anything references them
    pub additional_imports: Vec<String>,
}

impl Default for ClassSchema {
    fn default() -> Self {
        Self {
            name: None,
            package: String::new(),
            encapsulation: default_public(),
            annotations_class: Vec::new(),
            extends_classes: Vec::new(),
            interfaces: Vec::new(),
            attributes: Vec::new(),
            methods: Vec::new(),
            constructor_no_args: false,
            all_args_constructor: false,
            default_constructor: None,
            serializable: false,
            generate_to_string: false,
            generate_equals_hash_code: false,
            javadoc: None,
            author: None,
            additional_imports: Vec::new(),
        }
    }
}

impl ClassSchema {
    /// Create a public class schema with the given name and package
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            package: package.into(),
            ..Self::default()
        }
    }

    /// Parse a schema from JSON text; the document must be a JSON object
    pub fn from_json(json: &str) -> ClassGenResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parse a schema from JSON bytes; the document must be a JSON object
    pub fn from_slice(bytes: &[u8]) -> ClassGenResult<Self> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Build a schema from an already parsed JSON document.
    ///
    /// Only objects are accepted. The derived visitor would otherwise also
    /// read arrays as positional fields.
    pub fn from_value(value: serde_json::Value) -> ClassGenResult<Self> {
        if !value.is_object() {
            let unexpected = match &value {
                serde_json::Value::Null => Unexpected::Unit,
                serde_json::Value::Bool(flag) => Unexpected::Bool(*flag),
                serde_json::Value::Number(_) => Unexpected::Other("number"),
                serde_json::Value::String(text) => Unexpected::Str(text),
                serde_json::Value::Array(_) => Unexpected::Seq,
                serde_json::Value::Object(_) => Unexpected::Map,
            };
            let error = serde_json::Error::invalid_type(unexpected, &"a class schema object");
            return Err(error.into());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Class name, treating an empty string as absent
    pub fn class_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Whether either constructor is requested
    pub fn wants_constructors(&self) -> bool {
        self.constructor_no_args || self.all_args_constructor
    }

    /// Check the schema before any text is produced.
    ///
    /// The only hard requirement is a class name whenever constructors are
    /// requested; everything else degrades to empty fragments.
    pub fn validate(&self) -> ClassGenResult<()> {
        if self.wants_constructors() && self.class_name().is_none() {
            return Err(ClassGenError::missing_class_name());
        }
        Ok(())
    }

    pub fn with_attribute(mut self, attribute: AttributeSpec) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }
}

/// Body of the no-args constructor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultConstructor {
    #[serde(default)]
    pub content: String,
}

/// One field of the class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub name: String,

    /// Fully-qualified type, optionally wrapped in one generic
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default = "default_private")]
    pub encapsulation: String,

    #[serde(default)]
    pub getters: bool,

    #[serde(default)]
    pub setters: bool,

    #[serde(default)]
    pub annotations: Vec<AnnotationSpec>,

    /// Literal initializer text
    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub javadoc: Option<String>,
}

impl AttributeSpec {
    /// Create a private attribute without accessors
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            encapsulation: default_private(),
            getters: false,
            setters: false,
            annotations: Vec::new(),
            value: None,
            javadoc: None,
        }
    }

    /// Request both a getter and a setter
    pub fn with_accessors(mut self) -> Self {
        self.getters = true;
        self.setters = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_javadoc(mut self, javadoc: impl Into<String>) -> Self {
        self.javadoc = Some(javadoc.into());
        self
    }
}

/// One user-declared method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSpec {
    #[serde(default = "default_public")]
    pub encapsulation: String,

    #[serde(default = "default_void")]
    pub return_type: String,

    pub name: String,

    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,

    /// Raw body text, inserted verbatim
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub annotations: Vec<AnnotationSpec>,

    /// Single fully-qualified checked exception
    #[serde(default)]
    pub throws: Option<String>,

    #[serde(default)]
    pub javadoc: Option<String>,
}

impl MethodSpec {
    /// Create a public method
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            encapsulation: default_public(),
            return_type: return_type.into(),
            name: name.into(),
            parameters: Vec::new(),
            content: String::new(),
            annotations: Vec::new(),
            throws: None,
            javadoc: None,
        }
    }

    pub fn with_parameter(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameters.push(ParameterSpec {
            ty: ty.into(),
            name: name.into(),
        });
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_throws(mut self, exception: impl Into<String>) -> Self {
        self.throws = Some(exception.into());
        self
    }

    pub fn with_javadoc(mut self, javadoc: impl Into<String>) -> Self {
        self.javadoc = Some(javadoc.into());
        self
    }
}

/// Method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

/// Annotation usage on a class, field or method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSpec {
    /// Fully-qualified annotation type
    pub name: String,

    #[serde(default)]
    pub parameters: Option<Vec<AnnotationParameter>>,
}

impl AnnotationSpec {
    /// Marker annotation without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: None,
        }
    }

    /// Append a `key = value` parameter; `value` is printed verbatim
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(AnnotationParameter {
                name: name.into(),
                value: serde_json::Value::String(value.into()),
            });
        self
    }
}

/// `key = value` pair inside an annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationParameter {
    pub name: String,

    /// Strings are printed verbatim, other JSON values as Java literals
    pub value: serde_json::Value,
}

impl AnnotationParameter {
    /// Java source text for the value
    pub fn rendered_value(&self) -> String {
        render_annotation_value(&self.value)
    }
}

fn render_annotation_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Array(items) => format!(
            "{{{}}}",
            items
                .iter()
                .map(render_annotation_value)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "schema/schema_tests.rs"]
mod schema_tests;

//! Field declarations and their accessors.

use crate::annotation::format_annotations;
use crate::context::GenerationContext;
use crate::javadoc::format_javadoc;
use crate::method::format_method;
use crate::naming::{capitalize, simple_type_of};
use crate::schema::{AttributeSpec, MethodSpec};
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Name of the field injected into serializable classes.
pub const SERIAL_VERSION_UID: &str = "serialVersionUID";

/// Rendered text for one attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAttribute {
    /// Field declaration with its javadoc and annotations
    pub field: String,
    /// Getter and/or setter, empty when neither is requested
    pub accessors: String,
}

/// Rendered text for all attributes of a class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedAttributes {
    pub fields: String,
    pub accessors: String,
}

/// Render the field declaration and accessors of one attribute.
pub fn format_field(spec: &AttributeSpec, ctx: &mut GenerationContext) -> FormattedAttribute {
    let indent = ctx.indent(1);
    ctx.register_import(&spec.ty);

    let mut parts = Vec::new();

    let javadoc = format_javadoc(spec.javadoc.as_deref(), &indent, None);
    if !javadoc.is_empty() {
        parts.push(javadoc);
    }

    let annotations = format_annotations(&spec.annotations, ctx, &indent);
    if !annotations.is_empty() {
        parts.push(annotations);
    }

    let initializer = spec
        .value
        .as_deref()
        .map(|value| format!(" = {value}"))
        .unwrap_or_default();
    parts.push(format!(
        "{indent}{} {} {}{initializer};",
        spec.encapsulation,
        simple_type_of(&spec.ty),
        spec.name
    ));

    FormattedAttribute {
        field: parts.join("\n"),
        accessors: format_accessors(spec, ctx),
    }
}

/// Render the getter and/or setter requested for an attribute.
pub fn format_accessors(spec: &AttributeSpec, ctx: &mut GenerationContext) -> String {
    let mut methods = Vec::new();

    if spec.getters {
        let getter = MethodSpec::new(format!("get{}", capitalize(&spec.name)), spec.ty.clone())
            .with_content(format!("return this.{};", spec.name));
        methods.push(format_method(&getter, ctx));
    }

    if spec.setters {
        let setter = MethodSpec::new(format!("set{}", capitalize(&spec.name)), "void")
            .with_parameter(spec.ty.clone(), spec.name.clone())
            .with_content(format!("this.{0} = {0};", spec.name));
        methods.push(format_method(&setter, ctx));
    }

    methods.join("\n\n")
}

/// Render every attribute into a field stream and an accessor stream.
///
/// A serializable class gets a `serialVersionUID` field ahead of the user
/// attributes; it never has accessors.
pub fn format_attributes(
    attributes: &[AttributeSpec],
    ctx: &mut GenerationContext,
    serializable: bool,
) -> FormattedAttributes {
    let mut fields = Vec::new();
    let mut accessors = Vec::new();

    if serializable {
        let serial = serial_version_attribute(ctx.timestamp());
        fields.push(format_field(&serial, ctx).field);
    }

    for attribute in attributes {
        let formatted = format_field(attribute, ctx);
        fields.push(formatted.field);
        if !formatted.accessors.is_empty() {
            accessors.push(formatted.accessors);
        }
    }

    FormattedAttributes {
        fields: fields.join("\n\n"),
        accessors: accessors.join("\n\n"),
    }
}

/// Synthetic `private static final long serialVersionUID` attribute.
pub fn serial_version_attribute(timestamp: NaiveDateTime) -> AttributeSpec {
    AttributeSpec {
        encapsulation: "private static final".to_string(),
        ..AttributeSpec::new(SERIAL_VERSION_UID, "long")
            .with_value(serial_version_literal(timestamp))
    }
}

/// `long` literal derived from a timestamp.
///
/// Year, month counted from zero (January = 0), day of the week
/// (Sunday = 0), hour and minute, joined by underscores and suffixed with
/// `L`. Tuesday 2024-03-05 09:07 gives `2024_02_02_09_07L`.
pub fn serial_version_literal(timestamp: NaiveDateTime) -> String {
    format!(
        "{}_{:02}_{:02}_{:02}_{:02}L",
        timestamp.year(),
        timestamp.month0(),
        timestamp.weekday().num_days_from_sunday(),
        timestamp.hour(),
        timestamp.minute()
    )
}

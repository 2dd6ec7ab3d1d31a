//! Type-name and identifier utilities shared by every formatter.
//!
//! An *artifact* is a fully-qualified Java type name such as
//! `java.util.List<com.example.Item>`. Only the outer type of a generic
//! artifact is ever imported or printed, so most helpers strip the generic
//! arguments first.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `a.b.List<a.b.Item>` | [`strip_generic`] | `a.b.List` |
//! | `a.b.List<a.b.Item>` | [`package_of`] | `a.b` |
//! | `a.b.List<a.b.Item>` | [`simple_type_of`] | `List` |
//! | `age` | [`capitalize`] | `Age` |

/// Package separator in fully-qualified names.
pub const SEPARATOR: char = '.';

/// Remove the first balanced `<...>` span from an artifact.
///
/// Nested arguments inside that span are removed with it, so
/// `java.util.Map<String, java.util.List<Integer>>` becomes `java.util.Map`.
/// An unclosed `<` drops everything from the bracket onwards.
///
/// # Examples
///
/// ```
/// use classforge_core::naming::strip_generic;
///
/// assert_eq!(strip_generic("java.util.List<com.example.Item>"), "java.util.List");
/// assert_eq!(strip_generic("int"), "int");
/// ```
pub fn strip_generic(artifact: &str) -> String {
    let Some(start) = artifact.find('<') else {
        return artifact.to_string();
    };

    let mut depth = 0usize;
    for (offset, c) in artifact[start..].char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + c.len_utf8();
                    return format!("{}{}", &artifact[..start], &artifact[end..]);
                }
            }
            _ => {}
        }
    }

    artifact[..start].to_string()
}

/// Whether the artifact (generics aside) carries a package prefix.
pub fn is_qualified(artifact: &str) -> bool {
    strip_generic(artifact).contains(SEPARATOR)
}

/// Package portion of an artifact, or an empty string for unqualified names.
///
/// # Examples
///
/// ```
/// use classforge_core::naming::package_of;
///
/// assert_eq!(package_of("java.time.LocalDate"), "java.time");
/// assert_eq!(package_of("a.b.List<a.b.Item>"), "a.b");
/// assert_eq!(package_of("int"), "");
/// ```
pub fn package_of(artifact: &str) -> String {
    let outer = strip_generic(artifact);
    match outer.rfind(SEPARATOR) {
        Some(index) => outer[..index].to_string(),
        None => String::new(),
    }
}

/// Simple type name of an artifact, as printed in declarations.
///
/// # Examples
///
/// ```
/// use classforge_core::naming::simple_type_of;
///
/// assert_eq!(simple_type_of("java.time.LocalDate"), "LocalDate");
/// assert_eq!(simple_type_of("a.b.List<a.b.Item>"), "List");
/// assert_eq!(simple_type_of("boolean"), "boolean");
/// ```
pub fn simple_type_of(artifact: &str) -> String {
    let outer = strip_generic(artifact);
    match outer.rfind(SEPARATOR) {
        Some(index) => outer[index + 1..].to_string(),
        None => outer,
    }
}

/// Capitalize the first letter of a string, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use classforge_core::naming::capitalize;
///
/// assert_eq!(capitalize("age"), "Age");
/// assert_eq!(capitalize("ID"), "ID");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

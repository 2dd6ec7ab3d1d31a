//! Javadoc comment blocks.

/// Marker separating paragraphs in documentation text.
pub const LINE_BREAK: &str = "<br>";

/// Render a `/** ... */` block from `<br>`-delimited text.
///
/// Returns an empty string when there is no text, so callers can skip the
/// block entirely. Paragraph text is kept as written apart from trailing
/// whitespace, so indented lines stay indented. With an author, an empty comment line and an `@author`
/// tag close the block.
pub fn format_javadoc(text: Option<&str>, indent: &str, author: Option<&str>) -> String {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return String::new();
    };

    let mut lines = vec![format!("{indent}/**")];
    lines.extend(text.split(LINE_BREAK).map(|line| comment_line(indent, line)));

    if let Some(author) = author.filter(|author| !author.is_empty()) {
        lines.push(format!("{indent} *"));
        lines.push(format!("{indent} * @author {author}"));
    }

    lines.push(format!("{indent} */"));
    lines.join("\n")
}

fn comment_line(indent: &str, line: &str) -> String {
    let line = line.trim_end();
    if line.is_empty() {
        format!("{indent} *")
    } else {
        format!("{indent} * {line}")
    }
}

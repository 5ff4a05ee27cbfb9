//! Header comment parser: a single pass over the first `/* ... */` block.
//!
//! Recognized lines, after stripping leading/trailing spaces and `*`:
//!
//! - `name: <text>` sets the display name
//! - `description:` starts the description; every later line in the comment
//!   belongs to it, blank lines included
//!
//! Anything else before `description:` is ignored.

use regex::Regex;
use std::sync::LazyLock;

// Shortest match, spanning lines; only the first block counts.
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*([\s\S]*?)\*/").unwrap());

/// Metadata read from a header comment.
#[derive(Debug, Default, PartialEq)]
pub struct Header {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Split `source` into its header metadata and the remaining body.
///
/// Without a block comment, the header is empty and the body is `source`
/// unchanged. Otherwise every occurrence of the matched comment text is
/// removed and leading whitespace trimmed from what remains.
pub fn split_header(source: &str) -> (Header, String) {
    let Some(caps) = RE_HEADER.captures(source) else {
        return (Header::default(), source.to_string());
    };

    let header = parse_header(&caps[1]);
    let body = source.replace(&caps[0], "").trim_start().to_string();
    (header, body)
}

fn parse_header(inner: &str) -> Header {
    let mut name = None;
    let mut in_description = false;
    let mut description: Vec<&str> = Vec::new();

    for line in inner.split('\n') {
        let line = line.trim_matches(|c: char| c == ' ' || c == '*');
        if let Some(rest) = line.strip_prefix("name:") {
            name = Some(rest.trim().to_string());
        } else if line.starts_with("description:") {
            in_description = true;
        } else if in_description {
            description.push(line);
        }
    }

    Header {
        name,
        description: trim_blank_edges(&description),
    }
}

/// Drop leading and trailing empty lines, keep interior ones.
fn trim_blank_edges(lines: &[&str]) -> Option<String> {
    let start = lines.iter().position(|l| !l.is_empty())?;
    let end = lines.iter().rposition(|l| !l.is_empty())?;
    Some(lines[start..=end].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_comment() {
        let src = "#include <cstdio>\nint main() {}\n";
        let (header, body) = split_header(src);
        assert_eq!(header, Header::default());
        assert_eq!(body, src);
    }

    #[test]
    fn name_and_description() {
        let src = "/* name: Sort\n * description:\n * Bubble sort.\n */\nvoid f(){}";
        let (header, body) = split_header(src);
        assert_eq!(header.name.as_deref(), Some("Sort"));
        assert_eq!(header.description.as_deref(), Some("Bubble sort."));
        assert_eq!(body, "void f(){}");
    }

    #[test]
    fn interior_blank_lines_kept() {
        let src = "/*\n * name: X\n * description:\n *\n * A\n *\n * B\n *\n */\nint x;\n";
        let (header, _) = split_header(src);
        assert_eq!(header.name.as_deref(), Some("X"));
        assert_eq!(header.description.as_deref(), Some("A\n\nB"));
    }

    #[test]
    fn blank_description_is_none() {
        let src = "/*\n * name: X\n * description:\n *\n *\n */\nint x;";
        let (header, body) = split_header(src);
        assert_eq!(header.description, None);
        assert_eq!(body, "int x;");
    }

    #[test]
    fn text_on_description_line_is_ignored() {
        let src = "/* description: inline\n * next line\n */";
        let (header, _) = split_header(src);
        assert_eq!(header.description.as_deref(), Some("next line"));
    }

    #[test]
    fn lines_before_description_are_ignored() {
        let src = "/*\n * Author: someone\n * name: Dinic\n * description:\n * Max flow.\n */";
        let (header, _) = split_header(src);
        assert_eq!(header.name.as_deref(), Some("Dinic"));
        assert_eq!(header.description.as_deref(), Some("Max flow."));
    }

    #[test]
    fn name_inside_description_still_sets_name() {
        let src = "/*\n * description:\n * first\n * name: Late\n * second\n */";
        let (header, _) = split_header(src);
        assert_eq!(header.name.as_deref(), Some("Late"));
        assert_eq!(header.description.as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn only_first_comment_is_a_header() {
        let src = "/* name: First */\nint a;\n/* keep me */\nint b;\n";
        let (header, body) = split_header(src);
        assert_eq!(header.name.as_deref(), Some("First"));
        assert_eq!(body, "int a;\n/* keep me */\nint b;\n");
    }

    #[test]
    fn header_need_not_lead_the_file() {
        let src = "// line comment\n/* name: Mid */\nint a;";
        let (header, body) = split_header(src);
        assert_eq!(header.name.as_deref(), Some("Mid"));
        assert_eq!(body, "// line comment\n\nint a;");
    }

    #[test]
    fn unterminated_comment_is_no_header() {
        let src = "/* name: Broken\nint a;\n";
        let (header, body) = split_header(src);
        assert_eq!(header, Header::default());
        assert_eq!(body, src);
    }

    #[test]
    fn header_text_removed_everywhere() {
        let src = "/* dup */\nint a;\n/* dup */\n";
        let (_, body) = split_header(src);
        assert!(!body.contains("/* dup */"));
        assert_eq!(body, "int a;\n\n");
    }

    #[test]
    fn tab_indented_lines_are_not_recognized() {
        // Only spaces and `*` are stripped
        let src = "/*\n\tname: Tabbed\n */";
        let (header, _) = split_header(src);
        assert_eq!(header.name, None);
    }

    #[test]
    fn name_is_trimmed() {
        let src = "/* name:   Heap Sort   \n */";
        let (header, _) = split_header(src);
        assert_eq!(header.name.as_deref(), Some("Heap Sort"));
    }

    #[test]
    fn leading_whitespace_of_description_lines_after_star_is_stripped() {
        let src = "/*\n * description:\n *   indented\n */";
        let (header, _) = split_header(src);
        assert_eq!(header.description.as_deref(), Some("indented"));
    }
}

//! Markdown renderer.
//!
//! Layout, every unit followed by exactly one blank line:
//!
//! ```text
//! # <title>
//! ## <directory label, or "root directory">
//! ### <display name>
//! <description, when present>
//! ```<c|cpp> ... ```
//! ```

use crate::model::{DirectoryGroup, ParsedFile};

/// Default H1 title.
pub const DEFAULT_TITLE: &str = "Algorithm Templates";

/// H2 text for files directly under the scan root.
pub const ROOT_LABEL: &str = "root directory";

/// Render all groups into one document.
///
/// Returns `None` when there is nothing to render, so a lone title never
/// counts as output.
pub fn render_document(title: &str, groups: &[DirectoryGroup<ParsedFile>]) -> Option<String> {
    if groups.iter().all(|group| group.files.is_empty()) {
        return None;
    }

    let mut output = format!("# {}\n\n", title);
    for group in groups.iter().filter(|group| !group.files.is_empty()) {
        let label = if group.label.is_empty() {
            ROOT_LABEL
        } else {
            group.label.as_str()
        };
        output.push_str(&format!("## {}\n\n", label));

        for file in &group.files {
            render_file(&mut output, file);
        }
    }
    Some(output)
}

fn render_file(output: &mut String, file: &ParsedFile) {
    output.push_str(&format!("### {}\n\n", file.display_name));

    if let Some(ref desc) = file.description {
        output.push_str(desc);
        output.push_str("\n\n");
    }

    output.push_str(&format!(
        "```{}\n{}\n```\n\n",
        file.lang.tag(),
        file.body.trim_end()
    ));
}

//! Plain-text course export.
//!
//! The `p` key renders the whole course to a text file, the terminal
//! equivalent of the page's print dialog.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::content::{Block, Course};

/// Default export file name, written to the working directory.
pub const EXPORT_FILE: &str = "course-export.txt";

/// Renders the whole course as plain text.
pub fn render_text(course: &Course) -> String {
    let mut out = String::new();
    out.push_str(&course.title);
    out.push('\n');
    out.push_str(&"=".repeat(course.title.chars().count()));
    out.push_str("\n\n");

    for (index, section) in course.sections.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, section.title));
        out.push_str(&"-".repeat(section.title.chars().count() + 3));
        out.push('\n');

        for block in &section.blocks {
            out.push('\n');
            match block {
                Block::Text { body } => {
                    out.push_str(body);
                    out.push('\n');
                }
                Block::Code { lang, source } => {
                    if lang.is_empty() {
                        out.push_str("```\n");
                    } else {
                        out.push_str(&format!("```{}\n", lang));
                    }
                    out.push_str(source);
                    out.push_str("\n```\n");
                }
                Block::Card { title, body } => {
                    out.push_str(&format!("[{}] {}\n", title, body));
                }
                Block::Tabs { group, tabs } => {
                    out.push_str(&format!("{}:\n", group.name()));
                    for tab in tabs {
                        out.push_str(&format!("  * {}: {}\n", tab.label, tab.body));
                    }
                }
                Block::Layer { title, detail } => {
                    out.push_str(&format!("+ {}\n  {}\n", title, detail));
                }
                Block::Checklist { items } => {
                    for item in items {
                        out.push_str(&format!("[ ] {}\n", item));
                    }
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Writes the plain-text rendering to `path`.
pub fn export_to(course: &Course, path: impl AsRef<Path>) -> io::Result<()> {
    fs::write(path, render_text(course))
}

/// Writes the export to [`EXPORT_FILE`] and logs the destination.
pub fn export(course: &Course) -> io::Result<&'static str> {
    export_to(course, EXPORT_FILE)?;
    info!("course exported to {}", EXPORT_FILE);
    Ok(EXPORT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_text_covers_all_block_kinds() {
        let text = render_text(&Course::sample());

        assert!(text.contains("Jakarta EE Fundamentals"));
        assert!(text.contains("1. Introduction"));
        assert!(text.contains("```java"));
        assert!(text.contains("+ Web tier"));
        assert!(text.contains("[ ] Name the three application tiers"));
        assert!(text.contains("Features:"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        export_to(&Course::sample(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Jakarta EE Fundamentals"));
    }
}

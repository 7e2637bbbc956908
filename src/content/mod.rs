//! Course document model.
//!
//! A [`Course`] is an ordered list of [`Section`]s, each built from content
//! [`Block`]s. Documents are authored in TOML and loaded through
//! [`Course::from_path`]; a compiled-in sample is available through
//! [`Course::sample`] for the no-argument case and for tests.

mod loader;
mod sample;

pub use loader::ContentError;

use serde::{Deserialize, Serialize};

/// A complete course document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course title, shown in the header bar.
    pub title: String,
    /// Ordered sections. Validated non-empty with unique ids.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One navigable section of the course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier, referenced by navigation and persisted progress.
    pub id: String,
    /// Display title for the navigation sidebar.
    pub title: String,
    /// Content blocks in authored order.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Which mutually-exclusive tab group a `Tabs` block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabGroupKind {
    Feature,
    Example,
}

impl TabGroupKind {
    /// Display name used in tab row titles.
    pub fn name(&self) -> &'static str {
        match self {
            TabGroupKind::Feature => "Features",
            TabGroupKind::Example => "Examples",
        }
    }
}

/// One (tab, panel) pair inside a tab group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabPanel {
    /// Discriminator value, unique within the group.
    pub key: String,
    /// Tab label.
    pub label: String,
    /// Panel body shown while the tab is active.
    pub body: String,
}

/// A content block inside a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Plain prose paragraph.
    Text { body: String },
    /// Code listing. Selectable for copying from the terminal.
    Code {
        #[serde(default)]
        lang: String,
        source: String,
    },
    /// Highlight card. Subject to the scroll-into-view reveal effect.
    Card { title: String, body: String },
    /// Tab group: exactly one panel visible at a time.
    Tabs {
        group: TabGroupKind,
        tabs: Vec<TabPanel>,
    },
    /// Expandable layer. At most one layer is expanded per section.
    Layer { title: String, detail: String },
    /// Self-assessment checklist.
    Checklist { items: Vec<String> },
}

impl Section {
    /// Full text content of the section, used by the search filter.
    /// Includes all panel bodies and layer details, matching a DOM
    /// `textContent` read over the whole section.
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        for block in &self.blocks {
            out.push('\n');
            match block {
                Block::Text { body } => out.push_str(body),
                Block::Code { source, .. } => out.push_str(source),
                Block::Card { title, body } => {
                    out.push_str(title);
                    out.push('\n');
                    out.push_str(body);
                }
                Block::Tabs { tabs, .. } => {
                    for tab in tabs {
                        out.push_str(&tab.label);
                        out.push('\n');
                        out.push_str(&tab.body);
                        out.push('\n');
                    }
                }
                Block::Layer { title, detail } => {
                    out.push_str(title);
                    out.push('\n');
                    out.push_str(detail);
                }
                Block::Checklist { items } => {
                    for item in items {
                        out.push_str(item);
                        out.push('\n');
                    }
                }
            }
        }
        out
    }
}

impl Course {
    /// Position of a section by id, if present.
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_includes_nested_content() {
        let section = Section {
            id: "s".to_string(),
            title: "Storage".to_string(),
            blocks: vec![
                Block::Text {
                    body: "Database layer".to_string(),
                },
                Block::Tabs {
                    group: TabGroupKind::Feature,
                    tabs: vec![TabPanel {
                        key: "jpa".to_string(),
                        label: "JPA".to_string(),
                        body: "entity mapping".to_string(),
                    }],
                },
                Block::Layer {
                    title: "Web tier".to_string(),
                    detail: "servlets".to_string(),
                },
            ],
        };

        let text = section.full_text();
        assert!(text.contains("Storage"));
        assert!(text.contains("Database layer"));
        assert!(text.contains("entity mapping"));
        assert!(text.contains("servlets"));
    }

    #[test]
    fn test_section_index() {
        let course = Course::sample();
        assert_eq!(course.section_index(&course.sections[0].id), Some(0));
        assert_eq!(course.section_index("no-such-section"), None);
    }
}

//! TOML course loading and validation.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use super::{Block, Course};

/// Errors produced while loading or validating a course document.
#[derive(Debug)]
pub enum ContentError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid TOML for the course schema.
    Parse(toml::de::Error),
    /// The document parsed but violates a structural rule.
    Invalid(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "cannot read course file: {}", e),
            ContentError::Parse(e) => write!(f, "cannot parse course file: {}", e),
            ContentError::Invalid(msg) => write!(f, "invalid course: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Io(e) => Some(e),
            ContentError::Parse(e) => Some(e),
            ContentError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ContentError {
    fn from(e: std::io::Error) -> Self {
        ContentError::Io(e)
    }
}

impl From<toml::de::Error> for ContentError {
    fn from(e: toml::de::Error) -> Self {
        ContentError::Parse(e)
    }
}

impl Course {
    /// Loads and validates a course document from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Course, ContentError> {
        let raw = fs::read_to_string(path)?;
        Course::from_toml(&raw)
    }

    /// Parses and validates a course document from TOML text.
    pub fn from_toml(raw: &str) -> Result<Course, ContentError> {
        let course: Course = toml::from_str(raw)?;
        course.validate()?;
        Ok(course)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.sections.is_empty() {
            return Err(ContentError::Invalid(
                "course has no sections".to_string(),
            ));
        }

        let mut seen_ids = HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() {
                return Err(ContentError::Invalid(format!(
                    "section '{}' has an empty id",
                    section.title
                )));
            }
            if !seen_ids.insert(section.id.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }

            for block in &section.blocks {
                if let Block::Tabs { tabs, group } = block {
                    if tabs.is_empty() {
                        return Err(ContentError::Invalid(format!(
                            "section '{}' has an empty {} tab group",
                            section.id,
                            group.name()
                        )));
                    }
                    let mut seen_keys = HashSet::new();
                    for tab in tabs {
                        if !seen_keys.insert(tab.key.as_str()) {
                            return Err(ContentError::Invalid(format!(
                                "duplicate tab key '{}' in section '{}'",
                                tab.key, section.id
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_course() {
        let course = Course::from_toml(
            r#"
            title = "Test course"

            [[sections]]
            id = "intro"
            title = "Introduction"

            [[sections.blocks]]
            type = "text"
            body = "Welcome."
            "#,
        )
        .unwrap();

        assert_eq!(course.title, "Test course");
        assert_eq!(course.sections.len(), 1);
        assert_eq!(course.sections[0].id, "intro");
    }

    #[test]
    fn test_parse_tabs_and_layers() {
        let course = Course::from_toml(
            r#"
            title = "Test"

            [[sections]]
            id = "arch"
            title = "Architecture"

            [[sections.blocks]]
            type = "tabs"
            group = "feature"

            [[sections.blocks.tabs]]
            key = "jpa"
            label = "JPA"
            body = "Persistence API."

            [[sections.blocks.tabs]]
            key = "cdi"
            label = "CDI"
            body = "Dependency injection."

            [[sections.blocks]]
            type = "layer"
            title = "Web tier"
            detail = "Servlets and JSF."
            "#,
        )
        .unwrap();

        match &course.sections[0].blocks[0] {
            Block::Tabs { tabs, .. } => assert_eq!(tabs.len(), 2),
            other => panic!("expected Tabs, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_course() {
        let err = Course::from_toml(r#"title = "Empty""#).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn test_rejects_duplicate_section_ids() {
        let err = Course::from_toml(
            r#"
            title = "Test"

            [[sections]]
            id = "intro"
            title = "One"

            [[sections]]
            id = "intro"
            title = "Two"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn test_rejects_duplicate_tab_keys() {
        let err = Course::from_toml(
            r#"
            title = "Test"

            [[sections]]
            id = "intro"
            title = "One"

            [[sections.blocks]]
            type = "tabs"
            group = "example"

            [[sections.blocks.tabs]]
            key = "a"
            label = "A"
            body = "a"

            [[sections.blocks.tabs]]
            key = "a"
            label = "A again"
            body = "a"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));
    }

    #[test]
    fn test_sample_course_is_valid() {
        Course::sample().validate().unwrap();
    }

    #[test]
    fn test_demo_course_file_parses() {
        let course =
            Course::from_toml(include_str!("../../demos/jakarta-ee.course.toml")).unwrap();
        assert_eq!(course.sections.len(), 5);
    }
}

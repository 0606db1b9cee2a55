//! Class creation form
//!
//! A [`ClassDraft`] holds the form values while a class is being composed.
//! Validation collects every field error at once so the form can show them
//! together.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::ClassType;
use crate::utils::is_valid_url;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassDraft {
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub duration_minutes: u32,
    pub featured_image: String,
    pub class_type: ClassType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every field that failed validation, in form order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for `field`, if it failed validation
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

impl ClassDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection-surface hook for the image picker
    pub fn set_featured_image(&mut self, url: impl Into<String>) {
        self.featured_image = url.into();
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        *self != Self::default()
    }

    /// Check every field, returning all failures
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError {
                field: "title",
                message: "Title is required",
            });
        }
        if self.instructor.trim().is_empty() {
            errors.push(FieldError {
                field: "instructor",
                message: "Instructor is required",
            });
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError {
                field: "description",
                message: "Description is required",
            });
        }
        if self.duration_minutes == 0 {
            errors.push(FieldError {
                field: "duration",
                message: "Duration must be greater than zero",
            });
        }
        if !self.featured_image.is_empty() && !is_valid_url(&self.featured_image) {
            errors.push(FieldError {
                field: "featuredImage",
                message: "Featured image must be an http(s) URL",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = ClassDraft::new().validate().unwrap_err();
        assert_eq!(errors.message_for("title"), Some("Title is required"));
        assert_eq!(errors.message_for("instructor"), Some("Instructor is required"));
        assert_eq!(errors.message_for("description"), Some("Description is required"));
        assert!(errors.message_for("duration").is_some());
        assert!(errors.message_for("featuredImage").is_none());
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let draft = ClassDraft {
            title: "   ".into(),
            instructor: "Ana".into(),
            description: "Knife skills".into(),
            duration_minutes: 30,
            ..ClassDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.to_string(), "Title is required");
    }

    #[test]
    fn selected_image_must_be_http() {
        let mut draft = ClassDraft {
            title: "Bread".into(),
            instructor: "Sam".into(),
            description: "Sourdough basics".into(),
            duration_minutes: 45,
            ..ClassDraft::default()
        };
        assert!(draft.is_dirty());
        assert!(draft.validate().is_ok());

        draft.set_featured_image("javascript:alert(1)");
        assert!(draft.validate().is_err());

        draft.set_featured_image("https://images.unsplash.com/photo-1");
        assert!(draft.validate().is_ok());
    }
}

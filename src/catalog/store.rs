//! Insertion-ordered class store

use chrono::Utc;

use super::draft::ClassDraft;
use super::errors::{CatalogError, CatalogResult};
use super::types::{ClassId, ClassRecord, ClassType};

/// In-memory class catalog
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug, Clone)]
pub struct ClassCatalog {
    records: Vec<ClassRecord>,
    next_id: ClassId,
}

impl Default for ClassCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Catalog pre-filled with the starter classes shown on first launch
    #[must_use]
    pub fn with_sample_classes() -> Self {
        let mut catalog = Self::new();
        for draft in sample_drafts() {
            // Sample drafts are static and valid
            if let Err(e) = catalog.create(draft) {
                log::warn!("Skipping invalid sample class: {e}");
            }
        }
        catalog
    }

    /// All classes, oldest first
    #[must_use]
    pub fn list(&self) -> &[ClassRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate `draft` and store it as a new class
    ///
    /// # Errors
    ///
    /// [`CatalogError::Validation`] with every failing field.
    pub fn create(&mut self, draft: ClassDraft) -> CatalogResult<ClassRecord> {
        draft.validate()?;

        let record = ClassRecord {
            id: self.next_id,
            title: draft.title.trim().to_string(),
            instructor: draft.instructor.trim().to_string(),
            description: draft.description.trim().to_string(),
            duration_minutes: draft.duration_minutes,
            featured_image: draft.featured_image,
            class_type: draft.class_type,
            created_at: Utc::now(),
        };
        self.next_id += 1;

        log::info!("Created class {} '{}'", record.id, record.title);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Look up one class for preview
    pub fn get(&self, id: ClassId) -> CatalogResult<&ClassRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Remove a class, returning it
    pub fn delete(&mut self, id: ClassId) -> CatalogResult<ClassRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        let record = self.records.remove(index);
        log::info!("Deleted class {} '{}'", record.id, record.title);
        Ok(record)
    }
}

fn sample_drafts() -> Vec<ClassDraft> {
    vec![
        ClassDraft {
            title: "Knife Skills 101".into(),
            instructor: "Ana Ortiz".into(),
            description: "Dicing, mincing and julienning without losing a finger.".into(),
            duration_minutes: 30,
            featured_image: "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136".into(),
            class_type: ClassType::OnDemand,
        },
        ClassDraft {
            title: "Weeknight Pasta".into(),
            instructor: "Marco Bellini".into(),
            description: "Three sauces you can make while the water boils.".into(),
            duration_minutes: 45,
            featured_image: "https://images.unsplash.com/photo-1551183053-bf91a1d81141".into(),
            class_type: ClassType::Live,
        },
        ClassDraft {
            title: "Sourdough From Scratch".into(),
            instructor: "Priya Shah".into(),
            description: "Feeding a starter, shaping and baking a first loaf.".into(),
            duration_minutes: 90,
            featured_image: "https://images.unsplash.com/photo-1549931319-a545dcf3bc73".into(),
            class_type: ClassType::OnDemand,
        },
    ]
}

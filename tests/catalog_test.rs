//! Tests for the in-memory class catalog and its draft validation

use class_catalog::catalog::{CatalogError, ClassCatalog, ClassDraft, ClassType};

fn draft(title: &str) -> ClassDraft {
    ClassDraft {
        title: title.into(),
        instructor: "Ana Ortiz".into(),
        description: "Hands-on practice".into(),
        duration_minutes: 25,
        ..ClassDraft::default()
    }
}

#[test]
fn test_created_record_keeps_picked_image() {
    let mut catalog = ClassCatalog::new();
    let mut form = draft("Dumplings");
    form.class_type = ClassType::Live;
    form.set_featured_image("https://images.unsplash.com/photo-dumplings");

    let record = catalog.create(form).unwrap();

    assert_eq!(record.featured_image, "https://images.unsplash.com/photo-dumplings");
    assert_eq!(catalog.get(record.id).unwrap(), &record);
    assert_eq!(record.card_line(), "#1 Dumplings with Ana Ortiz (25 min, Live)");
    assert!(record.summary().contains("Image:       https://images.unsplash.com/photo-dumplings"));
}

#[test]
fn test_summary_marks_missing_image() {
    let mut catalog = ClassCatalog::new();
    let record = catalog.create(draft("Tea")).unwrap();
    assert!(record.summary().ends_with("Image:       (none)"));
}

#[test]
fn test_validation_error_lists_every_field() {
    let mut catalog = ClassCatalog::new();
    let err = catalog.create(ClassDraft::new()).unwrap_err();

    let CatalogError::Validation(errors) = &err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(errors.0.len(), 4);
    assert_eq!(
        err.to_string(),
        "Invalid class: Title is required; Instructor is required; \
         Description is required; Duration must be greater than zero"
    );
}

#[test]
fn test_validation_errors_are_the_error_source() {
    use std::error::Error;

    let mut catalog = ClassCatalog::new();
    let mut form = draft("Bread");
    form.instructor = "  ".into();
    let err = catalog.create(form).unwrap_err();

    let source = err.source().expect("validation errors are chained");
    assert_eq!(source.to_string(), "Instructor is required");
}

#[test]
fn test_record_round_trips_through_json() {
    let mut catalog = ClassCatalog::new();
    let record = catalog.create(draft("Ramen")).unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let parsed: class_catalog::catalog::ClassRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn test_record_serializes_camel_case() {
    let mut catalog = ClassCatalog::new();
    let record = catalog.create(draft("Tacos")).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["duration"], 25);
    assert!(json.get("durationMinutes").is_none());
    assert_eq!(json["classType"], "on-demand");
    assert_eq!(json["featuredImage"], "");
}

#[test]
fn test_class_type_parsing() {
    assert_eq!("live".parse::<ClassType>().unwrap(), ClassType::Live);
    assert_eq!(" On-Demand ".parse::<ClassType>().unwrap(), ClassType::OnDemand);
    assert!("weekly".parse::<ClassType>().is_err());
    assert_eq!(ClassType::default(), ClassType::OnDemand);
}

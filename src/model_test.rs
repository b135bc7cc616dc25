use serde_json::json;

use super::*;

#[test]
fn enums_use_snake_case() {
    assert_eq!(serde_json::to_value(ReviewStatus::InReview).unwrap(), json!("in_review"));
    assert_eq!(serde_json::to_value(ReviewStatus::NeedsRevision).unwrap(), json!("needs_revision"));
    assert_eq!(serde_json::to_value(UserRole::Admin).unwrap(), json!("admin"));
    let kind: AnnotationType = serde_json::from_value(json!("measurement")).unwrap();
    assert_eq!(kind, AnnotationType::Measurement);
}

#[test]
fn only_approved_and_rejected_are_terminal() {
    assert!(ReviewStatus::Approved.is_terminal());
    assert!(ReviewStatus::Rejected.is_terminal());
    assert!(!ReviewStatus::Draft.is_terminal());
    assert!(!ReviewStatus::InReview.is_terminal());
    assert!(!ReviewStatus::NeedsRevision.is_terminal());
}

#[test]
fn position_page_defaults_to_first() {
    let position: Position = serde_json::from_value(json!({"x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0})).unwrap();
    assert_eq!(position.page, 1);
}

#[test]
fn annotation_kind_serializes_as_type() {
    let store = crate::fixtures::seed();
    let value = serde_json::to_value(&store.annotations[0]).unwrap();
    assert_eq!(value["type"], "comment");
    assert!(value.get("kind").is_none());
    assert_eq!(value["created_at"], "2024-11-16T10:30:00Z");
}

#[test]
fn open_workflow_serializes_null_completion() {
    let store = crate::fixtures::seed();
    let value = serde_json::to_value(&store.workflows[0]).unwrap();
    assert_eq!(value["completed_at"], serde_json::Value::Null);
    assert_eq!(value["due_date"], "2024-11-30T00:00:00Z");

    let back: ReviewWorkflow = serde_json::from_value(value).unwrap();
    assert_eq!(back, store.workflows[0]);
}

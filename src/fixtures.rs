//! Sample data the mock API starts with.

use time::macros::datetime;

use crate::model::{
    Annotation, AnnotationReply, AnnotationType, Drawing, Position, ProjectRecord, ReviewStatus, ReviewWorkflow, User,
    UserRole, Version,
};
use crate::state::ReviewStore;

fn user(id: &str, name: &str, email: &str, role: UserRole, avatar: &str) -> User {
    User { id: id.into(), name: name.into(), email: email.into(), role, avatar: Some(avatar.into()) }
}

fn position(x: f64, y: f64, width: f64, height: f64) -> Position {
    Position { x, y, width, height, page: 1 }
}

/// Build the seeded store: three users, two projects, two drawings, three
/// annotations on the current version of `draw-1`, and one open workflow.
#[must_use]
pub fn seed() -> ReviewStore {
    let alex = user("user-1", "Alex Chen", "alex.chen@example.com", UserRole::Engineer, "AC");
    let jordan = user("user-2", "Jordan Smith", "jordan.smith@example.com", UserRole::Reviewer, "JS");
    let sam = user("user-3", "Sam Rivera", "sam.rivera@example.com", UserRole::Admin, "SR");

    let projects = vec![
        ProjectRecord {
            id: "proj-1".into(),
            name: "Manhattan Bridge Renovation".into(),
            description: Some("Structural upgrades and modernization".into()),
            team_member_ids: vec![alex.id.clone(), jordan.id.clone(), sam.id.clone()],
            created_at: datetime!(2024-01-15 0:00 UTC),
        },
        ProjectRecord {
            id: "proj-2".into(),
            name: "Hudson Yards Tower C".into(),
            description: Some("Commercial high-rise development".into()),
            team_member_ids: vec![alex.id.clone(), jordan.id.clone()],
            created_at: datetime!(2024-02-01 0:00 UTC),
        },
    ];

    let version_1 = Version {
        id: "ver-1-1".into(),
        version_number: 1,
        created_at: datetime!(2024-10-01 0:00 UTC),
        created_by: alex.clone(),
        file_url: "/api/files/drawing-1-v1.pdf".into(),
        changes_summary: None,
        status: ReviewStatus::Approved,
    };
    let version_2 = Version {
        id: "ver-1-2".into(),
        version_number: 2,
        created_at: datetime!(2024-11-15 0:00 UTC),
        created_by: alex.clone(),
        file_url: "/api/files/drawing-1-v2.pdf".into(),
        changes_summary: Some("Updated load calculations and beam specifications".into()),
        status: ReviewStatus::InReview,
    };

    let drawings = vec![
        Drawing {
            id: "draw-1".into(),
            title: "Foundation Plan - Level B2".into(),
            description: Some("Detailed foundation and basement level structural plan".into()),
            project_id: "proj-1".into(),
            current_version: version_2.clone(),
            versions: vec![version_1.clone(), version_2],
            created_at: datetime!(2024-10-01 0:00 UTC),
            updated_at: datetime!(2024-11-15 0:00 UTC),
        },
        Drawing {
            id: "draw-2".into(),
            title: "Structural Framing - Level 15".into(),
            description: Some("Steel framing and column layout".into()),
            project_id: "proj-1".into(),
            current_version: version_1.clone(),
            versions: vec![version_1],
            created_at: datetime!(2024-10-05 0:00 UTC),
            updated_at: datetime!(2024-10-05 0:00 UTC),
        },
    ];

    let annotations = vec![
        Annotation {
            id: "ann-1".into(),
            drawing_id: "draw-1".into(),
            version_id: "ver-1-2".into(),
            kind: AnnotationType::Comment,
            author: jordan.clone(),
            content: "Please verify the rebar spacing in grid A-3. Seems tighter than spec.".into(),
            position: position(450.0, 320.0, 200.0, 100.0),
            created_at: datetime!(2024-11-16 10:30 UTC),
            updated_at: datetime!(2024-11-16 10:30 UTC),
            resolved: false,
            replies: vec![AnnotationReply {
                id: "reply-1".into(),
                author: alex.clone(),
                content: "Good catch! Will update to match detail 3/A2.1".into(),
                created_at: datetime!(2024-11-16 14:15 UTC),
            }],
        },
        Annotation {
            id: "ann-2".into(),
            drawing_id: "draw-1".into(),
            version_id: "ver-1-2".into(),
            kind: AnnotationType::Measurement,
            author: alex.clone(),
            content: "12'-6\" clear height verified".into(),
            position: position(200.0, 150.0, 150.0, 80.0),
            created_at: datetime!(2024-11-15 9:00 UTC),
            updated_at: datetime!(2024-11-15 9:00 UTC),
            resolved: true,
            replies: Vec::new(),
        },
        Annotation {
            id: "ann-3".into(),
            drawing_id: "draw-1".into(),
            version_id: "ver-1-2".into(),
            kind: AnnotationType::Stamp,
            author: jordan.clone(),
            content: "APPROVED".into(),
            position: position(650.0, 100.0, 120.0, 60.0),
            created_at: datetime!(2024-11-17 16:45 UTC),
            updated_at: datetime!(2024-11-17 16:45 UTC),
            resolved: true,
            replies: Vec::new(),
        },
    ];

    let workflows = vec![ReviewWorkflow {
        id: "wf-1".into(),
        drawing_id: "draw-1".into(),
        version_id: "ver-1-2".into(),
        status: ReviewStatus::InReview,
        reviewers: vec![jordan.clone()],
        due_date: Some(datetime!(2024-11-30 0:00 UTC)),
        created_at: datetime!(2024-11-15 0:00 UTC),
        completed_at: None,
    }];

    ReviewStore::new(vec![alex, jordan, sam], projects, drawings, annotations, workflows)
}

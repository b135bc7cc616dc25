#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ToolKind
// =============================================================

#[test]
fn tool_all_variants_distinct() {
    for (i, a) in ToolKind::ALL.iter().enumerate() {
        for (j, b) in ToolKind::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn tool_wire_names_match_serde() {
    for tool in ToolKind::ALL {
        let json = serde_json::to_value(tool).unwrap();
        assert_eq!(json, serde_json::Value::String(tool.as_str().to_owned()));
    }
}

#[test]
fn tool_deserializes_from_api_type() {
    let tool: ToolKind = serde_json::from_str("\"measurement\"").unwrap();
    assert_eq!(tool, ToolKind::Measurement);
}

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_from_corners_forward_drag() {
    let r = Rect::from_corners(Point::new(10.0, 10.0), Point::new(50.0, 30.0));
    assert_eq!(r, Rect { x: 10.0, y: 10.0, width: 40.0, height: 20.0 });
}

#[test]
fn rect_from_corners_is_direction_independent() {
    let expected = Rect { x: 10.0, y: 10.0, width: 40.0, height: 20.0 };
    let a = Point::new(10.0, 10.0);
    let b = Point::new(50.0, 30.0);
    let c = Point::new(10.0, 30.0);
    let d = Point::new(50.0, 10.0);
    assert_eq!(Rect::from_corners(b, a), expected);
    assert_eq!(Rect::from_corners(c, d), expected);
    assert_eq!(Rect::from_corners(d, c), expected);
}

#[test]
fn rect_same_corner_is_empty() {
    let p = Point::new(7.0, 7.0);
    assert!(Rect::from_corners(p, p).is_empty());
}

#[test]
fn rect_with_one_zero_dimension_is_not_empty() {
    let r = Rect::from_corners(Point::new(0.0, 5.0), Point::new(12.0, 5.0));
    assert_eq!(r.height, 0.0);
    assert!(!r.is_empty());
}

#[test]
fn rect_contains_edges_and_interior() {
    let r = Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(!r.contains(Point::new(10.1, 5.0)));
}

// =============================================================
// GestureState
// =============================================================

#[test]
fn gesture_default_is_idle() {
    assert!(GestureState::default().is_idle());
    assert_eq!(GestureState::default().label(), "idle");
}

#[test]
fn gesture_labels() {
    let panning = GestureState::Panning { start_device: Point::default(), start_pan: Point::default() };
    let drawing = GestureState::Drawing {
        start_logical: Point::default(),
        current_rect: Rect::default(),
        page: 1,
        tool: ToolKind::Comment,
    };
    assert_eq!(panning.label(), "panning");
    assert_eq!(drawing.label(), "drawing");
    assert!(!panning.is_idle());
    assert!(!drawing.is_idle());
}

#[test]
fn draft_rect_serializes_tool_as_api_type() {
    let draft = DraftRect { rect: Rect { x: 1.0, y: 2.0, width: 3.0, height: 4.0 }, page: 2, tool: ToolKind::Stamp };
    let json = serde_json::to_value(draft).unwrap();
    assert_eq!(json["tool"], "stamp");
    assert_eq!(json["page"], 2);
    assert_eq!(json["rect"]["width"], 3.0);
}

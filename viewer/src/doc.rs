//! Annotation model: wire types and the in-memory cache for one document.
//!
//! Annotations arrive from the review API as JSON (list on load, single
//! records after create/resolve/reply). The viewer keeps them in
//! `AnnotationStore` in arrival order and filters by page for display. The
//! store is independent of gesture state, so a response may land mid-gesture.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::FIRST_PAGE;
use crate::input::{DraftRect, Rect, ToolKind};

/// Annotation identifier as issued by the API (`ann-1`, `ann-2`, ...).
pub type AnnotationId = String;

/// Failure decoding an annotation payload.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("invalid annotation payload: {0}")]
    Decode(#[from] serde_json::Error),
}

fn first_page() -> u32 {
    FIRST_PAGE
}

/// Where an annotation sits: a logical rectangle on one page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "first_page")]
    pub page: u32,
}

impl Position {
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

impl From<&DraftRect> for Position {
    fn from(draft: &DraftRect) -> Self {
        Self { x: draft.rect.x, y: draft.rect.y, width: draft.rect.width, height: draft.rect.height, page: draft.page }
    }
}

/// The author fields the viewer displays. Other user fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub author: Author,
    pub content: String,
}

/// An annotation as returned by the review API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    pub drawing_id: String,
    pub version_id: String,
    #[serde(rename = "type")]
    pub kind: ToolKind,
    pub author: Author,
    pub content: String,
    pub position: Position,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// Body of the create-annotation request built from a submitted draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAnnotation {
    #[serde(rename = "type")]
    pub kind: ToolKind,
    pub content: String,
    pub position: Position,
}

impl NewAnnotation {
    #[must_use]
    pub fn from_draft(draft: &DraftRect, content: String) -> Self {
        Self { kind: draft.tool, content, position: Position::from(draft) }
    }
}

/// In-memory cache of the annotations on the open drawing version.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
}

impl AnnotationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with a freshly fetched list.
    pub fn load_snapshot(&mut self, annotations: Vec<Annotation>) {
        self.annotations = annotations;
    }

    /// Decode a JSON array from the list endpoint and load it.
    ///
    /// # Errors
    ///
    /// Returns `DocError::Decode` if the payload is not a list of annotations.
    /// The current contents are kept in that case.
    pub fn load_json(&mut self, json: &str) -> Result<usize, DocError> {
        let annotations: Vec<Annotation> = serde_json::from_str(json)?;
        let count = annotations.len();
        self.load_snapshot(annotations);
        Ok(count)
    }

    /// Insert a new annotation or replace the one with the same id in place.
    pub fn upsert(&mut self, annotation: Annotation) {
        if let Some(existing) = self.annotations.iter_mut().find(|a| a.id == annotation.id) {
            *existing = annotation;
        } else {
            self.annotations.push(annotation);
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Annotation> {
        let index = self.annotations.iter().position(|a| a.id == id)?;
        Some(self.annotations.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Annotations on `page`, in arrival order.
    pub fn on_page(&self, page: u32) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(move |a| a.position.page == page)
    }

    /// Topmost annotation on `page` whose rectangle contains `logical`.
    /// Later arrivals are drawn above earlier ones.
    #[must_use]
    pub fn hit(&self, page: u32, logical: Point) -> Option<&Annotation> {
        self.annotations
            .iter()
            .rev()
            .find(|a| a.position.page == page && a.position.rect().contains(logical))
    }

    /// Count of unresolved annotations, shown in the panel header.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.annotations.iter().filter(|a| !a.resolved).count()
    }
}

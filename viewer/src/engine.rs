//! Event dispatcher for the drawing viewer.
//!
//! The host forwards every DOM event and every API result as an [`Event`] to
//! [`EngineCore::dispatch`], which mutates the viewer state in one place and
//! returns the [`Action`]s the host must carry out. Rendering reads a
//! [`ViewSnapshot`] and converts logical rectangles with
//! [`EngineCore::to_device_rect`], so the live preview, the committed draft and
//! the stored annotations all go through the same transform.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::camera::{Point, Viewport};
use crate::consts::{CURSOR_CROSSHAIR, CURSOR_GRAB, CURSOR_GRABBING, FIRST_PAGE};
use crate::doc::{Annotation, AnnotationId, AnnotationStore, NewAnnotation};
use crate::input::{DraftRect, GestureState, Rect, ToolKind};
use crate::ui::{Panel, UiState};

/// Discrete inputs the viewer reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A new drawing or version was opened.
    LoadDocument { page_count: u32 },
    /// The canvas element moved on screen (layout change).
    SetOrigin(Point),
    /// Arm a tool, or disarm with `None`.
    SetTool(Option<ToolKind>),
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    /// The pointer left the canvas. Ends a gesture exactly like `PointerUp`.
    PointerLeave,
    ZoomIn,
    ZoomOut,
    SetZoom(f64),
    PageNext,
    PagePrev,
    SetPage(u32),
    SelectAnnotation(Option<AnnotationId>),
    TogglePanel(Panel),
    /// The user dismissed the content dialog for the pending draft.
    CancelDraft,
    /// The user typed content for the pending draft.
    SubmitDraft { content: String },
    /// List response for the open drawing version.
    AnnotationsLoaded(Vec<Annotation>),
    /// Create / resolve / reply response carrying one annotation.
    AnnotationSaved(Annotation),
    /// Delete response.
    AnnotationRemoved(AnnotationId),
}

/// Actions returned from the dispatcher for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RenderNeeded,
    SetCursor(&'static str),
    /// A draw gesture finished with a non-empty region; open the content dialog.
    DraftCompleted(DraftRect),
    /// Send this to `POST /api/annotations`.
    CreateAnnotation(NewAnnotation),
}

/// Read-only view of the state needed to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub pan: Point,
    pub zoom: f64,
    pub origin: Point,
    pub page: u32,
    pub page_count: u32,
    pub tool: Option<ToolKind>,
    pub gesture: GestureState,
    /// In-progress rectangle, only when it belongs to the current page.
    pub preview: Option<Rect>,
    /// Pending draft, only when it belongs to the current page.
    pub draft: Option<DraftRect>,
    pub selected: Option<AnnotationId>,
    pub cursor_logical: Option<Point>,
}

/// All viewer state. Mutated only through [`EngineCore::dispatch`].
pub struct EngineCore {
    pub doc: AnnotationStore,
    pub viewport: Viewport,
    pub ui: UiState,
    pub gesture: GestureState,
    pub page: u32,
    pub page_count: u32,
    pub cursor_logical: Option<Point>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            doc: AnnotationStore::new(),
            viewport: Viewport::default(),
            ui: UiState::default(),
            gesture: GestureState::Idle,
            page: FIRST_PAGE,
            page_count: FIRST_PAGE,
            cursor_logical: None,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and report what the host should do.
    pub fn dispatch(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::LoadDocument { page_count } => self.load_document(page_count),
            Event::SetOrigin(origin) => {
                self.viewport.origin = origin;
                vec![Action::RenderNeeded]
            }
            Event::SetTool(tool) => self.set_tool(tool),
            Event::PointerDown(device) => self.on_pointer_down(device),
            Event::PointerMove(device) => self.on_pointer_move(device),
            Event::PointerUp => self.end_gesture(),
            Event::PointerLeave => {
                self.cursor_logical = None;
                self.end_gesture()
            }
            Event::ZoomIn => render_if(self.viewport.zoom_in()),
            Event::ZoomOut => render_if(self.viewport.zoom_out()),
            Event::SetZoom(zoom) => {
                let before = self.viewport.zoom();
                self.viewport.set_zoom(zoom);
                render_if(self.viewport.zoom() != before)
            }
            Event::PageNext => render_if(self.set_page(self.page.saturating_add(1))),
            Event::PagePrev => render_if(self.set_page(self.page.saturating_sub(1))),
            Event::SetPage(page) => render_if(self.set_page(page)),
            Event::SelectAnnotation(id) => self.select(id),
            Event::TogglePanel(panel) => {
                self.ui.panels.toggle(panel);
                vec![Action::RenderNeeded]
            }
            Event::CancelDraft => render_if(self.ui.pending_draft.take().is_some()),
            Event::SubmitDraft { content } => self.submit_draft(&content),
            Event::AnnotationsLoaded(annotations) => {
                self.doc.load_snapshot(annotations);
                if self.ui.selected.as_deref().is_some_and(|id| self.doc.get(id).is_none()) {
                    self.ui.selected = None;
                }
                vec![Action::RenderNeeded]
            }
            Event::AnnotationSaved(annotation) => {
                self.doc.upsert(annotation);
                vec![Action::RenderNeeded]
            }
            Event::AnnotationRemoved(id) => {
                let removed = self.doc.remove(&id).is_some();
                if self.ui.selected.as_ref() == Some(&id) {
                    self.ui.selected = None;
                }
                render_if(removed)
            }
        }
    }

    // --- Document / tool ---

    fn load_document(&mut self, page_count: u32) -> Vec<Action> {
        self.page_count = page_count.max(FIRST_PAGE);
        self.page = FIRST_PAGE;
        self.viewport.reset();
        self.gesture = GestureState::Idle;
        self.ui.pending_draft = None;
        self.ui.selected = None;
        self.doc.load_snapshot(Vec::new());
        debug!(page_count = self.page_count, "document loaded");
        vec![Action::SetCursor(self.idle_cursor()), Action::RenderNeeded]
    }

    fn set_tool(&mut self, tool: Option<ToolKind>) -> Vec<Action> {
        self.ui.tool = tool;
        if self.gesture.is_idle() {
            vec![Action::SetCursor(self.idle_cursor())]
        } else {
            Vec::new()
        }
    }

    fn idle_cursor(&self) -> &'static str {
        if self.ui.tool.is_some() { CURSOR_CROSSHAIR } else { CURSOR_GRAB }
    }

    /// Clamp and apply a page change. Returns whether the page changed.
    fn set_page(&mut self, page: u32) -> bool {
        let page = page.clamp(FIRST_PAGE, self.page_count);
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    fn select(&mut self, id: Option<AnnotationId>) -> Vec<Action> {
        if let Some(page) = id.as_deref().and_then(|id| self.doc.get(id)).map(|a| a.position.page) {
            self.set_page(page);
        }
        self.ui.selected = id;
        vec![Action::RenderNeeded]
    }

    fn submit_draft(&mut self, content: &str) -> Vec<Action> {
        let content = content.trim();
        if content.is_empty() {
            return Vec::new();
        }
        let Some(draft) = self.ui.pending_draft.take() else {
            return Vec::new();
        };
        vec![Action::CreateAnnotation(NewAnnotation::from_draft(&draft, content.to_owned())), Action::RenderNeeded]
    }

    // --- Gestures ---

    fn on_pointer_down(&mut self, device: Point) -> Vec<Action> {
        if !self.gesture.is_idle() || self.ui.pending_draft.is_some() {
            return Vec::new();
        }
        let logical = self.viewport.device_to_logical(device);

        if let Some(tool) = self.ui.tool {
            self.gesture = GestureState::Drawing {
                start_logical: logical,
                current_rect: Rect::from_corners(logical, logical),
                page: self.page,
                tool,
            };
            return vec![Action::RenderNeeded];
        }

        let mut actions = vec![Action::SetCursor(CURSOR_GRABBING)];
        if let Some(hit) = self.doc.hit(self.page, logical) {
            if self.ui.selected.as_deref() != Some(hit.id.as_str()) {
                self.ui.selected = Some(hit.id.clone());
                actions.push(Action::RenderNeeded);
            }
        }
        self.gesture = GestureState::Panning { start_device: device, start_pan: self.viewport.pan() };
        actions
    }

    fn on_pointer_move(&mut self, device: Point) -> Vec<Action> {
        let logical = self.viewport.device_to_logical(device);
        self.cursor_logical = Some(logical);

        match &mut self.gesture {
            GestureState::Idle => Vec::new(),
            GestureState::Panning { start_device, start_pan } => {
                let pan = Point::new(start_pan.x + device.x - start_device.x, start_pan.y + device.y - start_device.y);
                self.viewport.set_pan(pan);
                vec![Action::RenderNeeded]
            }
            GestureState::Drawing { start_logical, current_rect, .. } => {
                *current_rect = Rect::from_corners(*start_logical, logical);
                vec![Action::RenderNeeded]
            }
        }
    }

    fn end_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.gesture) {
            GestureState::Idle => Vec::new(),
            GestureState::Panning { .. } => vec![Action::SetCursor(self.idle_cursor())],
            GestureState::Drawing { current_rect, page, tool, .. } => {
                if current_rect.is_empty() {
                    debug!(page, "draw gesture without movement; no draft");
                    return vec![Action::RenderNeeded];
                }
                let draft = DraftRect { rect: current_rect, page, tool };
                debug!(page, width = current_rect.width, height = current_rect.height, tool = tool.as_str(), "draft completed");
                self.ui.pending_draft = Some(draft);
                vec![Action::DraftCompleted(draft), Action::RenderNeeded]
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            pan: self.viewport.pan(),
            zoom: self.viewport.zoom(),
            origin: self.viewport.origin,
            page: self.page,
            page_count: self.page_count,
            tool: self.ui.tool,
            gesture: self.gesture,
            preview: self.preview_rect(),
            draft: self.visible_draft(),
            selected: self.ui.selected.clone(),
            cursor_logical: self.cursor_logical,
        }
    }

    /// Rectangle being drawn, if it was started on the page now shown.
    #[must_use]
    pub fn preview_rect(&self) -> Option<Rect> {
        match self.gesture {
            GestureState::Drawing { current_rect, page, .. } if page == self.page => Some(current_rect),
            _ => None,
        }
    }

    /// Pending draft, if it belongs to the page now shown.
    #[must_use]
    pub fn visible_draft(&self) -> Option<DraftRect> {
        self.ui.pending_draft.filter(|d| d.page == self.page)
    }

    /// Stored annotations on the page now shown.
    #[must_use]
    pub fn visible_annotations(&self) -> Vec<&Annotation> {
        self.doc.on_page(self.page).collect()
    }

    /// Map a logical rectangle to device pixels with the render transform.
    #[must_use]
    pub fn to_device_rect(&self, rect: Rect) -> Rect {
        let top_left = self.viewport.logical_to_device(Point::new(rect.x, rect.y));
        let zoom = self.viewport.zoom();
        Rect { x: top_left.x, y: top_left.y, width: rect.width * zoom, height: rect.height * zoom }
    }
}

fn render_if(changed: bool) -> Vec<Action> {
    if changed { vec![Action::RenderNeeded] } else { Vec::new() }
}

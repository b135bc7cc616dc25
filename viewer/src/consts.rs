//! Shared numeric constants for the viewer crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor reachable through zoom actions.
pub const ZOOM_MIN: f64 = 0.5;

/// Largest zoom factor reachable through zoom actions.
pub const ZOOM_MAX: f64 = 3.0;

/// Zoom change applied by a single zoom-in or zoom-out action.
pub const ZOOM_STEP: f64 = 0.25;

/// Zoom factor after a document is loaded.
pub const DEFAULT_ZOOM: f64 = 1.0;

// ── Pages ───────────────────────────────────────────────────────

/// Pages are numbered from one.
pub const FIRST_PAGE: u32 = 1;

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor shown while no gesture is active and no tool is armed.
pub const CURSOR_GRAB: &str = "grab";

/// Cursor shown while the page is being dragged.
pub const CURSOR_GRABBING: &str = "grabbing";

/// Cursor shown while an annotation tool is armed.
pub const CURSOR_CROSSHAIR: &str = "crosshair";

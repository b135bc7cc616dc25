//! Viewport and gesture model for the drawing review viewer.
//!
//! This crate holds the interaction bookkeeping behind the drawing viewer:
//! translating raw pointer events into pan or draw gestures, maintaining the
//! pan/zoom transform over the page, tracking which page is shown, and
//! caching the annotations fetched from the review API. The host view layer
//! forwards DOM events to [`engine::EngineCore::dispatch`] and handles the
//! returned [`engine::Action`]s (repaint, cursor, draft dialog, persistence).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Event dispatcher and read-only [`engine::ViewSnapshot`] |
//! | [`camera`] | Pan/zoom viewport and device/logical coordinate conversions |
//! | [`input`] | Tool kinds, rectangles, drafts and the gesture state machine |
//! | [`doc`] | Annotation wire types and the per-document annotation cache |
//! | [`ui`] | Panels, selection and the pending draft |
//! | [`consts`] | Shared numeric constants (zoom limits, zoom step, first page) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod input;
pub mod ui;

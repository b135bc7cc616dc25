#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::doc::AnnotationId;
use crate::input::{DraftRect, ToolKind};

/// Side panels the review screen can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Annotation list with replies.
    Annotations,
    /// Version history of the drawing.
    Versions,
    /// Review workflow status and reviewers.
    Workflow,
}

/// Panel visibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub annotations: bool,
    pub versions: bool,
    pub workflow: bool,
}

impl Default for Panels {
    fn default() -> Self {
        Self { annotations: true, versions: false, workflow: false }
    }
}

impl Panels {
    #[must_use]
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Annotations => self.annotations,
            Panel::Versions => self.versions,
            Panel::Workflow => self.workflow,
        }
    }

    /// Flip one panel and return its new visibility.
    pub fn toggle(&mut self, panel: Panel) -> bool {
        let flag = match panel {
            Panel::Annotations => &mut self.annotations,
            Panel::Versions => &mut self.versions,
            Panel::Workflow => &mut self.workflow,
        };
        *flag = !*flag;
        *flag
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Armed annotation tool. `None` means dragging pans.
    pub tool: Option<ToolKind>,
    /// The annotation highlighted in the list and on the page.
    pub selected: Option<AnnotationId>,
    pub panels: Panels,
    /// Finished rectangle waiting for the user to type its content.
    pub pending_draft: Option<DraftRect>,
}

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use super::error::ViewportError;
use super::section_tracker::{SectionExtent, SectionLayout};

/// [`SectionLayout`] backed by the live browser document.
#[derive(Debug, Clone)]
pub struct DomLayout {
    window: Window,
    document: Document,
}

impl DomLayout {
    pub fn from_window() -> Result<Self, ViewportError> {
        let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
        let document = window.document().ok_or(ViewportError::NoWindow)?;
        Ok(Self { window, document })
    }
}

impl SectionLayout for DomLayout {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn extent_of(&self, id: &str) -> Option<SectionExtent> {
        let element = self.document.get_element_by_id(id)?;
        let rect = element.get_bounding_client_rect();
        let scroll_y = self.scroll_y();
        Some(SectionExtent::new(rect.top() + scroll_y, rect.bottom() + scroll_y))
    }

    fn scroll_to_top_of(&self, id: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Jumps to the top of the page, used when a page mounts.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

//! Expand/collapse state for content cards.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

/// Delay before scrolling a freshly expanded card into view, letting the
/// expansion transition start first.
pub const SCROLL_INTO_VIEW_DELAY_MS: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardState {
    pub expanded: bool,
}

impl CardState {
    /// Flip the state and return the new `expanded` value.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn button_text(self) -> &'static str {
        if self.expanded { "Collapse" } else { "Expand" }
    }

    pub fn aria_label(self) -> &'static str {
        if self.expanded {
            "Collapse description"
        } else {
            "Expand description"
        }
    }

    /// Class list for an element that gains `expanded` with the card.
    pub fn class_with(self, base: &str) -> String {
        if self.expanded {
            format!("{base} expanded")
        } else {
            base.to_owned()
        }
    }
}

/// True when an element's bottom edge lies below the viewport.
pub fn is_partially_off_screen(rect_bottom: f64, viewport_height: f64) -> bool {
    rect_bottom > viewport_height
}

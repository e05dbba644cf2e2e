//! Scroll-spy section selection and per-frame throttling.
//!
//! The active section is the last one (in document order) whose top edge has
//! scrolled above a probe line one third of the way down the viewport.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

/// Index of the section to highlight.
///
/// `section_tops` are absolute document offsets in document order. Returns
/// `Some(0)` when no section has reached the probe line yet and `None` only
/// when there are no sections at all.
pub fn active_section(scroll_y: f64, viewport_height: f64, section_tops: &[f64]) -> Option<usize> {
    if section_tops.is_empty() {
        return None;
    }
    let probe = scroll_y + viewport_height / 3.0;
    Some(section_tops.iter().rposition(|top| probe >= *top).unwrap_or(0))
}

/// Admits at most one pending update per animation frame.
///
/// Once stopped it admits nothing, and a frame already queued skips its
/// update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameThrottle {
    ticking: bool,
    stopped: bool,
}

impl FrameThrottle {
    /// Returns `true` when the caller should schedule a frame callback.
    pub fn request(&mut self) -> bool {
        if self.ticking || self.stopped {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Called from the frame callback. Returns whether the update should run.
    pub fn complete(&mut self) -> bool {
        self.ticking = false;
        !self.stopped
    }

    /// Stop admitting updates for good.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.ticking = false;
    }
}

//! Pen continuity tracking for the receiving side.
//!
//! The sender only streams samples; whether a sample extends the previous one
//! or starts a fresh stroke is carried by the `new_line` flag and resolved here.

/// One paint instruction produced by feeding a pen sample through the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStep {
    /// An isolated sample, painted as a small dot.
    Dot((i32, i32)),
    /// A segment connecting the previous sample to this one.
    Segment { from: (i32, i32), to: (i32, i32) },
}

/// Tracks stroke continuity across a stream of pen samples.\
/// One tracker lives per session and is dropped with it: a fresh connection
/// starts with a clean slate while the canvas keeps whatever was drawn before.
///
/// Only pen samples touch the tracker. Erasing, clearing the canvas, and shapes
/// leave it alone, so a stroke in flight continues right across them.
#[derive(Debug, Default)]
pub struct StrokeState {
    last: Option<(i32, i32)>,
}

impl StrokeState {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Feeds one pen sample through the tracker and returns what to paint.
    ///
    /// A `new_line` sample paints a dot and clears the continuity anchor, so the
    /// sample after it starts fresh as well: two `new_line` samples in a row stay
    /// two isolated dots. A plain sample with no anchor also paints a dot and
    /// becomes the anchor for the next one.
    pub fn advance(&mut self, point: (i32, i32), new_line: bool) -> StrokeStep {
        if new_line {
            self.last = None;
            return StrokeStep::Dot(point);
        }
        match self.last.replace(point) {
            Some(prev) => StrokeStep::Segment {
                from: prev,
                to: point,
            },
            None => StrokeStep::Dot(point),
        }
    }

    /// Drops the continuity anchor; the next sample starts a fresh stroke.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

use crate::coords;
use crate::event::{Event, Rgba, ShapeKind};
use crate::geometry;
use crate::stroke::{StrokeState, StrokeStep};

/// Radius of the dot painted for an isolated pen sample.
pub const PEN_DOT_RADIUS: i32 = 1;
/// Width of stroke segments and shape outlines.
pub const STROKE_WIDTH: u32 = 2;
/// Radius of the disc painted over the canvas by one eraser sample.
pub const ERASER_RADIUS: i32 = 20;
/// Edge count used when a circle outline has to be approximated by a polyline.
pub const CIRCLE_SEGMENTS: u32 = 64;

/// The canvas boundary the renderer paints through.\
/// Implementations translate these calls into whatever their backend offers;
/// [`crate::geometry`] covers the primitives most backends lack.
pub trait Surface {
    /// Wipes the whole canvas back to the background color.
    fn clear(&mut self);
    /// Paints a filled disc.
    fn fill_disc(&mut self, center: (i32, i32), radius: i32, color: Rgba);
    /// Paints a stroke segment, [`STROKE_WIDTH`] wide.
    fn draw_segment(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba);
    /// Paints an axis-aligned rectangle outline.
    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba);
    /// Paints a circle outline.
    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Rgba);
}

/// Replays a stream of drawing events onto a [`Surface`].
///
/// The renderer owns the per-session stroke state and the pixel dimensions
/// used to denormalize incoming coordinates. Every event maps to exactly one
/// surface call.
#[derive(Debug)]
pub struct Renderer {
    width: u32,
    height: u32,
    background: Rgba,
    stroke: StrokeState,
}

impl Renderer {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self {
            width,
            height,
            background,
            stroke: StrokeState::new(),
        }
    }

    /// Drops stroke continuity, as when a new session begins.\
    /// The canvas itself is left alone.
    pub fn reset_stroke(&mut self) {
        self.stroke.reset();
    }

    /// Applies one event to the surface.
    ///
    /// Erasing paints the background color over the canvas rather than
    /// removing anything, so redrawing over an erased area works as expected.
    /// Neither erasing nor shapes touch stroke continuity.
    pub fn apply<S: Surface>(&mut self, surface: &mut S, event: &Event) {
        match *event {
            Event::Draw {
                x,
                y,
                new_line,
                color,
            } => {
                let point = coords::denormalize(x, y, self.width, self.height);
                match self.stroke.advance(point, new_line) {
                    StrokeStep::Dot(p) => surface.fill_disc(p, PEN_DOT_RADIUS, color),
                    StrokeStep::Segment { from, to } => surface.draw_segment(from, to, color),
                }
            }
            Event::Erase { x, y } => {
                let point = coords::denormalize(x, y, self.width, self.height);
                surface.fill_disc(point, ERASER_RADIUS, self.background);
            }
            Event::EraseAll => surface.clear(),
            Event::Shape {
                shape,
                start,
                end,
                color,
            } => {
                let a = coords::denormalize(start.0, start.1, self.width, self.height);
                let b = coords::denormalize(end.0, end.1, self.width, self.height);
                match shape {
                    ShapeKind::Line => surface.draw_segment(a, b, color),
                    ShapeKind::Rectangle => {
                        let (x, y, w, h) = geometry::rect_bounds(a, b);
                        surface.draw_rect(x, y, w, h, color);
                    }
                    ShapeKind::Circle => {
                        let (center, radius) = geometry::circle_from_corners(a, b);
                        surface.draw_circle(center, radius, color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Disc((i32, i32), i32, Rgba),
        Segment((i32, i32), (i32, i32), Rgba),
        Rect(i32, i32, u32, u32, Rgba),
        Circle((f32, f32), f32, Rgba),
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn fill_disc(&mut self, center: (i32, i32), radius: i32, color: Rgba) {
            self.ops.push(Op::Disc(center, radius, color));
        }
        fn draw_segment(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba) {
            self.ops.push(Op::Segment(from, to, color));
        }
        fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
            self.ops.push(Op::Rect(x, y, width, height, color));
        }
        fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Rgba) {
            self.ops.push(Op::Circle(center, radius, color));
        }
    }

    const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);

    fn draw(x: f32, y: f32, new_line: bool) -> Event {
        Event::Draw {
            x,
            y,
            new_line,
            color: RED,
        }
    }

    fn replay(events: &[Event]) -> Vec<Op> {
        let mut renderer = Renderer::new(1280, 720, Rgba::BLACK);
        let mut surface = RecordingSurface::default();
        for event in events {
            renderer.apply(&mut surface, event);
        }
        surface.ops
    }

    #[test]
    fn test_draw_stream_becomes_dots_then_segments() {
        let ops = replay(&[
            draw(0.5, 0.5, true),
            draw(0.5, 0.25, false),
            draw(0.25, 0.25, false),
        ]);
        assert_eq!(
            ops,
            vec![
                Op::Disc((640, 360), PEN_DOT_RADIUS, RED),
                Op::Disc((640, 180), PEN_DOT_RADIUS, RED),
                Op::Segment((640, 180), (320, 180), RED),
            ]
        );
    }

    #[test]
    fn test_erase_paints_background_disc() {
        let ops = replay(&[Event::Erase { x: 0.5, y: 0.5 }]);
        assert_eq!(ops, vec![Op::Disc((640, 360), ERASER_RADIUS, Rgba::BLACK)]);
    }

    #[test]
    fn test_erase_does_not_break_a_stroke() {
        let ops = replay(&[
            draw(0.1, 0.1, false),
            Event::Erase { x: 0.9, y: 0.9 },
            Event::EraseAll,
            draw(0.2, 0.1, false),
        ]);
        // The final draw still connects back to the sample before the erases.
        assert_eq!(
            ops.last(),
            Some(&Op::Segment((128, 72), (256, 72), RED))
        );
    }

    #[test]
    fn test_erase_all_clears() {
        let ops = replay(&[draw(0.5, 0.5, true), Event::EraseAll]);
        assert_eq!(ops.last(), Some(&Op::Clear));
    }

    #[test]
    fn test_inverted_rectangle_drag() {
        let ops = replay(&[Event::Shape {
            shape: ShapeKind::Rectangle,
            start: (0.2, 0.2),
            end: (0.1, 0.1),
            color: RED,
        }]);
        assert_eq!(ops, vec![Op::Rect(128, 72, 128, 72, RED)]);
    }

    #[test]
    fn test_circle_center_and_radius() {
        let mut renderer = Renderer::new(100, 100, Rgba::BLACK);
        let mut surface = RecordingSurface::default();
        renderer.apply(
            &mut surface,
            &Event::Shape {
                shape: ShapeKind::Circle,
                start: (0.0, 0.0),
                end: (1.0, 1.0),
                color: RED,
            },
        );
        let Some(Op::Circle(center, radius, _)) = surface.ops.first() else {
            panic!("expected a circle, got {:?}", surface.ops);
        };
        assert_eq!(*center, (50.0, 50.0));
        assert!((radius - 70.71).abs() < 0.01);
    }

    #[test]
    fn test_shape_line_is_a_segment() {
        let ops = replay(&[Event::Shape {
            shape: ShapeKind::Line,
            start: (0.0, 0.0),
            end: (0.5, 0.5),
            color: RED,
        }]);
        assert_eq!(ops, vec![Op::Segment((0, 0), (640, 360), RED)]);
    }

    #[test]
    fn test_new_session_resets_continuity() {
        let mut renderer = Renderer::new(1280, 720, Rgba::BLACK);
        let mut surface = RecordingSurface::default();
        renderer.apply(&mut surface, &draw(0.1, 0.1, false));
        renderer.apply(&mut surface, &draw(0.2, 0.2, false));
        renderer.reset_stroke();
        renderer.apply(&mut surface, &draw(0.3, 0.3, false));
        assert!(matches!(surface.ops.last(), Some(Op::Disc(..))));
    }
}

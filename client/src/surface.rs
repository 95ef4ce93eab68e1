//! SDL painting helpers shared by the echo canvas and the shape previews.

use libscrawl::event::{Rgba, ShapeKind};
use libscrawl::geometry;
use libscrawl::render::CIRCLE_SEGMENTS;
use sdl3::{
    pixels::Color,
    render::{Canvas, FPoint, FRect},
    video,
};

/// The canvas background, also what the eraser paints with.
pub const BACKGROUND: Rgba = Rgba::BLACK;

/// Dash pattern for in-progress shape previews, in pixels.
const DASH_LEN: f32 = 10.0;
const DASH_GAP: f32 = 5.0;

pub fn sdl_color(color: Rgba) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::RGB(r, g, b)
}

/// Paints the whole canvas in the background color.
pub fn clear(canvas: &mut Canvas<video::Window>) {
    canvas.set_draw_color(sdl_color(BACKGROUND));
    canvas.clear();
}

/// Paints a filled disc as horizontal spans of 1px-high rects.
pub fn fill_disc(canvas: &mut Canvas<video::Window>, center: (i32, i32), radius: i32, color: Rgba) {
    canvas.set_draw_color(sdl_color(color));
    for (x, y, width) in geometry::disc_spans(center.0, center.1, radius) {
        let _ = canvas.fill_rect(FRect::new(x as f32, y as f32, width as f32, 1.0));
    }
}

/// Paints a stroke segment, thickened by offset copies of the base line.
pub fn thick_segment(
    canvas: &mut Canvas<video::Window>,
    from: (i32, i32),
    to: (i32, i32),
    color: Rgba,
) {
    canvas.set_draw_color(sdl_color(color));
    for (dx, dy) in [(0, 0), (1, 0), (0, 1)] {
        let _ = canvas.draw_line(
            FPoint::new((from.0 + dx) as f32, (from.1 + dy) as f32),
            FPoint::new((to.0 + dx) as f32, (to.1 + dy) as f32),
        );
    }
}

/// Paints a rectangle outline: the outer rect plus a one-pixel inset.
pub fn outline_rect(canvas: &mut Canvas<video::Window>, bounds: (i32, i32, u32, u32), color: Rgba) {
    let (x, y, w, h) = bounds;
    canvas.set_draw_color(sdl_color(color));
    let _ = canvas.draw_rect(FRect::new(x as f32, y as f32, w as f32, h as f32));
    if w >= 2 && h >= 2 {
        let _ = canvas.draw_rect(FRect::new(
            (x + 1) as f32,
            (y + 1) as f32,
            (w - 2) as f32,
            (h - 2) as f32,
        ));
    }
}

/// Paints a circle outline from a closed polyline, doubled one pixel in.
pub fn outline_circle(
    canvas: &mut Canvas<video::Window>,
    center: (f32, f32),
    radius: f32,
    color: Rgba,
) {
    canvas.set_draw_color(sdl_color(color));
    for r in [radius, (radius - 1.0).max(0.0)] {
        polyline(canvas, &geometry::circle_points(center.0, center.1, r, CIRCLE_SEGMENTS));
    }
}

/// Paints the committed (solid) form of a two-corner shape.
pub fn solid_shape(
    canvas: &mut Canvas<video::Window>,
    kind: ShapeKind,
    start: (i32, i32),
    end: (i32, i32),
    color: Rgba,
) {
    match kind {
        ShapeKind::Line => thick_segment(canvas, start, end, color),
        ShapeKind::Rectangle => outline_rect(canvas, geometry::rect_bounds(start, end), color),
        ShapeKind::Circle => {
            let (center, radius) = geometry::circle_from_corners(start, end);
            outline_circle(canvas, center, radius, color);
        }
    }
}

/// Paints the dashed preview of a shape while the pointer is still down.
pub fn dashed_shape(
    canvas: &mut Canvas<video::Window>,
    kind: ShapeKind,
    start: (i32, i32),
    end: (i32, i32),
    color: Rgba,
) {
    canvas.set_draw_color(sdl_color(color));
    match kind {
        ShapeKind::Line => dashed_segment(canvas, to_f(start), to_f(end)),
        ShapeKind::Rectangle => {
            let (x, y, w, h) = geometry::rect_bounds(start, end);
            let (x, y, w, h) = (x as f32, y as f32, w as f32, h as f32);
            dashed_segment(canvas, (x, y), (x + w, y));
            dashed_segment(canvas, (x + w, y), (x + w, y + h));
            dashed_segment(canvas, (x + w, y + h), (x, y + h));
            dashed_segment(canvas, (x, y + h), (x, y));
        }
        ShapeKind::Circle => {
            let (center, radius) = geometry::circle_from_corners(start, end);
            let points = geometry::circle_points(center.0, center.1, radius, CIRCLE_SEGMENTS);
            // Every other edge of the polyline reads as a dash.
            for (i, pair) in points.windows(2).enumerate() {
                if i % 2 == 0 {
                    let _ = canvas.draw_line(
                        FPoint::new(pair[0].0, pair[0].1),
                        FPoint::new(pair[1].0, pair[1].1),
                    );
                }
            }
        }
    }
}

fn polyline(canvas: &mut Canvas<video::Window>, points: &[(f32, f32)]) {
    for pair in points.windows(2) {
        let _ = canvas.draw_line(
            FPoint::new(pair[0].0, pair[0].1),
            FPoint::new(pair[1].0, pair[1].1),
        );
    }
}

fn dashed_segment(canvas: &mut Canvas<video::Window>, from: (f32, f32), to: (f32, f32)) {
    for (a, b) in geometry::dash_segments(from, to, DASH_LEN, DASH_GAP) {
        let _ = canvas.draw_line(FPoint::new(a.0, a.1), FPoint::new(b.0, b.1));
    }
}

fn to_f(p: (i32, i32)) -> (f32, f32) {
    (p.0 as f32, p.1 as f32)
}

//! SDL backend for the event renderer.

use libscrawl::event::Rgba;
use libscrawl::geometry;
use libscrawl::render::{Surface, CIRCLE_SEGMENTS};
use sdl3::{
    pixels::Color,
    render::{Canvas, FPoint, FRect},
    video,
};

pub fn sdl_color(color: Rgba) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::RGB(r, g, b)
}

/// Paints renderer calls onto an SDL canvas, usually a texture target.\
/// SDL has no disc, thick-line or circle primitives, so those are built
/// from spans, offset lines and polylines.
pub struct SdlSurface<'a> {
    canvas: &'a mut Canvas<video::Window>,
    background: Rgba,
}

impl<'a> SdlSurface<'a> {
    pub fn new(canvas: &'a mut Canvas<video::Window>, background: Rgba) -> Self {
        Self { canvas, background }
    }
}

impl Surface for SdlSurface<'_> {
    fn clear(&mut self) {
        self.canvas.set_draw_color(sdl_color(self.background));
        self.canvas.clear();
    }

    fn fill_disc(&mut self, center: (i32, i32), radius: i32, color: Rgba) {
        self.canvas.set_draw_color(sdl_color(color));
        for (x, y, width) in geometry::disc_spans(center.0, center.1, radius) {
            let _ = self
                .canvas
                .fill_rect(FRect::new(x as f32, y as f32, width as f32, 1.0));
        }
    }

    fn draw_segment(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba) {
        self.canvas.set_draw_color(sdl_color(color));
        for (dx, dy) in [(0, 0), (1, 0), (0, 1)] {
            let _ = self.canvas.draw_line(
                FPoint::new((from.0 + dx) as f32, (from.1 + dy) as f32),
                FPoint::new((to.0 + dx) as f32, (to.1 + dy) as f32),
            );
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        self.canvas.set_draw_color(sdl_color(color));
        let _ = self
            .canvas
            .draw_rect(FRect::new(x as f32, y as f32, width as f32, height as f32));
        if width >= 2 && height >= 2 {
            let _ = self.canvas.draw_rect(FRect::new(
                (x + 1) as f32,
                (y + 1) as f32,
                (width - 2) as f32,
                (height - 2) as f32,
            ));
        }
    }

    fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Rgba) {
        self.canvas.set_draw_color(sdl_color(color));
        for r in [radius, (radius - 1.0).max(0.0)] {
            let points = geometry::circle_points(center.0, center.1, r, CIRCLE_SEGMENTS);
            for pair in points.windows(2) {
                let _ = self.canvas.draw_line(
                    FPoint::new(pair[0].0, pair[0].1),
                    FPoint::new(pair[1].0, pair[1].1),
                );
            }
        }
    }
}

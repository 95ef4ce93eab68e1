//! Shared helpers for the scrawl benchmarks.

use libscrawl::event::{Event, Rgba, ShapeKind};
use libscrawl::render::Surface;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a reproducible stream of drawing events resembling a real session:
/// mostly pen samples grouped into strokes, with occasional erases and shapes.
pub fn random_events(count: usize) -> Vec<Event> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut events = Vec::with_capacity(count);
    let mut in_stroke = false;
    while events.len() < count {
        match rng.gen_range(0..100) {
            0..=79 => {
                let new_line = !in_stroke || rng.gen_ratio(1, 20);
                in_stroke = true;
                events.push(Event::Draw {
                    x: rng.gen::<f32>(),
                    y: rng.gen::<f32>(),
                    new_line,
                    color: random_color(&mut rng),
                });
            }
            80..=91 => {
                events.push(Event::Erase {
                    x: rng.gen::<f32>(),
                    y: rng.gen::<f32>(),
                });
            }
            92..=98 => {
                let shape = match rng.gen_range(0..3) {
                    0 => ShapeKind::Line,
                    1 => ShapeKind::Rectangle,
                    _ => ShapeKind::Circle,
                };
                events.push(Event::Shape {
                    shape,
                    start: (rng.gen::<f32>(), rng.gen::<f32>()),
                    end: (rng.gen::<f32>(), rng.gen::<f32>()),
                    color: random_color(&mut rng),
                });
            }
            _ => events.push(Event::EraseAll),
        }
    }
    events
}

fn random_color(rng: &mut StdRng) -> Rgba {
    Rgba::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>(), 1.0)
}

/// A surface that counts calls and paints nothing, isolating renderer overhead.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub calls: usize,
}

impl Surface for NullSurface {
    fn clear(&mut self) {
        self.calls += 1;
    }

    fn fill_disc(&mut self, _center: (i32, i32), _radius: i32, _color: Rgba) {
        self.calls += 1;
    }

    fn draw_segment(&mut self, _from: (i32, i32), _to: (i32, i32), _color: Rgba) {
        self.calls += 1;
    }

    fn draw_rect(&mut self, _x: i32, _y: i32, _width: u32, _height: u32, _color: Rgba) {
        self.calls += 1;
    }

    fn draw_circle(&mut self, _center: (f32, f32), _radius: f32, _color: Rgba) {
        self.calls += 1;
    }
}

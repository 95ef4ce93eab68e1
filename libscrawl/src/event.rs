use serde::{Deserialize, Serialize};

/// An RGBA color with channels in `[0, 1]`, serialized as a `[r, g, b, a]` JSON array.\
/// The alpha channel travels on the wire but the receiver ignores it when painting.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    pub const WHITE: Rgba = Rgba([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Rgba = Rgba([0.0, 0.0, 0.0, 1.0]);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba([r, g, b, a])
    }

    /// Converts to 8-bit channels by rounding, clamping out-of-range values.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(self.0[0]), channel(self.0[1]), channel(self.0[2]))
    }
}

/// The kind of shape carried by a [`Event::Shape`] message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
}

/// A single drawing event as it travels on the wire, one JSON object per line.\
/// Coordinates are normalized to `[0, 1]` so sender and receiver windows may differ in size;
/// the receiver scales them back to its own pixel space.
///
/// The `type` tag is the wire contract. Adding a variant extends the protocol; renaming
/// a field or tag breaks it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A pen sample. `new_line` is true for the first sample of a stroke,
    /// which paints a dot and breaks continuity with whatever came before.
    Draw {
        x: f32,
        y: f32,
        new_line: bool,
        color: Rgba,
    },
    /// An eraser sample, painted as a background-colored disc at the point.
    Erase { x: f32, y: f32 },
    /// Clears the whole canvas.
    EraseAll,
    /// A completed two-point shape, transmitted once on release.
    Shape {
        shape: ShapeKind,
        start: (f32, f32),
        end: (f32, f32),
        color: Rgba,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8_rounds_half_up() {
        let color = Rgba::new(0.5, 0.0, 1.0, 1.0);
        assert_eq!(color.to_rgb8(), (128, 0, 255));
    }

    #[test]
    fn test_rgb8_clamps_out_of_range() {
        let color = Rgba::new(-0.5, 1.5, 0.999, 1.0);
        assert_eq!(color.to_rgb8(), (0, 255, 255));
    }
}

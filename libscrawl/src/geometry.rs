//! Pixel geometry helpers for canvases without disc, circle or dash primitives.

/// Horizontal spans covering a filled disc, as `(x, y, width)` rows.\
/// Painting each span as a 1px-high filled rect yields the disc.
pub fn disc_spans(cx: i32, cy: i32, radius: i32) -> Vec<(i32, i32, u32)> {
    if radius < 0 {
        return Vec::new();
    }
    let mut spans = Vec::with_capacity(radius as usize * 2 + 1);
    for dy in -radius..=radius {
        let half = ((radius * radius - dy * dy) as f32).sqrt() as i32;
        spans.push((cx - half, cy + dy, half as u32 * 2 + 1));
    }
    spans
}

/// Vertices of a circle outline as a closed polyline with `segments` edges.\
/// The first vertex is repeated at the end so consecutive pairs close the loop.
pub fn circle_points(cx: f32, cy: f32, radius: f32, segments: u32) -> Vec<(f32, f32)> {
    if segments == 0 {
        return Vec::new();
    }
    let mut points = Vec::with_capacity(segments as usize + 1);
    for i in 0..segments {
        let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
        points.push((cx + radius * theta.cos(), cy + radius * theta.sin()));
    }
    points.push(points[0]);
    points
}

/// Splits a segment into dashes of `dash` pixels separated by `gap` pixels.
pub fn dash_segments(
    from: (f32, f32),
    to: (f32, f32),
    dash: f32,
    gap: f32,
) -> Vec<((f32, f32), (f32, f32))> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f32::EPSILON || dash <= 0.0 {
        return Vec::new();
    }
    let (ux, uy) = (dx / length, dy / length);
    let period = dash + gap.max(0.0);
    let mut dashes = Vec::new();
    let mut offset = 0.0;
    while offset < length {
        let end = (offset + dash).min(length);
        dashes.push((
            (from.0 + ux * offset, from.1 + uy * offset),
            (from.0 + ux * end, from.1 + uy * end),
        ));
        offset += period;
    }
    dashes
}

/// Canonical `(x, y, w, h)` bounds of the rectangle spanned by two corners.\
/// Inverted drags (end above or left of start) still yield non-negative spans.
pub fn rect_bounds(a: (i32, i32), b: (i32, i32)) -> (i32, i32, u32, u32) {
    (
        a.0.min(b.0),
        a.1.min(b.1),
        (a.0 - b.0).unsigned_abs(),
        (a.1 - b.1).unsigned_abs(),
    )
}

/// Center and radius of the circle spanned by two corner points:
/// center at the midpoint, radius half the distance between them.
pub fn circle_from_corners(a: (i32, i32), b: (i32, i32)) -> ((f32, f32), f32) {
    let center = (
        (a.0 + b.0) as f32 / 2.0,
        (a.1 + b.1) as f32 / 2.0,
    );
    let dx = (b.0 - a.0) as f32;
    let dy = (b.1 - a.1) as f32;
    (center, (dx * dx + dy * dy).sqrt() / 2.0)
}

use libscrawl::event::Rgba;

/// Pen colors cycled in order with Tab, white first.
pub const DEFAULT_PALETTE: [(&str, Rgba); 8] = [
    ("white", Rgba::WHITE),
    ("red", Rgba::new(1.0, 0.2, 0.2, 1.0)),
    ("orange", Rgba::new(1.0, 0.6, 0.0, 1.0)),
    ("yellow", Rgba::new(1.0, 1.0, 0.2, 1.0)),
    ("green", Rgba::new(0.2, 1.0, 0.2, 1.0)),
    ("cyan", Rgba::new(0.2, 1.0, 1.0, 1.0)),
    ("blue", Rgba::new(0.4, 0.4, 1.0, 1.0)),
    ("magenta", Rgba::new(1.0, 0.4, 1.0, 1.0)),
];

/// Index of the palette entry matching `color`, if it is a palette color.
pub fn position(color: Rgba) -> Option<usize> {
    DEFAULT_PALETTE.iter().position(|(_, c)| *c == color)
}

/// The entry after `index`, wrapping around at the end.
pub fn next(index: usize) -> (usize, &'static str, Rgba) {
    let next = (index + 1) % DEFAULT_PALETTE.len();
    let (name, color) = DEFAULT_PALETTE[next];
    (next, name, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_back_to_white() {
        let mut index = 0;
        for _ in 0..DEFAULT_PALETTE.len() {
            index = next(index).0;
        }
        assert_eq!(index, 0);
        assert_eq!(DEFAULT_PALETTE[index].1, Rgba::WHITE);
    }

    #[test]
    fn test_position_finds_palette_colors() {
        assert_eq!(position(Rgba::WHITE), Some(0));
        assert_eq!(position(Rgba::new(0.1, 0.2, 0.3, 1.0)), None);
    }
}

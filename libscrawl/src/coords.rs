//! Normalized coordinate mapping between capture space and canvas pixels.
//!
//! Points travel on the wire normalized to `[0, 1]` so both ends may run at
//! different window sizes. The two mappings are deliberately asymmetric:
//! the sender captures against a bottom-left origin (y grows upward) and folds
//! the flip into `1 - y / height`, while the receiver multiplies straight back
//! into its top-left-origin pixel space. Capture adapters whose native windows
//! use a top-left origin must flip (`y = height - window_y`) before normalizing,
//! or the image arrives upside down.

/// Normalizes a capture-space point (bottom-left origin) to `[0, 1]`.
pub fn normalize(x: f32, y: f32, width: u32, height: u32) -> (f32, f32) {
    (x / width as f32, 1.0 - y / height as f32)
}

/// Maps a normalized point back to pixel coordinates, truncating to whole pixels.\
/// No inversion here: the flip already happened on the sender side.
pub fn denormalize(x: f32, y: f32, width: u32, height: u32) -> (i32, i32) {
    ((x * width as f32) as i32, (y * height as f32) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_center() {
        assert_eq!(denormalize(0.5, 0.5, 1280, 720), (640, 360));
    }

    #[test]
    fn test_denormalize_truncates() {
        assert_eq!(denormalize(0.333, 0.5, 100, 100), (33, 50));
    }

    #[test]
    fn test_denormalize_is_a_direct_multiply() {
        // y is NOT re-inverted on the way back in.
        assert_eq!(denormalize(0.0, 0.0, 1280, 720), (0, 0));
        assert_eq!(denormalize(1.0, 1.0, 1280, 720), (1280, 720));
    }

    #[test]
    fn test_normalize_folds_in_the_flip() {
        // Bottom-left capture origin lands at the bottom of the receiver canvas.
        assert_eq!(normalize(0.0, 0.0, 1280, 720), (0.0, 1.0));
        assert_eq!(normalize(1280.0, 720.0, 1280, 720), (1.0, 0.0));
    }

    #[test]
    fn test_capture_origin_lands_on_the_bottom_row() {
        let (nx, ny) = normalize(0.0, 0.0, 1280, 720);
        assert_eq!(denormalize(nx, ny, 1280, 720), (0, 720));
    }

    #[test]
    fn test_flipped_window_point_round_trips() {
        // A top-left-origin window point, flipped before normalize, comes back
        // at the same pixel row on an equally sized receiver.
        let (width, height) = (1280, 720);
        let (window_x, window_y) = (320.0, 180.0);
        let (nx, ny) = normalize(window_x, height as f32 - window_y, width, height);
        assert_eq!(denormalize(nx, ny, width, height), (320, 180));
    }
}

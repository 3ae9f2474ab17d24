//! Color palette helper: a fixed list of primary colors extended to any
//! requested length by repeated midpoint interpolation, handy for giving each
//! curve of a multi-series plot its own color.

/// RGBA decimal code, every component in `[0, 1]`.
pub type Rgba = [f64; 4];

pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];
pub const ORANGE: Rgba = [1.0, 0.5, 0.0, 1.0];
pub const MAGENTA: Rgba = [1.0, 0.0, 1.0, 1.0];
pub const GREEN: Rgba = [0.0, 1.0, 0.0, 1.0];
pub const YELLOW: Rgba = [1.0, 1.0, 0.0, 1.0];
pub const CYAN: Rgba = [0.0, 1.0, 1.0, 1.0];
pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];

fn mid_color(color_a: Rgba, color_b: Rgba) -> Rgba {
    [
        (color_a[0] + color_b[0]) / 2.0,
        (color_a[1] + color_b[1]) / 2.0,
        (color_a[2] + color_b[2]) / 2.0,
        (color_a[3] + color_b[3]) / 2.0,
    ]
}

/// Palette of `num_colors` RGBA colors. Up to eight colors come straight from
/// the ordered primary list; longer palettes are grown by inserting the
/// midpoint of the pair at positions `2i`, `2i + 1` before position `2i + 1`,
/// pass after pass, until the requested length is reached. `num_colors` must
/// be at least 1.
pub fn color_map(num_colors: usize) -> Vec<Rgba> {
    assert!(num_colors >= 1, "at least one color must be requested");

    // order the primary colors here
    let mut color_map: Vec<Rgba> =
        vec![RED, BLUE, ORANGE, MAGENTA, GREEN, YELLOW, CYAN, BLACK];

    if num_colors <= color_map.len() {
        color_map.truncate(num_colors);
        return color_map;
    }

    while color_map.len() < num_colors {
        let len_at_pass = color_map.len();
        for i in 0..(len_at_pass - 1) {
            let color_a = color_map[2 * i];
            let color_b = color_map[2 * i + 1];
            // insert before index 2i + 1
            color_map.insert(2 * i + 1, mid_color(color_a, color_b));
            if color_map.len() == num_colors {
                break;
            }
        }
    }
    color_map
}

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed colours
// ---------------------------------------------------------------------------

/// Vertical (X) reference lines.
pub const X_MARKER_COLOR: Color32 = Color32::from_rgb(0x00, 0x66, 0xcc);
/// Horizontal (Y) reference lines.
pub const Y_MARKER_COLOR: Color32 = Color32::from_rgb(0xcc, 0x00, 0x00);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Start at a blue-violet so a lone chart looks like a classic line plot.
            let hue = 250.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.55, 0.6);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Series colour for the chart at `position` out of `count` charts.
pub fn series_color(position: usize, count: usize) -> Color32 {
    generate_palette(count)
        .get(position)
        .copied()
        .unwrap_or(Color32::LIGHT_BLUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        for i in 0..p.len() {
            for j in (i + 1)..p.len() {
                assert_ne!(p[i], p[j]);
            }
        }
    }

    #[test]
    fn out_of_range_position_falls_back() {
        assert_eq!(series_color(3, 2), Color32::LIGHT_BLUE);
    }
}

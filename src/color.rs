use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// UNCTAD brand colours, used for the first series.
pub const BRAND_COLORS: [Color32; 8] = [
    Color32::from_rgb(0x00, 0x77, 0xb8),
    Color32::from_rgb(0xab, 0x1d, 0x37),
    Color32::from_rgb(0x00, 0x53, 0x92),
    Color32::from_rgb(0xeb, 0x00, 0x45),
    Color32::from_rgb(0x9a, 0x58, 0xaf),
    Color32::from_rgb(0x27, 0x83, 0x3a),
    Color32::from_rgb(0x73, 0x3d, 0x96),
    Color32::from_rgb(0x7c, 0x70, 0x67),
];

/// Hue step between generated colours (golden angle), so neighbours differ
/// and a colour never depends on how many series follow it.
const HUE_STEP: f32 = 137.508;

/// Colour of the series at `index`: brand colours first, generated hues after.
pub fn series_color(index: usize) -> Color32 {
    if let Some(c) = BRAND_COLORS.get(index) {
        return *c;
    }
    let step = (index - BRAND_COLORS.len()) as f32;
    let hue = (step * HUE_STEP) % 360.0;
    let hsl = Hsl::new(hue, 0.65, 0.45);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Colours for `n` series in order.
pub fn series_colors(n: usize) -> Vec<Color32> {
    (0..n).map(series_color).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_colors_come_first() {
        let colors = series_colors(3);
        assert_eq!(colors, BRAND_COLORS[..3]);
    }

    #[test]
    fn generated_colors_extend_the_brand_set() {
        let colors = series_colors(20);
        assert_eq!(colors.len(), 20);
        assert_eq!(colors[..8], BRAND_COLORS);
        assert_ne!(colors[8], colors[9]);
        assert_eq!(series_color(12), colors[12]);
    }
}

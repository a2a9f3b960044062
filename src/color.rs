use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// Number of distinct series colors before the cycle repeats.
pub const PALETTE_LEN: usize = 10;

/// The fixed series palette: `PALETTE_LEN` evenly spaced hues.
///
/// Starts at blue so the first series come out in the familiar
/// blue-then-warm progression of most plotting tools.
pub fn series_palette() -> Vec<Color32> {
    (0..PALETTE_LEN)
        .map(|i| {
            let hue = (210.0 + (i as f32 / PALETTE_LEN as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Color for the series at `index`, wrapping around the palette.
pub fn series_color(palette: &[Color32], index: usize) -> Color32 {
    palette[index % palette.len()]
}

/// Color for a reference line, by 0-based field index (red, then green).
pub fn reference_color(index: usize) -> Color32 {
    if index == 0 {
        Color32::RED
    } else {
        Color32::GREEN
    }
}

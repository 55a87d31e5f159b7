use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color helpers
// ---------------------------------------------------------------------------

/// Opaque colour from an HSL triple (hue in degrees).
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Same colour at the given opacity (0.0–1.0).
pub fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    Color32::from_rgba_unmultiplied(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}

// ---------------------------------------------------------------------------
// Chart colour scheme
// ---------------------------------------------------------------------------

/// Colours shared by every chart so the legend reads the same everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartColors {
    pub band_fill: Color32,
    pub band_edge: Color32,
    pub reference: Color32,
    pub historical: Color32,
    pub forecast: Color32,
    pub connector: Color32,
    pub trend: Color32,
}

impl Default for ChartColors {
    fn default() -> Self {
        let band = hsl(210.0, 0.70, 0.55);
        let forecast = hsl(28.0, 0.85, 0.55);
        Self {
            band_fill: with_alpha(band, 0.15),
            band_edge: with_alpha(band, 0.35),
            reference: band,
            historical: hsl(210.0, 0.75, 0.45),
            forecast,
            connector: with_alpha(forecast, 0.6),
            trend: hsl(160.0, 0.60, 0.42),
        }
    }
}

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series label → Color32
// ---------------------------------------------------------------------------

/// One colour per series, assigned in header order so the legend reads like
/// a colour wheel.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    mapping: Vec<(String, Color32)>,
    default_color: Color32,
}

impl SeriesColors {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let mapping = labels
            .iter()
            .zip(generate_palette(labels.len()))
            .map(|(label, c)| (label.as_ref().to_string(), c))
            .collect();

        SeriesColors {
            mapping,
            default_color: Color32::LIGHT_BLUE,
        }
    }

    /// Look up the colour for a series label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }
}

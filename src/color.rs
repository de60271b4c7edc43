use std::collections::BTreeMap;

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
// Color mapping: region → Color32
// ---------------------------------------------------------------------------

/// Assigns each region a stable colour so chart series and filter labels
/// agree.
#[derive(Debug, Clone, Default)]
pub struct RegionColors {
    mapping: BTreeMap<String, Color32>,
}

impl RegionColors {
    /// Build the map from the dataset's full region list, so colours stay
    /// stable as the selection changes.
    pub fn new(regions: &[String]) -> Self {
        let palette = generate_palette(regions.len());
        let mapping = regions
            .iter()
            .cloned()
            .zip(palette)
            .collect();
        RegionColors { mapping }
    }

    /// Look up the colour for a region.
    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping.get(region).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size_matches_request() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn regions_get_distinct_stable_colors() {
        let regions = vec!["India".to_string(), "Kerala".to_string()];
        let colors = RegionColors::new(&regions);
        assert_ne!(colors.color_for("India"), colors.color_for("Kerala"));
        assert_eq!(colors.color_for("Unknown"), Color32::GRAY);
    }
}

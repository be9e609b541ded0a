use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Industry;

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
// Color mapping: industry → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per industry label, so a label keeps its colour whatever the
/// current filter selection is.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Industry, Color32>,
    default_color: Color32,
}

impl Default for ColorMap {
    fn default() -> Self {
        let named = &Industry::ALL[..Industry::ALL.len() - 1];
        let mapping = named
            .iter()
            .copied()
            .zip(generate_palette(named.len()))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl ColorMap {
    /// Look up the colour for an industry. `Other` gets the default colour.
    pub fn color_for(&self, industry: Industry) -> Color32 {
        self.mapping
            .get(&industry)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(10).len(), 10);
    }

    #[test]
    fn named_industries_get_distinct_colours() {
        let map = ColorMap::default();
        let mut colors: Vec<Color32> = Industry::ALL[..10]
            .iter()
            .map(|&i| map.color_for(i))
            .collect();
        colors.sort_by_key(|c| c.to_array());
        colors.dedup();
        assert_eq!(colors.len(), 10);
        assert_eq!(map.color_for(Industry::Other), Color32::GRAY);
    }
}

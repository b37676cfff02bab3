use eframe::egui::Color32;
use palette::{named, Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Named series colours
// ---------------------------------------------------------------------------

fn from_named(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// Main series colour (no cancer, single-series charts).
pub fn skyblue() -> Color32 {
    from_named(named::SKYBLUE)
}

/// Contrast series colour (cancer).
pub fn salmon() -> Color32 {
    from_named(named::SALMON)
}

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (210.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.55, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colours() {
        assert_eq!(skyblue(), Color32::from_rgb(135, 206, 235));
        assert_eq!(salmon(), Color32::from_rgb(250, 128, 114));
    }

    #[test]
    fn test_palette_is_distinct() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(3);
        assert_eq!(p.len(), 3);
        assert_ne!(p[0], p[1]);
        assert_ne!(p[1], p[2]);
    }
}

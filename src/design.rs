use image::Rgba;

/// Palette and proportions of the PodcastReady app icon.
///
/// Every length is a ratio of the edge (or glyph) size so the design renders
/// identically at any resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDesign {
    pub background: Rgba<u8>,
    pub accent: Rgba<u8>,
    pub glyph: Rgba<u8>,

    /// Accent circle radius, relative to the icon edge.
    pub circle_radius: f64,

    pub body_width: f64,
    pub body_height: f64,
    /// Downward shift of the body from the glyph centre.
    pub body_drop: f64,
    pub body_corner_radius: f64,

    pub hump_bottom_width: f64,
    pub hump_top_width: f64,
    pub hump_height: f64,
    /// Horizontal shift of the hump to the right of the glyph centre.
    pub hump_shift: f64,

    pub lens_radius: f64,
    /// Downward shift of the lens from the body's vertical middle.
    pub lens_drop: f64,
    pub inner_lens_radius: f64,

    pub glint_radius: f64,
    /// Up-left offset of the reflection dot from the lens centre.
    pub glint_offset: f64,
}

impl Default for IconDesign {
    fn default() -> Self {
        Self {
            background: Rgba([11, 11, 26, 255]),    // #0b0b1a
            accent: Rgba([167, 139, 250, 255]),     // #a78bfa
            glyph: Rgba([255, 255, 255, 255]),
            circle_radius: 0.38,
            body_width: 0.60,
            body_height: 0.42,
            body_drop: 0.04,
            body_corner_radius: 0.05,
            hump_bottom_width: 0.22,
            hump_top_width: 0.16,
            hump_height: 0.08,
            hump_shift: 0.02,
            lens_radius: 0.12,
            lens_drop: 0.01,
            inner_lens_radius: 0.07,
            glint_radius: 0.025,
            glint_offset: 0.02,
        }
    }
}

/// Scale a ratio to whole pixels, truncating toward zero.
#[inline]
pub fn scaled(size: u32, ratio: f64) -> i64 {
    (size as f64 * ratio) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_truncates() {
        assert_eq!(scaled(1024, 0.38), 389);
        assert_eq!(scaled(1024, 0.42), 430);
        assert_eq!(scaled(1024, 0.025), 25);
        assert_eq!(scaled(16, 0.025), 0);
    }

    #[test]
    fn test_default_palette_is_opaque() {
        let d = IconDesign::default();
        for c in [d.background, d.accent, d.glyph] {
            assert_eq!(c.0[3], 255);
        }
    }
}

//! Per-theme color palettes for the animated backdrop.

use ratatui::style::Color;

use crate::Theme;

/// Number of particle color slots in every palette.
pub const PARTICLE_COLORS: usize = 6;

/// An sRGB color with an alpha fraction in `0.0..=1.0`.
///
/// Terminal cells carry no alpha channel, so translucent colors are
/// composited over the theme backdrop at draw time via [`Rgba::over`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Terminal color of the rgb components alone, ignoring alpha.
    pub fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Composite this color over an opaque backdrop, yielding a terminal
    /// color.
    pub fn over(self, backdrop: Rgba) -> Color {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (f64::from(bg) + (f64::from(fg) - f64::from(bg)) * a) as u8;
        Color::Rgb(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }
}

/// Theme-specific color set for the backdrop.
#[derive(Debug, PartialEq)]
pub struct Palette {
    /// Opaque page background that translucent colors composite against.
    pub backdrop: Rgba,
    /// Ordered particle colors; a particle picks a slot once at reset and
    /// keeps it across theme switches.
    pub particles: [Rgba; PARTICLE_COLORS],
    /// Single color shared by every currency glyph.
    pub glyph: Rgba,
    /// Base color for proximity links; the alpha is recomputed per pair
    /// from the distance fade.
    pub link: Rgba,
}

static DARK: Palette = Palette {
    backdrop: Rgba::opaque(15, 23, 42),
    particles: [
        Rgba::new(34, 197, 94, 0.7),   // green
        Rgba::new(59, 130, 246, 0.7),  // blue
        Rgba::new(168, 85, 247, 0.7),  // purple
        Rgba::new(236, 72, 153, 0.7),  // pink
        Rgba::new(251, 146, 60, 0.7),  // orange
        Rgba::new(20, 184, 166, 0.7),  // teal
    ],
    glyph: Rgba::new(255, 193, 7, 0.6),
    link: Rgba::new(148, 163, 184, 0.15),
};

static LIGHT: Palette = Palette {
    backdrop: Rgba::opaque(248, 250, 252),
    particles: [
        Rgba::new(22, 163, 74, 0.6),   // green
        Rgba::new(37, 99, 235, 0.6),   // blue
        Rgba::new(147, 51, 234, 0.6),  // purple
        Rgba::new(219, 39, 119, 0.6),  // pink
        Rgba::new(234, 88, 12, 0.6),   // orange
        Rgba::new(13, 148, 136, 0.6),  // teal
    ],
    glyph: Rgba::new(202, 138, 4, 0.7),
    link: Rgba::new(71, 85, 105, 0.12),
};

impl Theme {
    /// Color set for this theme. Lookup never fails; unknown theme names
    /// were already folded into [`Theme::Dark`] by [`Theme::from_name`].
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_theme_gets_the_dark_palette() {
        let fallback = Theme::from_name("purple").palette();
        assert!(std::ptr::eq(fallback, Theme::Dark.palette()));
    }

    #[test]
    fn over_is_identity_at_full_alpha() {
        let fg = Rgba::new(10, 20, 30, 1.0);
        assert_eq!(fg.over(DARK.backdrop), Color::Rgb(10, 20, 30));
    }

    #[test]
    fn over_is_backdrop_at_zero_alpha() {
        let fg = Rgba::new(255, 255, 255, 0.0);
        assert_eq!(fg.over(DARK.backdrop), Color::Rgb(15, 23, 42));
    }

    #[test]
    fn over_mixes_toward_the_backdrop() {
        let Color::Rgb(r, g, b) = Rgba::new(255, 255, 255, 0.5).over(Rgba::opaque(0, 0, 0)) else {
            panic!("over always yields an rgb color");
        };
        assert_eq!((r, g, b), (127, 127, 127));
    }

    #[test]
    fn palettes_have_matching_slot_counts() {
        assert_eq!(DARK.particles.len(), LIGHT.particles.len());
    }
}

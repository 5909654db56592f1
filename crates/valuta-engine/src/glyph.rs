//! Drifting currency glyphs.

use std::f64::consts::TAU;

use rand::Rng;
use ratatui::style::{Style, Stylize};
use ratatui::text::Span;
use ratatui::widgets::canvas::Context;
use valuta_core::{Palette, SimulationConfig};

use crate::{Motion, Surface};

/// The two glyphs, chosen with equal probability at reset.
const SYMBOLS: [char; 2] = ['$', '€'];

/// A rotating currency glyph drifting inside the surface.
#[derive(Debug, Clone)]
pub struct CurrencyGlyph {
    motion: Motion,
    symbol: char,
    size: f64,
    rotation: f64,
    spin: f64,
}

impl CurrencyGlyph {
    /// Create a glyph in a freshly randomized state.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, surface: Surface, cfg: &SimulationConfig) -> Self {
        let mut glyph = Self {
            motion: Motion::default(),
            symbol: SYMBOLS[0],
            size: 0.0,
            rotation: 0.0,
            spin: 0.0,
        };
        glyph.reset(rng, surface, cfg);
        glyph
    }

    /// Re-randomize this slot in place.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, surface: Surface, cfg: &SimulationConfig) {
        self.motion = Motion::randomize(rng, surface, cfg.min_glyph_speed..=cfg.max_glyph_speed);
        self.symbol = SYMBOLS[rng.random_range(0..SYMBOLS.len())];
        self.size = rng.random_range(cfg.min_glyph_size..=cfg.max_glyph_size);
        self.rotation = rng.random_range(0.0..TAU);
        self.spin = rng.random_range(-cfg.max_spin..=cfg.max_spin);
    }

    /// Advance one tick; the glyph reflects with its font size as margin
    /// and accumulates rotation without bound (no wrapping needed).
    pub fn update(&mut self, surface: Surface) {
        self.motion.step(surface, self.size);
        self.rotation += self.spin;
    }

    pub fn pos(&self) -> (f64, f64) {
        (self.motion.x, self.motion.y)
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Font size; also the reflection margin.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Print the glyph bold at its position in the theme's glyph color.
    /// A terminal cell cannot be drawn rotated, so the glyph stays
    /// upright while the rotation state keeps accumulating.
    pub fn draw(&self, ctx: &mut Context<'_>, palette: &Palette) {
        let style = Style::new().fg(palette.glyph.over(palette.backdrop)).bold();
        ctx.print(
            self.motion.x,
            self.motion.y,
            Span::styled(self.symbol.to_string(), style),
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn reset_draws_symbol_size_and_spin_from_config() {
        let mut rng = StdRng::seed_from_u64(11);
        let surface = Surface::new(800.0, 480.0);
        let cfg = SimulationConfig::default();
        let mut seen_dollar = false;
        let mut seen_euro = false;
        for _ in 0..200 {
            let g = CurrencyGlyph::spawn(&mut rng, surface, &cfg);
            assert!((cfg.min_glyph_size..=cfg.max_glyph_size).contains(&g.size()));
            assert!(g.spin.abs() <= cfg.max_spin);
            match g.symbol() {
                '$' => seen_dollar = true,
                '€' => seen_euro = true,
                other => panic!("unexpected glyph {other:?}"),
            }
        }
        assert!(seen_dollar && seen_euro, "both glyphs should appear");
    }

    #[test]
    fn rotation_accumulates_spin_every_tick() {
        let mut rng = StdRng::seed_from_u64(3);
        let surface = Surface::new(800.0, 480.0);
        let cfg = SimulationConfig::default();
        let mut g = CurrencyGlyph::spawn(&mut rng, surface, &cfg);

        let start = g.rotation();
        let spin = g.spin;
        for _ in 0..10 {
            g.update(surface);
        }
        assert!((g.rotation() - (start + 10.0 * spin)).abs() < 1e-12);
    }
}

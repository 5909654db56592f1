//! The backdrop engine: entity pools, tick, and render.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::widgets::canvas::Context;
use valuta_core::{SimulationConfig, Theme};

use crate::{CurrencyGlyph, Particle, Surface, links};

/// Owns the fixed-size entity pools and the surface they bounce in.
///
/// Both pools are created once at construction and individual slots are
/// only ever re-randomized in place; nothing is allocated per frame.
/// [`Engine::tick`] advances the simulation, [`Engine::render`] paints
/// the current state, and the current [`Theme`] is passed in explicitly
/// on every render rather than read from ambient state.
#[derive(Debug)]
pub struct Engine {
    config: SimulationConfig,
    surface: Surface,
    particles: Vec<Particle>,
    glyphs: Vec<CurrencyGlyph>,
}

impl Engine {
    /// Build an engine with freshly randomized pools.
    ///
    /// `seed` pins the RNG for tests; `None` seeds from entropy.
    pub fn new(config: SimulationConfig, surface: Surface, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::seed_from_u64(rand::rng().random()),
        };
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(&mut rng, surface, &config))
            .collect();
        let glyphs = (0..config.glyph_count)
            .map(|_| CurrencyGlyph::spawn(&mut rng, surface, &config))
            .collect();
        Self {
            config,
            surface,
            particles,
            glyphs,
        }
    }

    /// Advance every particle, then every glyph, by one tick.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.update(self.surface);
        }
        for glyph in &mut self.glyphs {
            glyph.update(self.surface);
        }
    }

    /// Paint the current state onto a canvas: links first, then discs,
    /// then glyphs, so entities sit on top of the links.
    pub fn render(&self, ctx: &mut Context<'_>, theme: Theme) {
        let palette = theme.palette();
        links::draw(ctx, &self.particles, self.config.link_distance, palette);
        for particle in &self.particles {
            ctx.draw(&particle.disc(palette));
        }
        for glyph in &self.glyphs {
            glyph.draw(ctx, palette);
        }
    }

    /// Adopt new surface dimensions, e.g. after a terminal resize.
    /// Entities are not repositioned; one now outside the bounds is
    /// pulled back by its next boundary check.
    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    /// Convenience for terminal hosts: resize from a cell grid.
    pub fn resize_cells(&mut self, cols: u16, rows: u16) {
        self.set_surface(Surface::from_cells(cols, rows));
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn glyphs(&self) -> &[CurrencyGlyph] {
        &self.glyphs
    }
}

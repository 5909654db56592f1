//! Disc particles.

use rand::Rng;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};
use valuta_core::{PARTICLE_COLORS, Palette, SimulationConfig};

use crate::{Motion, Surface};

/// A colored disc bouncing inside the surface.
#[derive(Debug, Clone)]
pub struct Particle {
    motion: Motion,
    radius: f64,
    color_slot: usize,
}

impl Particle {
    /// Create a particle in a freshly randomized state.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, surface: Surface, cfg: &SimulationConfig) -> Self {
        let mut particle = Self {
            motion: Motion::default(),
            radius: 0.0,
            color_slot: 0,
        };
        particle.reset(rng, surface, cfg);
        particle
    }

    /// Re-randomize this slot in place: new position, heading, radius and
    /// color slot.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, surface: Surface, cfg: &SimulationConfig) {
        self.motion = Motion::randomize(rng, surface, cfg.min_speed..=cfg.max_speed);
        self.radius = rng.random_range(cfg.min_radius..=cfg.max_radius);
        self.color_slot = rng.random_range(0..PARTICLE_COLORS);
    }

    /// Advance one tick; the disc reflects with its radius as margin.
    pub fn update(&mut self, surface: Surface) {
        self.motion.step(surface, self.radius);
    }

    pub fn pos(&self) -> (f64, f64) {
        (self.motion.x, self.motion.y)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Palette slot chosen at reset. The slot never changes when the
    /// theme does; only the color resolved from it does.
    pub fn color_slot(&self) -> usize {
        self.color_slot
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Filled disc in this particle's slot color, ready to hand to a
    /// canvas.
    pub fn disc(&self, palette: &Palette) -> Disc {
        Disc {
            x: self.motion.x,
            y: self.motion.y,
            radius: self.radius,
            color: palette.particles[self.color_slot].over(palette.backdrop),
        }
    }
}

/// A filled disc, rasterized onto the canvas dot grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

/// Sample count across the disc's bounding square. At the largest
/// configured radius this keeps the sample spacing well under one braille
/// dot, so no interior dot is skipped.
const DISC_SAMPLES: usize = 12;

impl Shape for Disc {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let r = self.radius;
        if r <= 0.0 {
            return;
        }
        for i in 0..=DISC_SAMPLES {
            let dx = -r + 2.0 * r * i as f64 / DISC_SAMPLES as f64;
            for j in 0..=DISC_SAMPLES {
                let dy = -r + 2.0 * r * j as f64 / DISC_SAMPLES as f64;
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                if let Some((px, py)) = painter.get_point(self.x + dx, self.y + dy) {
                    painter.paint(px, py, self.color);
                }
            }
        }
    }
}

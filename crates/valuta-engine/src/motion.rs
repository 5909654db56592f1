//! Motion state shared by both entity variants.

use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::Surface;

/// Position and velocity of a backdrop entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Motion {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Motion {
    /// Uniform random position on the surface and a uniform random
    /// heading on the unit circle, with a speed drawn from `speed`.
    pub fn randomize<R: Rng + ?Sized>(
        rng: &mut R,
        surface: Surface,
        speed: RangeInclusive<f64>,
    ) -> Self {
        let heading = rng.random_range(0.0..TAU);
        let speed = rng.random_range(speed);
        Self {
            x: rng.random_range(0.0..=surface.width()),
            y: rng.random_range(0.0..=surface.height()),
            vx: heading.cos() * speed,
            vy: heading.sin() * speed,
        }
    }

    /// Advance one tick and reflect off the surface edges.
    ///
    /// One tick is one unit of simulated time. Each axis is handled
    /// independently: overshoot past a wall snaps back to the contact
    /// line at `margin` and that component's sign flips, so the speed
    /// magnitude is preserved exactly, corners included.
    pub fn step(&mut self, surface: Surface, margin: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x - margin <= 0.0 {
            self.x = margin;
            self.vx = -self.vx;
        } else if self.x + margin >= surface.width() {
            self.x = surface.width() - margin;
            self.vx = -self.vx;
        }

        if self.y - margin <= 0.0 {
            self.y = margin;
            self.vy = -self.vy;
        } else if self.y + margin >= surface.height() {
            self.y = surface.height() - margin;
            self.vy = -self.vy;
        }
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

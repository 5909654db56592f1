//! Simulation tuning knobs.

use serde::{Deserialize, Serialize};

/// Fixed-for-the-run tuning of the backdrop simulation, supplied to the
/// engine once at construction.
///
/// Dimensions are in surface pixels (the engine maps terminal cells to an
/// approximate pixel space) and speeds are in pixels per tick. Every field
/// defaults, so a partial config file deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of disc particles in the pool.
    pub particle_count: usize,
    /// Number of drifting currency glyphs.
    pub glyph_count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Glyphs drift slower than discs.
    pub min_glyph_speed: f64,
    pub max_glyph_speed: f64,
    pub min_glyph_size: f64,
    pub max_glyph_size: f64,
    /// Upper bound on a glyph's |rotation speed| in radians per tick.
    pub max_spin: f64,
    /// Particles closer than this are joined by a proximity link.
    pub link_distance: f64,
    /// Link stroke width; the braille painter draws hairlines regardless.
    pub link_width: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            glyph_count: 12,
            min_radius: 3.0,
            max_radius: 8.0,
            min_speed: 0.3,
            max_speed: 1.2,
            min_glyph_speed: 0.2,
            max_glyph_speed: 0.7,
            min_glyph_size: 14.0,
            max_glyph_size: 30.0,
            max_spin: 0.01,
            link_distance: 150.0,
            link_width: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pools_are_nonempty() {
        let cfg = SimulationConfig::default();
        assert!(cfg.particle_count > 0);
        assert!(cfg.glyph_count > 0);
    }

    #[test]
    fn default_ranges_are_ordered() {
        let cfg = SimulationConfig::default();
        assert!(cfg.min_radius <= cfg.max_radius);
        assert!(cfg.min_speed <= cfg.max_speed);
        assert!(cfg.min_glyph_speed <= cfg.max_glyph_speed);
        assert!(cfg.min_glyph_size <= cfg.max_glyph_size);
        assert!(cfg.max_spin >= 0.0);
        assert!(cfg.link_distance > 0.0);
    }
}

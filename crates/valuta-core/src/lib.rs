//! Core types shared across the valuta crates.
//!
//! This crate holds the theme identity, the per-theme color palettes, and
//! the simulation tuning knobs, so the engine, the config layer, and the
//! binary all agree on them without depending on each other.

mod config;
mod palette;
mod theme;

pub use config::SimulationConfig;
pub use palette::{PARTICLE_COLORS, Palette, Rgba};
pub use theme::Theme;

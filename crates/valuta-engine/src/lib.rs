//! Animated backdrop for the valuta terminal app.
//!
//! A field of bouncing discs and drifting currency glyphs, joined by
//! distance-faded proximity links, drawn onto a ratatui canvas behind the
//! page content. Simulation ([`Engine::tick`]) and painting
//! ([`Engine::render`]) are separate steps so the simulation can run
//! headless in tests.

mod engine;
mod glyph;
mod links;
mod motion;
mod particle;
mod surface;

pub use engine::Engine;
pub use glyph::CurrencyGlyph;
pub use links::{DAMPENING, link_alpha};
pub use motion::Motion;
pub use particle::{Disc, Particle};
pub use surface::Surface;

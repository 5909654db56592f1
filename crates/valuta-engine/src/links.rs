//! Proximity links between nearby particles.

use ratatui::widgets::canvas::{Context, Line};
use valuta_core::Palette;

use crate::Particle;

/// Fixed dampening applied to the distance fade before it becomes a
/// link's alpha.
pub const DAMPENING: f64 = 0.3;

/// Alpha for a link between particles `distance` apart, or `None` when
/// they are too far apart to join.
///
/// Fades linearly from [`DAMPENING`] at distance zero down to exactly
/// zero at the threshold; at or beyond the threshold no link is drawn.
pub fn link_alpha(distance: f64, threshold: f64) -> Option<f64> {
    if distance < threshold {
        Some((1.0 - distance / threshold) * DAMPENING)
    } else {
        None
    }
}

/// Join every pair of particles within the threshold with a straight
/// line, faded with distance. Glyphs never join. The scan is the plain
/// O(n²/2) pair walk; fine at the configured pool sizes.
pub fn draw(ctx: &mut Context<'_>, particles: &[Particle], threshold: f64, palette: &Palette) {
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let (ax, ay) = a.pos();
            let (bx, by) = b.pos();
            let distance = (ax - bx).hypot(ay - by);
            if let Some(alpha) = link_alpha(distance, threshold) {
                let color = palette.link.with_alpha(alpha).over(palette.backdrop);
                ctx.draw(&Line::new(ax, ay, bx, by, color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 150.0;

    #[test]
    fn alpha_is_maximal_at_zero_distance() {
        assert_eq!(link_alpha(0.0, THRESHOLD), Some(DAMPENING));
    }

    #[test]
    fn alpha_is_monotonically_non_increasing() {
        let mut last = f64::INFINITY;
        let mut d = 0.0;
        while d < THRESHOLD {
            let a = link_alpha(d, THRESHOLD).expect("inside threshold");
            assert!(a <= last, "alpha rose between {d} and the previous step");
            last = a;
            d += 0.1;
        }
    }

    #[test]
    fn alpha_vanishes_at_and_past_the_threshold() {
        assert_eq!(link_alpha(THRESHOLD, THRESHOLD), None);
        assert_eq!(link_alpha(THRESHOLD + 50.0, THRESHOLD), None);

        // Just inside, the fade is nearly but not quite zero.
        let a = link_alpha(149.9, THRESHOLD).expect("still inside");
        assert!(a > 0.0);
        assert!((a - (1.0 - 149.9 / 150.0) * DAMPENING).abs() < 1e-12);
    }
}

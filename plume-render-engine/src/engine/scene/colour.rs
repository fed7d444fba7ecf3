//! Two-segment concentration colour ramp: blue through green to red.

use bevy::prelude::*;

/// Map a normalised value in `[0, 1]` onto the ramp. Below the midpoint the
/// colour blends blue to green, above it green to red; the two segments meet
/// at pure green.
pub fn colour_ramp(norm: f32) -> [f32; 3] {
    if norm < 0.5 {
        let t = norm / 0.5;
        [0.0, t, 1.0 - t]
    } else {
        let t = (norm - 0.5) / 0.5;
        [t, 1.0 - t, 0.0]
    }
}

/// Colour for a concentration value, saturating at `max_concentration`.
pub fn concentration_to_colour(concentration: f32, max_concentration: f32) -> Color {
    let norm = (concentration / max_concentration).min(1.0);
    let [r, g, b] = colour_ramp(norm);
    Color::srgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_blue() {
        assert_eq!(colour_ramp(0.0), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn midpoint_is_green() {
        assert_eq!(colour_ramp(0.5), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn full_is_red() {
        assert_eq!(colour_ramp(1.0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn ramp_is_continuous_at_the_midpoint() {
        let below = colour_ramp(0.5 - 1e-4);
        let above = colour_ramp(0.5);
        for channel in 0..3 {
            assert!((below[channel] - above[channel]).abs() < 1e-3);
        }
    }

    #[test]
    fn concentration_saturates_at_max() {
        let at_max = concentration_to_colour(2.0, 2.0);
        let beyond = concentration_to_colour(5.0, 2.0);
        assert_eq!(at_max, beyond);
    }
}

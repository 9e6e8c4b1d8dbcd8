//! Small helpers layered on top of `glam`.

use glam::{IVec2, Vec2};

/// Rounds a floating-point position to the nearest pixel.
pub fn to_pixel(position: Vec2) -> IVec2 {
    position.round().as_ivec2()
}

/// Mass of a solid disc-like body proportional to `r^3`.
pub fn volume_mass(factor: f32, radius: f32) -> f32 {
    factor * radius * radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pixel_rounds_half_away_from_zero() {
        assert_eq!(to_pixel(Vec2::new(10.5, -3.5)), IVec2::new(11, -4));
        assert_eq!(to_pixel(Vec2::new(10.49, 7.51)), IVec2::new(10, 8));
    }
}

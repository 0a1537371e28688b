//! 2D vector helpers for the collision frame

use glam::Vec2;

/// Rotate a vector by `angle` radians (counter-clockwise for positive angles)
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b.x - a.x).hypot(b.y - a.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(Vec2::new(1.0, 0.0), FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_half_turn() {
        let v = rotate(Vec2::new(3.0, -4.0), PI);
        assert!((v.x + 3.0).abs() < 1e-5);
        assert!((v.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)) - 5.0).abs() < 1e-6);
        assert_eq!(distance(Vec2::ZERO, Vec2::ZERO), 0.0);
    }

    proptest! {
        #[test]
        fn rotate_then_unrotate_is_identity(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            angle in -10.0f32..10.0,
        ) {
            let v = Vec2::new(x, y);
            let back = rotate(rotate(v, angle), -angle);
            prop_assert!((back - v).length() < 1e-3);
        }

        #[test]
        fn rotate_preserves_length(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            angle in -10.0f32..10.0,
        ) {
            let v = Vec2::new(x, y);
            prop_assert!((rotate(v, angle).length() - v.length()).abs() < 1e-3);
        }
    }
}

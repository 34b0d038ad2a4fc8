//! Facing basis and look-relative velocity.
//! Decomposes world velocity onto the character's yaw-aligned axes.
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Horizontal facing of the character, expressed as a yaw in degrees.
///
/// Yaw `0` looks down `+Z` with `+X` to the right; positive yaw turns
/// clockwise when viewed from above. World up is `+Y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    /// Yaw in degrees; any value is accepted and wraps naturally.
    pub yaw_degrees: f32,
}

impl Facing {
    /// Facing at `yaw_degrees`.
    #[must_use]
    pub const fn new(yaw_degrees: f32) -> Self {
        Self { yaw_degrees }
    }

    /// Unit vector the character looks along, flattened to the ground plane.
    ///
    /// # Examples
    /// ```
    /// use strider::look::Facing;
    /// let forward = Facing::new(90.0).forward();
    /// assert!((forward.x - 1.0).abs() < 1e-6);
    /// assert!(forward.z.abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn forward(self) -> Vec3 {
        let (sin, cos) = self.yaw_degrees.to_radians().sin_cos();
        Vec3::new(sin, 0.0, cos)
    }

    /// Unit vector to the character's right.
    #[must_use]
    pub fn right(self) -> Vec3 {
        let (sin, cos) = self.yaw_degrees.to_radians().sin_cos();
        Vec3::new(cos, 0.0, -sin)
    }
}

/// Shortest signed difference `to - from` in degrees, wrapped to `(-180, 180]`.
///
/// # Examples
/// ```
/// use strider::look::delta_angle;
/// assert!((delta_angle(350.0, 10.0) - 20.0).abs() < 1e-4);
/// assert!((delta_angle(10.0, 350.0) + 20.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn delta_angle(from: f32, to: f32) -> f32 {
    let wrapped = (to - from).rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Projects `velocity` onto the facing axes.
///
/// Returns `(lateral, forward)` magnitudes. The vertical component is not
/// removed before taking the magnitude, so a falling body reports a larger
/// horizontal projection; the speed caps rely on that behaviour.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use strider::look::{look_relative_velocity, Facing};
/// let rel = look_relative_velocity(Vec3::new(0.0, 0.0, 5.0), Facing::new(0.0));
/// assert!((rel.y - 5.0).abs() < 1e-5);
/// assert!(rel.x.abs() < 1e-5);
/// ```
#[must_use]
pub fn look_relative_velocity(velocity: Vec3, facing: Facing) -> Vec2 {
    let move_angle = velocity.x.atan2(velocity.z).to_degrees();
    let u = delta_angle(facing.yaw_degrees, move_angle);
    let v = 90.0 - u;

    let magnitude = velocity.length();
    let forward = magnitude * u.to_radians().cos();
    let lateral = magnitude * v.to_radians().cos();
    Vec2::new(lateral, forward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::ahead(0.0, 0.0, 1.0)]
    #[case::quarter_turn(90.0, 1.0, 0.0)]
    #[case::behind(180.0, 0.0, -1.0)]
    fn forward_follows_yaw(#[case] yaw: f32, #[case] x: f32, #[case] z: f32) {
        let forward = Facing::new(yaw).forward();
        assert_relative_eq!(forward.x, x, epsilon = 1e-6);
        assert_relative_eq!(forward.z, z, epsilon = 1e-6);
    }

    #[rstest]
    fn right_is_perpendicular_to_forward() {
        for yaw in [0.0, 33.0, 90.0, 211.0] {
            let facing = Facing::new(yaw);
            assert_relative_eq!(facing.forward().dot(facing.right()), 0.0, epsilon = 1e-6);
            assert_relative_eq!(facing.forward().cross(facing.right()).y, 1.0, epsilon = 1e-6);
        }
    }

    #[rstest]
    #[case::wraps_positive(170.0, -170.0, 20.0)]
    #[case::wraps_negative(-170.0, 170.0, -20.0)]
    #[case::half_turn(0.0, 180.0, 180.0)]
    #[case::identity(42.0, 42.0, 0.0)]
    fn delta_angle_cases(#[case] from: f32, #[case] to: f32, #[case] expected: f32) {
        assert_relative_eq!(delta_angle(from, to), expected, epsilon = 1e-4);
    }

    #[rstest]
    fn zero_velocity_projects_to_zero() {
        let rel = look_relative_velocity(Vec3::ZERO, Facing::new(45.0));
        assert_eq!(rel, Vec2::ZERO);
    }

    #[rstest]
    #[case::strafing_right(Vec3::X * 4.0, 0.0, 4.0, 0.0)]
    #[case::backpedalling(Vec3::NEG_Z * 2.0, 0.0, 0.0, -2.0)]
    #[case::turned_toward_motion(Vec3::X * 3.0, 90.0, 0.0, 3.0)]
    #[case::diagonal(Vec3::new(3.0, 0.0, 4.0), 0.0, 3.0, 4.0)]
    fn projection_splits_lateral_and_forward(
        #[case] velocity: Vec3,
        #[case] yaw: f32,
        #[case] lateral: f32,
        #[case] forward: f32,
    ) {
        let rel = look_relative_velocity(velocity, Facing::new(yaw));
        assert_relative_eq!(rel.x, lateral, epsilon = 1e-4);
        assert_relative_eq!(rel.y, forward, epsilon = 1e-4);
    }

    #[rstest]
    fn projection_is_pure() {
        let velocity = Vec3::new(3.0, -1.0, 4.0);
        let facing = Facing::new(12.0);
        assert_eq!(
            look_relative_velocity(velocity, facing),
            look_relative_velocity(velocity, facing)
        );
    }
}

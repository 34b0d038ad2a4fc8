//! Point-mass rigid body for the reference simulation.

use glam::Vec3;
use serde::Serialize;

use crate::constants::{DEFAULT_MASS, GRAVITY_PULL};
use crate::physics::{ForceMode, RigidBody};

/// Masses at or below this are treated as missing.
const MIN_MASS: f32 = 1e-6;

/// `F = m a` solved for `a`.
///
/// A mass at or below `MIN_MASS` yields `None`; an absent mass falls back
/// to [`DEFAULT_MASS`].
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use strider::sim::applied_acceleration;
/// let a = applied_acceleration(Vec3::new(7.0, -14.0, 21.0), Some(7.0)).unwrap();
/// assert!((a - Vec3::new(1.0, -2.0, 3.0)).length() < 1e-6);
/// assert!(applied_acceleration(Vec3::ONE, Some(0.0)).is_none());
/// ```
#[must_use]
pub fn applied_acceleration(force: Vec3, mass: Option<f32>) -> Option<Vec3> {
    match mass {
        Some(m) if m > MIN_MASS => Some(force / m),
        Some(_) => None,
        None => Some(force / DEFAULT_MASS),
    }
}

/// Axis-aligned box body integrated with semi-implicit Euler.
///
/// Continuous forces accumulate until [`SimBody::integrate`]; impulses change
/// the velocity immediately and are logged so callers can count them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimBody {
    position: Vec3,
    velocity: Vec3,
    half_extents: Vec3,
    mass: f32,
    drag: f32,
    gravity_enabled: bool,
    pending_force: Vec3,
    impulses: Vec<Vec3>,
}

impl SimBody {
    /// A standing character: 0.8 wide and 2 tall, centred on `position`.
    #[must_use]
    pub const fn character(position: Vec3) -> Self {
        Self::new(position, Vec3::new(0.4, 1.0, 0.4))
    }

    /// Body at rest at `position` with default mass and no drag.
    #[must_use]
    pub const fn new(position: Vec3, half_extents: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            half_extents,
            mass: DEFAULT_MASS,
            drag: 0.0,
            gravity_enabled: true,
            pending_force: Vec3::ZERO,
            impulses: Vec::new(),
        }
    }

    /// Half the box size on each axis.
    #[must_use]
    pub const fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Mass in kilograms.
    #[must_use]
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    /// Linear drag coefficient, never negative.
    #[must_use]
    pub const fn drag(&self) -> f32 {
        self.drag
    }

    /// Whether gravity pulls on the body.
    #[must_use]
    pub const fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    /// Teleports the body; velocity is untouched.
    pub const fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Impulses received since the body was created.
    #[must_use]
    pub fn impulses(&self) -> &[Vec3] {
        &self.impulses
    }

    /// Advances the body by `dt` seconds and clears the accumulated force.
    ///
    /// Forces are ignored while the mass is unusable.
    pub fn integrate(&mut self, dt: f32) {
        let mut acceleration =
            applied_acceleration(self.pending_force, Some(self.mass)).unwrap_or(Vec3::ZERO);
        if self.gravity_enabled {
            acceleration.y += GRAVITY_PULL;
        }
        self.velocity += acceleration * dt;
        self.velocity *= 1.0 / (1.0 + self.drag * dt);
        self.position += self.velocity * dt;
        self.pending_force = Vec3::ZERO;
    }
}

impl RigidBody for SimBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn apply_force(&mut self, force: Vec3, mode: ForceMode) {
        match mode {
            ForceMode::Continuous => self.pending_force += force,
            ForceMode::Impulse => {
                if let Some(delta) = applied_acceleration(force, Some(self.mass)) {
                    self.velocity += delta;
                }
                self.impulses.push(force);
            }
        }
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    fn set_drag(&mut self, drag: f32) {
        self.drag = drag.max(0.0);
    }

    fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;
    use test_utils::assert_vec3_near;

    #[rstest]
    #[case::explicit_mass(
        Vec3::new(7.0, -14.0, 21.0),
        Some(7.0),
        Some(Vec3::new(1.0, -2.0, 3.0))
    )]
    #[case::default_mass(Vec3::new(2.0, 0.0, 0.0), None, Some(Vec3::new(2.0, 0.0, 0.0)))]
    #[case::zero_mass(Vec3::ONE, Some(0.0), None)]
    #[case::negative_mass(Vec3::ONE, Some(-5.0), None)]
    fn acceleration_cases(
        #[case] force: Vec3,
        #[case] mass: Option<f32>,
        #[case] expected: Option<Vec3>,
    ) {
        match (applied_acceleration(force, mass), expected) {
            (Some(a), Some(e)) => assert_vec3_near(a, e, 1e-6),
            (None, None) => {}
            (a, e) => panic!("mismatch: {a:?} vs {e:?}"),
        }
    }

    #[rstest]
    fn free_fall_follows_gravity() {
        let mut body = SimBody::character(Vec3::ZERO);
        body.integrate(0.5);
        assert_relative_eq!(body.velocity().y, GRAVITY_PULL * 0.5);
        assert_relative_eq!(body.position().y, GRAVITY_PULL * 0.25);
    }

    #[rstest]
    fn drag_damps_velocity() {
        let mut body = SimBody::character(Vec3::ZERO);
        body.set_gravity_enabled(false);
        body.set_drag(-3.0);
        assert_eq!(body.drag(), 0.0);
        body.set_drag(1.0);
        body.set_velocity(Vec3::X * 2.0);
        body.integrate(1.0);
        assert_relative_eq!(body.velocity().x, 1.0);
    }

    #[rstest]
    fn impulses_apply_immediately_and_are_logged() {
        let mut body = SimBody::character(Vec3::ZERO);
        body.set_mass(2.0);
        assert_eq!(body.mass(), 2.0);
        body.apply_force(Vec3::Y * 4.0, ForceMode::Impulse);
        assert_relative_eq!(body.velocity().y, 2.0);
        assert_eq!(body.impulses(), &[Vec3::Y * 4.0]);
    }

    #[rstest]
    fn continuous_forces_clear_after_integration() {
        let mut body = SimBody::character(Vec3::ZERO);
        body.set_gravity_enabled(false);
        body.apply_force(Vec3::X, ForceMode::Continuous);
        body.integrate(1.0);
        body.integrate(1.0);
        assert_relative_eq!(body.velocity().x, 1.0);
    }
}

//! Capability interfaces for the rigid body and the collision world.
//!
//! The controller never owns the body it drives. Engines integrate the body
//! between ticks and expose it through [`RigidBody`]; geometry queries are
//! answered through [`SpatialQuery`]. Both seams are total: a query that
//! finds nothing returns `None` or `false` rather than an error.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bit set selecting collision layers for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: Self = Self(0);
    /// Walkable floors, ramps and steps.
    pub const GROUND: Self = Self(1 << 0);
    /// Surfaces that support wall-running, climbing and vaulting.
    pub const WALL: Self = Self(1 << 1);

    /// Returns `true` when any layer is shared with `other`.
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// No layer is selected.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// How a force passed to [`RigidBody::apply_force`] is integrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceMode {
    /// Accumulated and integrated over the next physics step, scaled by mass.
    Continuous,
    /// Applied instantly as a change in momentum.
    Impulse,
}

/// Nearest intersection reported by a ray query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
    /// Outward normal of the surface that was hit.
    pub normal: Vec3,
}

/// Dynamic body driven by the controller.
pub trait RigidBody {
    /// World-space centre of the body.
    fn position(&self) -> Vec3;
    /// Current linear velocity.
    fn velocity(&self) -> Vec3;
    /// Overwrites the velocity; used to zero components on wall-run and
    /// climb entry.
    fn set_velocity(&mut self, velocity: Vec3);
    /// Queues `force` for integration according to `mode`.
    fn apply_force(&mut self, force: Vec3, mode: ForceMode);
    /// Switches the engine's own gravity on or off.
    fn set_gravity_enabled(&mut self, enabled: bool);
    /// Linear drag coefficient.
    fn set_drag(&mut self, drag: f32);
    /// Body mass in kilograms.
    fn set_mass(&mut self, mass: f32);
}

/// Layered geometry queries against the static world.
#[cfg_attr(test, mockall::automock)]
pub trait SpatialQuery {
    /// Casts a ray from `origin` along the unit vector `direction`.
    ///
    /// Rays starting inside a solid do not report that solid.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;

    /// Returns `true` when a sphere at `center` overlaps any solid in `mask`.
    fn sphere_overlap(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::same(LayerMask::GROUND, LayerMask::GROUND, true)]
    #[case::disjoint(LayerMask::GROUND, LayerMask::WALL, false)]
    #[case::combined(LayerMask::GROUND | LayerMask::WALL, LayerMask::WALL, true)]
    #[case::empty(LayerMask::NONE, LayerMask::WALL, false)]
    fn layer_intersection(#[case] a: LayerMask, #[case] b: LayerMask, #[case] expected: bool) {
        assert_eq!(a.intersects(b), expected);
    }

    #[rstest]
    fn mask_deserialises_from_plain_integer() {
        #[derive(Deserialize)]
        struct Wrapper {
            mask: LayerMask,
        }
        let parsed: Wrapper = toml::from_str("mask = 3").expect("mask should parse");
        assert_eq!(parsed.mask, LayerMask::GROUND | LayerMask::WALL);
    }
}

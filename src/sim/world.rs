//! Static level geometry made of axis-aligned boxes.
//!
//! [`BoxWorld`] answers the probe queries of [`SpatialQuery`] and pushes
//! bodies out of solids after integration. Rays that start inside a box do
//! not report that box, matching the behaviour engines use for whiskers.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::{LayerMask, RayHit, RigidBody, SpatialQuery};
use crate::sim::body::SimBody;

const AXES: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

/// Axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Lowest corner.
    pub min: Vec3,
    /// Highest corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning the two corners in any order.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box of `half_extents` around `center`.
    #[must_use]
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Point of the box nearest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Slab test. Returns the entry distance along `direction` and the
    /// outward normal of the face that was hit.
    #[must_use]
    pub fn ray_entry(&self, origin: Vec3, direction: Vec3) -> Option<(f32, Vec3)> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in AXES {
            let o = origin.dot(axis);
            let d = direction.dot(axis);
            let (lo, hi) = (self.min.dot(axis), self.max.dot(axis));
            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let (near, far, face) = if d > 0.0 {
                ((lo - o) / d, (hi - o) / d, -1.0)
            } else {
                ((hi - o) / d, (lo - o) / d, 1.0)
            };
            if near > t_enter {
                t_enter = near;
                normal = axis * face;
            }
            t_exit = t_exit.min(far);
        }

        (t_enter <= t_exit && t_enter >= 0.0).then_some((t_enter, normal))
    }

    /// The interiors overlap; touching faces do not count.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.cmplt(other.max).all() && self.max.cmpgt(other.min).all()
    }
}

/// A box tagged with the layers it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    /// Extent of the solid.
    pub bounds: Aabb,
    /// Layers the solid answers queries for.
    pub layer: LayerMask,
}

/// Level made of static boxes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxWorld {
    solids: Vec<Solid>,
}

impl BoxWorld {
    /// World with no solids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a solid and returns the world for chaining.
    #[must_use]
    pub fn with(mut self, bounds: Aabb, layer: LayerMask) -> Self {
        self.push(bounds, layer);
        self
    }

    /// Adds a solid in place.
    pub fn push(&mut self, bounds: Aabb, layer: LayerMask) {
        self.solids.push(Solid { bounds, layer });
    }

    /// Every solid in insertion order.
    #[must_use]
    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }

    /// Pushes `body` out of every solid it overlaps along the axis of least
    /// penetration and removes the velocity component driving it inward.
    ///
    /// Returns `true` when any correction was made.
    pub fn resolve(&self, body: &mut SimBody) -> bool {
        let mut corrected = false;
        for solid in &self.solids {
            let half = body.half_extents();
            let position = body.position();
            let bounds = Aabb::from_center(position, half);
            if !bounds.intersects(&solid.bounds) {
                continue;
            }

            let push_pos = solid.bounds.max - bounds.min;
            let push_neg = bounds.max - solid.bounds.min;
            let mut best_axis = Vec3::X;
            let mut best = f32::INFINITY;
            let mut sign = 1.0;
            for axis in AXES {
                let outward = push_pos.dot(axis);
                let inward = push_neg.dot(axis);
                if outward < best {
                    best = outward;
                    best_axis = axis;
                    sign = 1.0;
                }
                if inward < best {
                    best = inward;
                    best_axis = axis;
                    sign = -1.0;
                }
            }

            let push = best_axis * (sign * best);
            body.set_position(position + push);

            let velocity = body.velocity();
            let along = velocity.dot(best_axis);
            if along * sign < 0.0 {
                body.set_velocity(velocity - best_axis * along);
            }
            corrected = true;
        }
        corrected
    }
}

impl SpatialQuery for BoxWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let unit = direction.try_normalize()?;
        self.solids
            .iter()
            .filter(|solid| solid.layer.intersects(mask))
            .filter_map(|solid| solid.bounds.ray_entry(origin, unit))
            .filter(|(distance, _)| *distance <= max_distance)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(distance, normal)| RayHit {
                distance,
                point: origin + unit * distance,
                normal,
            })
    }

    fn sphere_overlap(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        self.solids
            .iter()
            .filter(|solid| solid.layer.intersects(mask))
            .any(|solid| {
                solid.bounds.closest_point(center).distance_squared(center) <= radius * radius
            })
    }
}

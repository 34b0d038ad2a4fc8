//! Surface classification from ground checks and whisker rays.
//!
//! A [`SurfaceProbe`] runs once per frame and overwrites the previous
//! [`SurfaceContacts`]. Whiskers are short rays cast from a low and a high
//! probe point: an obstacle that stops the low whisker but not the high one
//! is either a slope (ground layer) or a ledge worth vaulting (wall layer).

use glam::Vec3;
use serde::Serialize;

use crate::config::LocomotionConfig;
use crate::input::Intent;
use crate::look::Facing;
use crate::physics::{LayerMask, SpatialQuery};

/// Contact predicates derived from one probe pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SurfaceContacts {
    /// The feet sphere overlaps ground or wall geometry.
    pub grounded: bool,
    /// A ground-layer rise ahead stops the low whisker only.
    pub on_slope: bool,
    /// Wall geometry within reach on the facing left.
    pub wall_left: bool,
    /// Wall geometry within reach on the facing right.
    pub wall_right: bool,
    /// Wall geometry within reach straight ahead.
    pub wall_in_front: bool,
    /// A knee-high wall-layer ledge lies in the pushed direction.
    pub should_auto_vault: bool,
}

impl SurfaceContacts {
    /// Exactly one side wall is present.
    #[must_use]
    pub const fn single_wall(&self) -> bool {
        self.wall_left != self.wall_right
    }
}

/// Probe geometry and layer selection for a character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProbe {
    ground_radius: f32,
    range: f32,
    feet_offset: f32,
    centre_offset: f32,
    low_offset: f32,
    high_offset: f32,
    ground_layer: LayerMask,
    wall_layer: LayerMask,
}

impl SurfaceProbe {
    /// Copies the probe offsets, reach and layers out of `config`.
    #[must_use]
    pub const fn from_config(config: &LocomotionConfig) -> Self {
        Self {
            ground_radius: config.ground_dist,
            range: config.whisker_range,
            feet_offset: config.feet_offset,
            centre_offset: config.centre_offset,
            low_offset: config.low_whisker_offset,
            high_offset: config.high_whisker_offset,
            ground_layer: config.ground_layer,
            wall_layer: config.wall_layer,
        }
    }

    /// Classifies the surroundings of a body at `position`.
    ///
    /// Vaulting only fires while `intent` pushes toward the detected ledge.
    #[must_use]
    pub fn scan<Q: SpatialQuery + ?Sized>(
        &self,
        world: &Q,
        position: Vec3,
        facing: Facing,
        intent: &Intent,
    ) -> SurfaceContacts {
        let feet = position + Vec3::Y * self.feet_offset;
        let centre = position + Vec3::Y * self.centre_offset;
        let low = position + Vec3::Y * self.low_offset;
        let high = position + Vec3::Y * self.high_offset;
        let forward = facing.forward();
        let right = facing.right();

        let hits = |origin: Vec3, direction: Vec3, mask: LayerMask| {
            world.raycast(origin, direction, self.range, mask).is_some()
        };
        // Low whisker blocked while the high whisker sees past the obstacle.
        let ledge = |direction: Vec3, mask: LayerMask| {
            hits(low, direction, mask) && !hits(high, direction, mask)
        };

        let grounded = world.sphere_overlap(feet, self.ground_radius, self.ground_layer)
            || world.sphere_overlap(feet, self.ground_radius, self.wall_layer);

        let on_slope = ledge(forward, self.ground_layer);

        let wall_right = hits(centre, right, self.wall_layer);
        let wall_left = hits(centre, -right, self.wall_layer);
        let wall_in_front = hits(centre, forward, self.wall_layer);

        let should_auto_vault = (intent.lateral > 0.0 && ledge(right, self.wall_layer))
            || (intent.lateral < 0.0 && ledge(-right, self.wall_layer))
            || (intent.forward > 0.0 && ledge(forward, self.wall_layer));

        SurfaceContacts {
            grounded,
            on_slope,
            wall_left,
            wall_right,
            wall_in_front,
            should_auto_vault,
        }
    }
}

//! Ready-made test courses.
//!
//! Every course has a ground floor whose top face sits at `y = 0`, and a
//! spawn point that rests a [`SimBody::character`](crate::sim::SimBody::character)
//! on it facing `+Z`.

use glam::Vec3;
use serde::Serialize;

use crate::physics::LayerMask;
use crate::sim::world::{Aabb, BoxWorld};

/// Body centre for a character standing on the floor.
pub const SPAWN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Named course layouts, selectable from the demo binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Course {
    /// See [`flat`].
    Flat,
    /// See [`wall_run_lane`].
    WallRunLane,
    /// See [`climb_wall`].
    ClimbWall,
    /// See [`vault_ledge`].
    VaultLedge,
    /// See [`corridor`].
    Corridor,
    /// See [`slope_step`].
    SlopeStep,
}

impl Course {
    /// Geometry for this layout.
    #[must_use]
    pub fn build(self) -> BoxWorld {
        match self {
            Self::Flat => flat(),
            Self::WallRunLane => wall_run_lane(),
            Self::ClimbWall => climb_wall(),
            Self::VaultLedge => vault_ledge(),
            Self::Corridor => corridor(),
            Self::SlopeStep => slope_step(),
        }
    }
}

/// Nothing but the floor.
#[must_use]
pub fn flat() -> BoxWorld {
    BoxWorld::new().with(
        Aabb::new(Vec3::new(-500.0, -1.0, -500.0), Vec3::new(500.0, 0.0, 500.0)),
        LayerMask::GROUND,
    )
}

/// A long wall 0.8 to the right of the spawn point.
#[must_use]
pub fn wall_run_lane() -> BoxWorld {
    flat().with(
        Aabb::new(Vec3::new(0.8, 0.0, -5.0), Vec3::new(1.3, 12.0, 300.0)),
        LayerMask::WALL,
    )
}

/// A tall wall 0.8 ahead of the spawn point.
#[must_use]
pub fn climb_wall() -> BoxWorld {
    flat().with(
        Aabb::new(Vec3::new(-5.0, 0.0, 0.8), Vec3::new(5.0, 20.0, 1.3)),
        LayerMask::WALL,
    )
}

/// A knee-high ledge ahead: the low whisker sees it, the high one does not.
#[must_use]
pub fn vault_ledge() -> BoxWorld {
    flat().with(
        Aabb::new(Vec3::new(-5.0, 0.0, 0.8), Vec3::new(5.0, 0.5, 3.0)),
        LayerMask::WALL,
    )
}

/// Walls on both sides, close enough that both stay in whisker range.
#[must_use]
pub fn corridor() -> BoxWorld {
    flat()
        .with(
            Aabb::new(Vec3::new(0.6, 0.0, -5.0), Vec3::new(1.1, 6.0, 300.0)),
            LayerMask::WALL,
        )
        .with(
            Aabb::new(Vec3::new(-1.1, 0.0, -5.0), Vec3::new(-0.6, 6.0, 300.0)),
            LayerMask::WALL,
        )
}

/// A low ground-layer rise ahead, read by the probe as a slope.
#[must_use]
pub fn slope_step() -> BoxWorld {
    flat().with(
        Aabb::new(Vec3::new(-5.0, 0.0, 0.8), Vec3::new(5.0, 0.5, 3.0)),
        LayerMask::GROUND,
    )
}

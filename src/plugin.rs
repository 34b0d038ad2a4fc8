//! Bevy integration for the locomotion controller.
//!
//! [`LocomotionPlugin`] runs the frame phase in `Update` and the fixed tick
//! followed by body integration in `FixedUpdate`, against the static
//! [`LevelGeometry`] resource. Entities opt in by carrying the components
//! returned by [`character`].

use bevy::prelude::*;

use crate::audio::{CueSet, SilentCue};
use crate::config::{ConfigError, LocomotionConfig};
use crate::controller::LocomotionController;
use crate::input::Intent;
use crate::look::Facing;
use crate::sim::{BoxWorld, SimBody};

/// Per-entity controller. Audio is not wired in the ECS build.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct Locomotion(pub LocomotionController);

/// Reference rigid body driven by the controller.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct SimBodyComp(pub SimBody);

/// Intent written by whatever input system the host uses.
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct MovementIntent(pub Intent);

/// Camera yaw chosen by the host.
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct Heading(pub Facing);

/// Level geometry probed by every controller.
#[derive(Resource, Debug, Clone, Default, Deref, DerefMut)]
pub struct LevelGeometry(pub BoxWorld);

/// Builds the components for a character standing at `position`.
///
/// # Errors
/// Returns [`ConfigError::Invalid`] when `config` fails validation.
pub fn character(
    config: LocomotionConfig,
    position: Vec3,
) -> Result<(Locomotion, SimBodyComp, MovementIntent, Heading), ConfigError> {
    let controller = LocomotionController::<SilentCue>::try_new(config, CueSet::default())?;
    let mut body = SimBody::character(position);
    controller.attach(&mut body);
    Ok((
        Locomotion(controller),
        SimBodyComp(body),
        MovementIntent::default(),
        Heading::default(),
    ))
}

/// Registers the locomotion systems and an empty [`LevelGeometry`] unless
/// the app already provides one.
#[derive(Default)]
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelGeometry>();
        app.add_systems(Update, locomotion_frame_system);
        app.add_systems(
            FixedUpdate,
            (locomotion_tick_system, integrate_bodies_system).chain(),
        );
    }
}

/// Probes the level and resolves intent once per rendered frame.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn locomotion_frame_system(
    time: Res<Time>,
    level: Res<LevelGeometry>,
    mut query: Query<(&mut Locomotion, &mut SimBodyComp, &MovementIntent, &Heading)>,
) {
    let dt = time.delta_secs();
    for (mut locomotion, mut body, intent, heading) in &mut query {
        locomotion.frame(dt, intent.0, heading.0, &level.0, &mut body.0);
    }
}

/// Applies the controller's forces on the fixed timestep.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn locomotion_tick_system(
    time: Res<Time<Fixed>>,
    mut query: Query<(&mut Locomotion, &mut SimBodyComp)>,
) {
    let dt = time.timestep().as_secs_f32();
    for (mut locomotion, mut body) in &mut query {
        locomotion.tick(dt, &mut body.0);
    }
}

/// Integrates every body and resolves collisions with the level.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn integrate_bodies_system(
    time: Res<Time<Fixed>>,
    level: Res<LevelGeometry>,
    mut query: Query<&mut SimBodyComp>,
) {
    let dt = time.timestep().as_secs_f32();
    for mut body in &mut query {
        body.integrate(dt);
        level.resolve(&mut body.0);
    }
}

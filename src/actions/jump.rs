//! Ground, air and wall jumps.

use glam::Vec3;
use log::debug;

use crate::audio::AudioCue;
use crate::config::LocomotionConfig;
use crate::context::StepContext;
use crate::look::Facing;
use crate::physics::{ForceMode, RigidBody};
use crate::state::{LocomotionState, WallSide};

/// Impulse for a jump taken from the ground or mid-air.
#[must_use]
pub fn ground_impulse(config: &LocomotionConfig, facing: Facing) -> Vec3 {
    Vec3::Y * config.jump_force * config.upward_mult
        + facing.forward() * config.jump_force * config.fwd_mult
}

/// Impulse for a jump off a wall: less lift, more forward carry, and a push
/// away from the wall.
///
/// # Examples
/// ```
/// use strider::actions::jump::wall_impulse;
/// use strider::config::LocomotionConfig;
/// use strider::look::Facing;
/// use strider::state::WallSide;
/// let impulse = wall_impulse(&LocomotionConfig::default(), Facing::default(), WallSide::Left);
/// assert!(impulse.x > 0.0, "a left wall pushes the jump to the right");
/// ```
#[must_use]
pub fn wall_impulse(config: &LocomotionConfig, facing: Facing, side: WallSide) -> Vec3 {
    Vec3::Y * config.jump_force * config.upward_jump_multiplier
        + facing.forward() * config.jump_force * config.forward_jump_multiplier
        + facing.right() * side.away_sign() * config.jump_force * config.sideways_jump_multiplier
}

/// Fires a jump when jump is held, allowed, and outside the cooldown window.
///
/// Returns `true` when an impulse was issued.
pub fn update<B, A>(state: &mut LocomotionState, ctx: &mut StepContext<'_, B, A>) -> bool
where
    B: RigidBody + ?Sized,
    A: AudioCue,
{
    if !(state.jumping && state.can_jump && !state.already_jumped()) {
        return false;
    }

    let impulse = state.wall_side().map_or_else(
        || ground_impulse(ctx.config, ctx.facing),
        |side| wall_impulse(ctx.config, ctx.facing, side),
    );
    ctx.body.apply_force(impulse, ForceMode::Impulse);
    ctx.cues.jump();
    state.jump_cooldown.restart(ctx.config.jump_cooldown);
    debug!("jump impulse {impulse:?} (wall side: {:?})", state.wall_side());
    true
}

//! Running along a wall beside the character.
//!
//! Entry and exit are decided in the frame phase from the probe flags and
//! the lateral input; the forces are applied on the fixed tick while the
//! session is active.

use glam::Vec3;
use log::{debug, trace};

use crate::actions::climb;
use crate::audio::AudioCue;
use crate::constants::{RUNNING_UP_THRESHOLD, WALL_RUN_UP_DIVISOR, WALL_STICK_DIVISOR};
use crate::context::StepContext;
use crate::input::Intent;
use crate::physics::{ForceMode, RigidBody};
use crate::probe::SurfaceContacts;
use crate::state::{Action, LocomotionState, WallRunSession, WallSide};

/// The wall side the player is pushing into, if exactly one wall is present.
///
/// Both walls (a corridor) or no wall yield `None`.
#[must_use]
pub const fn pushed_side(contacts: &SurfaceContacts, intent: &Intent) -> Option<WallSide> {
    if !contacts.single_wall() {
        return None;
    }
    if contacts.wall_left && intent.lateral < 0.0 {
        Some(WallSide::Left)
    } else if contacts.wall_right && intent.lateral > 0.0 {
        Some(WallSide::Right)
    } else {
        None
    }
}

/// Enters, continues or leaves the wall-run for this frame.
pub fn update<B, A>(state: &mut LocomotionState, intent: &Intent, ctx: &mut StepContext<'_, B, A>)
where
    B: RigidBody + ?Sized,
    A: AudioCue,
{
    let Some(side) = pushed_side(&state.contacts, intent).filter(|_| !state.crouching) else {
        stop(state, ctx.body);
        return;
    };

    let fresh = !matches!(state.action, Action::WallRun(session) if session.side == side);
    if fresh {
        climb::stop(state, ctx);
        state.action = Action::WallRun(WallRunSession::new(side));
        ctx.body.set_gravity_enabled(false);
        debug!("wall-run started on the {side:?} wall");
    }

    if let Action::WallRun(session) = &mut state.action {
        session.reset_velocity_once(ctx.body, ctx.facing.right());
        session.running_up = intent.forward > RUNNING_UP_THRESHOLD;
    }
    state.climb_cooldown.restart(ctx.config.climb_cooldown);
    ctx.cues.sprint_steps();
}

/// Leaves an active wall-run and restores gravity. No-op otherwise.
pub fn stop<B: RigidBody + ?Sized>(state: &mut LocomotionState, body: &mut B) {
    if let Action::WallRun(session) = state.action {
        state.action = Action::None;
        body.set_gravity_enabled(true);
        debug!("wall-run on the {:?} wall ended", session.side);
    }
}

/// Forward drive, optional climb and wall stick for the current tick.
///
/// Nothing is applied once the body reaches `max_wall_run_speed`.
pub fn apply_forces<B, A>(state: &LocomotionState, ctx: &mut StepContext<'_, B, A>)
where
    B: RigidBody + ?Sized,
    A: AudioCue,
{
    let Action::WallRun(session) = state.action else {
        return;
    };
    if ctx.body.velocity().length() >= ctx.config.max_wall_run_speed {
        return;
    }

    let force = ctx.config.wall_run_force;
    let mut total = ctx.facing.forward() * force;
    if session.running_up {
        total += Vec3::Y * (force / WALL_RUN_UP_DIVISOR);
    }
    total += ctx.facing.right() * session.side.toward_sign() * (force / WALL_STICK_DIVISOR);
    total *= ctx.dt;

    ctx.body.apply_force(total, ForceMode::Continuous);
    trace!("wall-run force {total:?}");
}

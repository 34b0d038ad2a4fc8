//! Timed climbs up the wall ahead.
//!
//! A climb starts when forward input meets a wall in front and the climb
//! gate is open. It lasts at most `climb_duration` seconds, ends as soon as
//! the wall or the forward input is lost, and closes the gate for
//! `climb_cooldown` seconds afterwards.

use glam::Vec3;
use log::debug;

use crate::audio::AudioCue;
use crate::context::StepContext;
use crate::physics::{ForceMode, RigidBody};
use crate::state::{Action, ClimbSession, LocomotionState};

/// The climb is (or is about to be) active on this tick.
#[must_use]
pub const fn engages(state: &LocomotionState) -> bool {
    state.wants_climb && state.contacts.wall_in_front && state.can_climb()
}

/// Starts, sustains or stops the climb for one tick.
pub fn update<B, A>(state: &mut LocomotionState, ctx: &mut StepContext<'_, B, A>)
where
    B: RigidBody + ?Sized,
    A: AudioCue,
{
    if !engages(state) {
        stop(state, ctx);
        return;
    }

    if !state.climbing() {
        state.action = Action::Climb(ClimbSession::new(ctx.config.climb_duration));
        ctx.body.set_gravity_enabled(false);
        debug!("climb started");
    }
    if let Action::Climb(session) = &mut state.action {
        session.reset_velocity_once(ctx.body);
    }

    let lift = Vec3::Y * ctx.config.climb_force * ctx.dt;
    ctx.body.apply_force(lift, ForceMode::Continuous);
    ctx.cues.loop_climb();
}

/// Ends an active climb and closes the climb gate. No-op otherwise.
pub fn stop<B, A>(state: &mut LocomotionState, ctx: &mut StepContext<'_, B, A>)
where
    B: RigidBody + ?Sized,
    A: AudioCue,
{
    if !state.climbing() {
        return;
    }
    state.action = Action::None;
    state.climb_cooldown.restart(ctx.config.climb_cooldown);
    ctx.body.set_gravity_enabled(true);
    ctx.cues.stop_climb();
    debug!("climb stopped");
}

/// Counts down the active climb and stops it once its duration elapses.
pub fn expire<B, A>(state: &mut LocomotionState, ctx: &mut StepContext<'_, B, A>)
where
    B: RigidBody + ?Sized,
    A: AudioCue,
{
    let elapsed = match &mut state.action {
        Action::Climb(session) => session.expire(ctx.dt),
        _ => false,
    };
    if elapsed {
        stop(state, ctx);
    }
}

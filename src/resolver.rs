//! Frame-phase intent resolution.
//!
//! [`resolve`] folds the latest probe results and the sampled intent into
//! the targets the fixed tick will use: drive speed cap and multiplier,
//! drag, gravity multiplier, and the jump, sprint and climb gates. Every
//! target is overwritten on each call so nothing carries over stale.

use crate::actions::wall_run;
use crate::audio::AudioCue;
use crate::config::LocomotionConfig;
use crate::context::StepContext;
use crate::input::Intent;
use crate::physics::RigidBody;
use crate::probe::SurfaceContacts;
use crate::state::{DriveTarget, LocomotionState};

/// Extra downward pull for the current state.
///
/// Crouching wins over slopes, slopes over wall-runs, and the standard
/// multiplier applies otherwise.
#[must_use]
pub const fn gravity_multiplier(state: &LocomotionState, config: &LocomotionConfig) -> f32 {
    if state.crouching {
        config.crouch_gravity_mult
    } else if state.contacts.on_slope {
        config.slope_gravity_mult
    } else if state.wall_running() {
        config.wall_run_gravity_mult
    } else {
        config.standard_gravity_mult
    }
}

/// Resolves one frame of intent against the latest surface contacts.
pub fn resolve<B, A>(
    state: &mut LocomotionState,
    intent: &Intent,
    contacts: SurfaceContacts,
    ctx: &mut StepContext<'_, B, A>,
) where
    B: RigidBody + ?Sized,
    A: AudioCue,
{
    let config = ctx.config;
    state.contacts = contacts;

    state.crouching = intent.crouch;
    state.height_scale = if state.crouching {
        config.crouch_scale
    } else {
        1.0
    };
    state.can_sprint = contacts.grounded && !state.crouching;

    if intent.is_moving() && contacts.grounded {
        let sprint = intent.sprint && state.can_sprint;
        state.sprinting = sprint;
        state.ramp_accel(sprint, config.accel_amt, ctx.dt);
        state.drive = Some(if sprint {
            DriveTarget {
                max_speed: config.max_sprint_speed,
                speed_mult: config.sprint_mult,
            }
        } else {
            DriveTarget {
                max_speed: config.max_walk_speed,
                speed_mult: 1.0,
            }
        });
        if sprint {
            ctx.cues.sprint_steps();
        } else {
            ctx.cues.walk_steps();
        }
    } else if intent.is_moving() {
        state.sprinting = false;
        state.drive = Some(DriveTarget {
            max_speed: config.max_air_speed,
            speed_mult: config.air_multiplier,
        });
    } else {
        state.sprinting = false;
        state.drive = None;
        ctx.cues.stop_steps();
    }

    state.jumping = intent.jump;

    wall_run::update(state, intent, ctx);

    state.wants_climb = intent.forward > 0.0 && contacts.wall_in_front;
    state.can_jump = contacts.grounded || (state.wall_running() && !state.already_jumped());
    state.current_drag = if contacts.grounded {
        config.ground_drag
    } else {
        config.air_drag
    };
    state.gravity_multiplier = gravity_multiplier(state, config);

    if !contacts.grounded && !state.wall_running() {
        ctx.cues.stop_steps();
    }
}

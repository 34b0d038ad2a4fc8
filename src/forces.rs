//! Fixed-tick force composition.
//!
//! [`compose`] issues every force for one physics tick in a fixed order:
//! ground-plane drive, counter-movement, extra gravity, then the action
//! injections (jump, vault, climb, wall-run), and finally the drag. Drive
//! and vertical mechanics therefore never fight within a tick, and drag
//! applies to the resultant velocity on the next integration step.

use glam::Vec3;
use log::trace;

use crate::actions::{climb, jump, vault, wall_run};
use crate::audio::AudioCue;
use crate::context::StepContext;
use crate::input::Intent;
use crate::look::{look_relative_velocity, Facing};
use crate::physics::{ForceMode, RigidBody};
use crate::state::LocomotionState;

/// Whether the drive may still push along an axis.
///
/// The drive only contributes while the look-relative speed in the input's
/// direction is below `max_speed`; it never subtracts speed above the cap.
///
/// # Examples
/// ```
/// use strider::forces::below_cap;
/// assert!(below_cap(1.0, 3.0, 10.0));
/// assert!(!below_cap(1.0, 10.0, 10.0));
/// assert!(below_cap(-1.0, 10.0, 10.0));
/// assert!(!below_cap(0.0, 0.0, 10.0));
/// ```
#[must_use]
pub const fn below_cap(input: f32, relative_speed: f32, max_speed: f32) -> bool {
    (input > 0.0 && relative_speed < max_speed) || (input < 0.0 && relative_speed > -max_speed)
}

/// Ground-plane drive for one tick, or zero when the cap is reached on both
/// axes or no drive target is set.
#[must_use]
pub fn drive_force(
    state: &LocomotionState,
    intent: &Intent,
    velocity: Vec3,
    facing: Facing,
    move_speed: f32,
    dt: f32,
) -> Vec3 {
    let Some(drive) = state.drive else {
        return Vec3::ZERO;
    };
    let relative = look_relative_velocity(velocity, facing);
    let scale = move_speed * drive.speed_mult * state.current_accel * dt;

    let mut force = Vec3::ZERO;
    if below_cap(intent.lateral, relative.x, drive.max_speed) {
        force += facing.right() * intent.lateral * scale;
    }
    if below_cap(intent.forward, relative.y, drive.max_speed) {
        force += facing.forward() * intent.forward * scale;
    }
    force
}

/// Applies every force for one fixed tick.
pub fn compose<B, A>(state: &mut LocomotionState, intent: &Intent, ctx: &mut StepContext<'_, B, A>)
where
    B: RigidBody + ?Sized,
    A: AudioCue,
{
    let config = ctx.config;
    let dt = ctx.dt;
    let velocity = ctx.body.velocity();

    let drive = drive_force(state, intent, velocity, ctx.facing, config.move_speed, dt);
    if drive != Vec3::ZERO {
        ctx.body.apply_force(drive, ForceMode::Continuous);
    }

    let counter = if intent.is_diagonal() {
        -velocity * config.counter_movement * dt
    } else {
        Vec3::ZERO
    };
    if counter != Vec3::ZERO {
        ctx.body.apply_force(counter, ForceMode::Continuous);
    }

    // Climbing switches body gravity off instead of scaling it.
    let gravity = if climb::engages(state) {
        Vec3::ZERO
    } else {
        Vec3::NEG_Y * state.gravity_multiplier * dt
    };
    if gravity != Vec3::ZERO {
        ctx.body.apply_force(gravity, ForceMode::Continuous);
    }

    jump::update(state, ctx);
    vault::update(state, ctx);
    climb::update(state, ctx);
    wall_run::apply_forces(state, ctx);

    ctx.body.set_drag(state.current_drag);
    trace!("tick forces: drive {drive:?}, counter {counter:?}, gravity {gravity:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{CueSet, RecordingCue};
    use crate::config::LocomotionConfig;
    use crate::state::{Action, ClimbSession, DriveTarget};
    use crate::test_support::RecordingBody;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn walking(config: &LocomotionConfig) -> LocomotionState {
        let mut state = LocomotionState::new();
        state.contacts.grounded = true;
        state.drive = Some(DriveTarget {
            max_speed: config.max_walk_speed,
            speed_mult: 1.0,
        });
        state.gravity_multiplier = config.standard_gravity_mult;
        state.current_drag = config.ground_drag;
        state
    }

    #[rstest]
    fn forward_drive_is_scaled_by_move_speed_and_dt() {
        let config = LocomotionConfig::default();
        let state = walking(&config);
        let intent = Intent::default().with_forward(1.0);
        let force = drive_force(
            &state,
            &intent,
            Vec3::ZERO,
            Facing::default(),
            config.move_speed,
            0.02,
        );
        assert_relative_eq!(force.z, config.move_speed * 0.02, epsilon = 1e-3);
        assert_relative_eq!(force.x, 0.0);
    }

    #[rstest]
    fn drive_stops_at_the_cap_but_not_against_it() {
        let config = LocomotionConfig::default();
        let state = walking(&config);
        let fast = Vec3::Z * (config.max_walk_speed + 1.0);
        let push = |forward: f32| {
            let intent = Intent::default().with_forward(forward);
            drive_force(&state, &intent, fast, Facing::default(), config.move_speed, 0.02)
        };
        assert_eq!(push(1.0), Vec3::ZERO);
        assert!(push(-1.0).z < 0.0);
    }

    #[rstest]
    fn diagonal_input_adds_counter_movement() {
        let config = LocomotionConfig::default();
        let mut state = walking(&config);
        let mut body = RecordingBody::moving(Vec3::new(0.0, 0.0, config.max_walk_speed * 2.0));
        let mut cues = CueSet::<RecordingCue>::default();
        let intent = Intent::default().with_forward(1.0).with_lateral(1.0);
        let mut ctx = StepContext::new(&config, Facing::default(), 0.02, &mut body, &mut cues);
        compose(&mut state, &intent, &mut ctx);

        let expected = -body.velocity * config.counter_movement * 0.02;
        assert!(body.forces.contains(&(expected, ForceMode::Continuous)));
    }

    #[rstest]
    fn gravity_and_drag_are_always_issued_on_the_ground() {
        let config = LocomotionConfig::default();
        let mut state = walking(&config);
        let mut body = RecordingBody::default();
        let mut cues = CueSet::<RecordingCue>::default();
        let mut ctx = StepContext::new(&config, Facing::default(), 0.02, &mut body, &mut cues);
        compose(&mut state, &Intent::default(), &mut ctx);

        assert_relative_eq!(
            body.total(ForceMode::Continuous).y,
            -config.standard_gravity_mult * 0.02,
            epsilon = 1e-4
        );
        assert_eq!(body.drag, Some(config.ground_drag));
    }

    #[rstest]
    fn climbing_skips_extra_gravity() {
        let config = LocomotionConfig::default();
        let mut state = walking(&config);
        state.contacts.wall_in_front = true;
        state.wants_climb = true;
        let mut body = RecordingBody::default();
        let mut cues = CueSet::<RecordingCue>::default();
        let mut ctx = StepContext::new(&config, Facing::default(), 0.02, &mut body, &mut cues);
        compose(&mut state, &Intent::default().with_forward(1.0), &mut ctx);

        assert!(matches!(state.action(), Action::Climb(_)));
        assert!(!body.gravity_enabled);
        let vertical: f32 = body
            .forces
            .iter()
            .filter(|(force, _)| force.y != 0.0)
            .map(|(force, _)| force.y)
            .sum();
        assert_relative_eq!(vertical, config.climb_force * 0.02, epsilon = 1e-4);
    }

    #[rstest]
    fn jump_and_vault_stack_in_one_tick() {
        let config = LocomotionConfig::default();
        let mut state = walking(&config);
        state.jumping = true;
        state.can_jump = true;
        state.contacts.should_auto_vault = true;
        let mut body = RecordingBody::default();
        let mut cues = CueSet::<RecordingCue>::default();
        let mut ctx = StepContext::new(&config, Facing::default(), 0.02, &mut body, &mut cues);
        compose(&mut state, &Intent::default(), &mut ctx);

        assert_eq!(body.impulses().len(), 2);
        assert!(state.already_jumped());
    }

    #[rstest]
    fn active_climb_stops_when_intent_drops() {
        let config = LocomotionConfig::default();
        let mut state = walking(&config);
        state.action = Action::Climb(ClimbSession::new(1.0));
        let mut body = RecordingBody::default();
        body.gravity_enabled = false;
        let mut cues = CueSet::<RecordingCue>::default();
        let mut ctx = StepContext::new(&config, Facing::default(), 0.02, &mut body, &mut cues);
        compose(&mut state, &Intent::default(), &mut ctx);

        assert!(!state.climbing());
        assert!(body.gravity_enabled);
    }
}

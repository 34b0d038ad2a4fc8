//! Behavioural scenarios run through the reference simulation.
//! Each test drives the controller frame by frame and checks a movement
//! property on the recorded samples.

use approx::assert_relative_eq;
use glam::Vec3;
use rstest::rstest;
use strider::input::Intent;
use strider::look::Facing;
use strider::physics::{LayerMask, RigidBody};
use strider::sim::{course, Aabb, Course, SimBody, Simulation};
use strider::{LocomotionConfig, LocomotionController, Mode};
use test_utils::{
    assert_actions_exclusive, assert_vec3_near, hold, impulse_times, sim_on, HZ, STEP,
};

fn forward() -> Intent {
    Intent::default().with_forward(1.0)
}

#[rstest]
#[case::walk(forward(), LocomotionConfig::default().max_walk_speed, 1.0)]
#[case::sprint(
    forward().with_sprint(),
    LocomotionConfig::default().max_sprint_speed,
    LocomotionConfig::default().sprint_mult * 2.0
)]
fn drive_alone_never_overshoots_by_more_than_one_tick(
    #[case] intent: Intent,
    #[case] max_speed: f32,
    #[case] peak_multiplier: f32,
) {
    let config = LocomotionConfig::default();
    let per_tick = config.move_speed * peak_multiplier * STEP * STEP / config.player_weight;
    let mut sim = sim_on(Course::Flat, config);
    let samples = sim.run(5.0, HZ, hold(intent));

    for sample in samples {
        assert!(
            sample.planar_speed() <= max_speed + per_tick,
            "speed {} above cap {max_speed} at t={:.2}",
            sample.planar_speed(),
            sample.time
        );
    }
    let mut settled = samples.iter().rev().take(50);
    assert!(settled.all(|s| s.planar_speed() > max_speed * 0.8));
}

#[rstest]
fn sprint_ramp_is_linear_and_capped() {
    let config = LocomotionConfig {
        accel_amt: 0.5,
        ..LocomotionConfig::default()
    };
    let accel_amt = config.accel_amt;
    let mut sim = sim_on(Course::Flat, config);

    let ramp = sim.run(accel_amt, HZ, hold(forward().with_sprint()));
    let after = ramp.last().expect("samples recorded").current_accel;
    assert_relative_eq!(after, 1.0 + accel_amt * accel_amt, epsilon = 1e-3);

    let held = sim.run(3.0, HZ, hold(forward().with_sprint()));
    assert!(held.iter().all(|s| (1.0..=2.0).contains(&s.current_accel)));
    assert_relative_eq!(held.last().expect("samples recorded").current_accel, 2.0);
}

#[rstest]
fn walk_decelerates_symmetrically() {
    let config = LocomotionConfig {
        accel_amt: 0.5,
        ..LocomotionConfig::default()
    };
    let ramp_time = 1.0 / config.accel_amt;
    let mut sim = sim_on(Course::Flat, config);

    sim.run(ramp_time + 0.5, HZ, hold(forward().with_sprint()));
    assert_relative_eq!(sim.controller().state().current_accel(), 2.0);

    let halfway = sim.run(ramp_time * 0.5, HZ, hold(forward()));
    assert_relative_eq!(
        halfway.last().expect("samples recorded").current_accel,
        1.5,
        epsilon = 1e-3
    );
    let settled = sim.run(ramp_time, HZ, hold(forward()));
    assert_relative_eq!(settled.last().expect("samples recorded").current_accel, 1.0);
}

#[rstest]
fn held_jump_respects_cooldown() {
    let config = LocomotionConfig::default();
    let cooldown = config.jump_cooldown;
    let mut sim = sim_on(Course::Flat, config);
    let samples = sim.run(3.0, HZ, hold(Intent::default().with_jump()));

    let jumps = impulse_times(samples);
    assert!(jumps.len() >= 2, "expected repeated jumps, got {jumps:?}");
    for (earlier, later) in jumps.iter().zip(jumps.iter().skip(1)) {
        assert!(
            later - earlier >= cooldown - 1e-4,
            "jumps at {earlier} and {later} closer than {cooldown}"
        );
    }
}

#[rstest]
#[case::push_right(1.0)]
#[case::push_left(-1.0)]
fn corridor_never_wall_runs(#[case] lateral: f32) {
    let mut sim = sim_on(Course::Corridor, LocomotionConfig::default());
    let samples = sim.run(1.0, HZ, hold(forward().with_lateral(lateral)));
    assert!(samples.iter().all(|s| !s.wall_running));
    assert_actions_exclusive(samples);
}

#[rstest]
fn pushing_into_a_wall_runs_along_it() {
    let mut sim = sim_on(Course::WallRunLane, LocomotionConfig::default());
    let samples = sim.run(1.0, HZ, hold(forward().with_lateral(1.0)));

    let first = samples.first().expect("samples recorded");
    assert!(first.wall_running);
    assert_eq!(first.mode, Mode::WallRunning);
    assert_actions_exclusive(samples);
    let last = samples.last().expect("samples recorded");
    assert!(last.position.y > course::SPAWN.y, "running up should climb");
    assert!(last.position.z > course::SPAWN.z);
}

#[rstest]
fn releasing_the_wall_restores_gravity() {
    let mut sim = sim_on(Course::WallRunLane, LocomotionConfig::default());
    sim.run(0.2, HZ, hold(forward().with_lateral(1.0)));
    assert!(sim.controller().state().wall_running());

    let samples = sim.run(0.1, HZ, hold(forward()));
    assert!(samples.iter().all(|s| !s.wall_running && s.body_gravity));
}

#[rstest]
fn climb_is_timed_and_cooled_down() {
    let config = LocomotionConfig::default();
    let max_climb_steps = (config.climb_duration * HZ).ceil() as usize + 1;
    let min_gap_steps = (config.climb_cooldown * HZ).floor() as usize;
    let mut sim = sim_on(Course::ClimbWall, config);
    let samples = sim.run(4.0, HZ, hold(forward()));

    assert_actions_exclusive(samples);
    let flags: Vec<bool> = samples.iter().map(|s| s.climbing).collect();
    let mut runs = Vec::new();
    let mut start = None;
    for (index, climbing) in flags.iter().copied().chain([false]).enumerate() {
        match (climbing, start) {
            (true, None) => start = Some(index),
            (false, Some(begin)) => {
                runs.push((begin, index));
                start = None;
            }
            _ => {}
        }
    }

    assert!(runs.len() >= 2, "expected repeated climbs, got {runs:?}");
    for (begin, end) in &runs {
        assert!(end - begin <= max_climb_steps, "climb {begin}..{end} too long");
    }
    for (earlier, later) in runs.iter().zip(runs.iter().skip(1)) {
        let gap = later.0 - earlier.1;
        assert!(gap >= min_gap_steps, "climbs {earlier:?} {later:?} too close");
    }
}

#[rstest]
fn wall_run_blocks_climbing_at_a_corner() {
    let world = course::wall_run_lane().with(
        Aabb::new(Vec3::new(-5.0, 0.0, 3.0), Vec3::new(0.8, 12.0, 3.5)),
        LayerMask::WALL,
    );
    let mut sim = Simulation::new(LocomotionConfig::default(), world, course::SPAWN)
        .expect("default tuning is valid");
    let samples = sim.run(2.0, HZ, hold(forward().with_lateral(1.0)));
    assert_actions_exclusive(samples);
    assert!(samples.iter().any(|s| s.wall_running));
}

#[rstest]
fn vault_lifts_only_when_pushing_into_the_ledge() {
    let mut pushing = sim_on(Course::VaultLedge, LocomotionConfig::default());
    let lifted = pushing.run(1.0, HZ, hold(forward()));
    assert!(!impulse_times(lifted).is_empty());
    let peak = lifted.iter().map(|s| s.position.y).fold(f32::MIN, f32::max);
    assert!(peak > course::SPAWN.y + 0.2, "vault peaked at {peak}");

    let mut backing = sim_on(Course::VaultLedge, LocomotionConfig::default());
    let backed = backing.run(1.0, HZ, hold(Intent::default().with_forward(-1.0)));
    assert!(impulse_times(backed).is_empty());
}

#[rstest]
#[case::standing(Intent::default(), LocomotionConfig::default().slope_gravity_mult)]
#[case::walking_up(forward(), LocomotionConfig::default().slope_gravity_mult)]
#[case::crouching(Intent::default().with_crouch(), LocomotionConfig::default().crouch_gravity_mult)]
fn rise_ahead_reads_as_a_slope(#[case] intent: Intent, #[case] expected: f32) {
    let mut sim = sim_on(Course::SlopeStep, LocomotionConfig::default());
    sim.run(STEP, HZ, hold(intent));

    let state = sim.controller().state();
    assert!(state.grounded());
    assert!(state.on_slope());
    assert!(!state.contacts().should_auto_vault, "ground-layer rises are not vaulted");
    assert_relative_eq!(state.gravity_multiplier(), expected);
}

#[rstest]
fn flat_ground_uses_the_standard_multiplier() {
    let config = LocomotionConfig::default();
    let standard = config.standard_gravity_mult;
    let mut sim = sim_on(Course::Flat, config);
    sim.run(STEP, HZ, hold(forward()));

    let state = sim.controller().state();
    assert!(!state.on_slope());
    assert_relative_eq!(state.gravity_multiplier(), standard);
}

/// Controller and body without the stepping loop, for frame-level checks.
fn rig() -> (LocomotionController, SimBody) {
    let controller = LocomotionController::silent(LocomotionConfig::default());
    let mut body = SimBody::character(course::SPAWN);
    controller.attach(&mut body);
    (controller, body)
}

#[rstest]
fn wall_run_entry_zeroes_velocity_once() {
    let world = course::wall_run_lane();
    let (mut controller, mut body) = rig();
    let intent = forward().with_lateral(1.0);
    let moving = Vec3::new(2.0, -3.0, 4.0);

    body.set_velocity(moving);
    controller.frame(STEP, intent, Facing::default(), &world, &mut body);
    assert!(controller.state().wall_running());
    assert_vec3_near(body.velocity(), Vec3::new(0.0, 0.0, 4.0), 1e-6);

    for _ in 0..5 {
        body.set_velocity(moving);
        controller.frame(STEP, intent, Facing::default(), &world, &mut body);
        assert_vec3_near(body.velocity(), moving, 1e-6);
    }
}

#[rstest]
fn climb_entry_zeroes_velocity_once() {
    let world = course::climb_wall();
    let (mut controller, mut body) = rig();
    let moving = Vec3::new(1.0, -2.0, 3.0);

    body.set_velocity(moving);
    controller.frame(STEP, forward(), Facing::default(), &world, &mut body);
    controller.tick(STEP, &mut body);
    assert!(controller.state().climbing());
    assert_vec3_near(body.velocity(), Vec3::ZERO, 1e-6);

    body.set_velocity(moving);
    controller.frame(STEP, forward(), Facing::default(), &world, &mut body);
    controller.tick(STEP, &mut body);
    assert_vec3_near(body.velocity(), moving, 1e-6);
}

#[rstest]
fn wall_jump_pushes_away_from_a_left_wall() {
    let world = course::flat().with(
        Aabb::new(Vec3::new(-1.3, 0.0, -5.0), Vec3::new(-0.8, 6.0, 50.0)),
        LayerMask::WALL,
    );
    let (mut controller, mut body) = rig();
    let intent = Intent::default().with_lateral(-1.0).with_jump();

    controller.frame(STEP, intent, Facing::default(), &world, &mut body);
    assert_eq!(controller.state().mode(), Mode::WallRunning);
    controller.tick(STEP, &mut body);

    let impulse = body.impulses().first().copied().expect("wall jump fired");
    assert!(impulse.x > 0.0, "impulse {impulse:?} should point right");
}

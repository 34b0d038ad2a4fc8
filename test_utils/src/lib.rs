//! Utility helpers for tests.
//!
//! Scenario builders for the reference simulation and assertions over the
//! recorded samples.

use glam::Vec3;
use strider::input::Intent;
use strider::look::Facing;
use strider::sim::{course, Course, Sample, Simulation};
use strider::LocomotionConfig;

/// Fixed step used by the scenario tests.
pub const STEP: f32 = 0.02;
/// Steps per second matching [`STEP`].
pub const HZ: f32 = 50.0;

/// Simulation with `config` on `course`, spawned at [`course::SPAWN`].
///
/// # Panics
/// Panics if `config` fails validation.
///
/// # Examples
/// ```
/// use strider::sim::Course;
/// use strider::LocomotionConfig;
/// let sim = test_utils::sim_on(Course::Flat, LocomotionConfig::default());
/// assert!(sim.samples().is_empty());
/// ```
#[must_use]
pub fn sim_on(course: Course, config: LocomotionConfig) -> Simulation {
    Simulation::new(config, course.build(), course::SPAWN)
        .unwrap_or_else(|err| panic!("invalid test tuning: {err}"))
}

/// Script that holds the same intent facing `+Z` for the whole run.
#[must_use]
pub fn hold(intent: Intent) -> impl FnMut(f32) -> (Intent, Facing) {
    move |_| (intent, Facing::default())
}

/// Times at which at least one impulse was applied.
#[must_use]
pub fn impulse_times(samples: &[Sample]) -> Vec<f32> {
    samples
        .iter()
        .filter(|sample| sample.impulses > 0)
        .map(|sample| sample.time)
        .collect()
}

/// Asserts the action exclusivity rules on every sample: never wall-running
/// and climbing together, and body gravity off exactly while one is active.
///
/// # Panics
/// Panics naming the first offending sample.
pub fn assert_actions_exclusive(samples: &[Sample]) {
    for sample in samples {
        assert!(
            !(sample.wall_running && sample.climbing),
            "wall-run and climb overlap at t={:.2}",
            sample.time
        );
        let action = sample.wall_running || sample.climbing;
        assert_eq!(
            sample.body_gravity, !action,
            "body gravity {} with action {} at t={:.2}",
            sample.body_gravity, action, sample.time
        );
    }
}

/// Asserts two vectors agree within `epsilon` on every component.
///
/// # Panics
/// Panics with both vectors when they differ.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        actual.abs_diff_eq(expected, epsilon),
        "expected {expected:?} ± {epsilon}, got {actual:?}"
    );
}

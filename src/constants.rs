//! Fixed locomotion constants shared across systems.
//!
//! Tunable quantities live in [`LocomotionConfig`](crate::config::LocomotionConfig);
//! the values here are part of the movement feel and are not exposed to
//! configuration files.

/// Footstep cue pitch while walking.
pub const WALK_STEP_PITCH: f32 = 0.5;
/// Footstep cue pitch while sprinting or wall-running.
pub const SPRINT_STEP_PITCH: f32 = 0.75;
/// Lower bound of the walk/sprint acceleration ramp.
pub const WALK_ACCEL: f32 = 1.0;
/// Upper bound of the walk/sprint acceleration ramp.
pub const SPRINT_ACCEL: f32 = 2.0;
/// Forward input above this value makes a wall-run climb the wall.
pub const RUNNING_UP_THRESHOLD: f32 = 0.01;
/// Divides `jump_force` to obtain the auto-vault impulse.
pub const VAULT_IMPULSE_DIVISOR: f32 = 8.0;
/// Divides `wall_run_force` for the upward component while running up.
pub const WALL_RUN_UP_DIVISOR: f32 = 1.5;
/// Divides `wall_run_force` for the force pressing the body into the wall.
pub const WALL_STICK_DIVISOR: f32 = 5.0;
/// Gravitational acceleration used by the reference simulation.
pub const GRAVITY_PULL: f32 = -9.81;
/// Mass used when a body reports none.
pub const DEFAULT_MASS: f32 = 1.0;

//! Locomotion tuning loaded once at construction.
//!
//! Values follow the rigid-body conventions of the controller: continuous
//! forces are issued already scaled by the tick length and are integrated
//! again by the engine, so force magnitudes are large compared with the
//! resulting accelerations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::LayerMask;

/// Errors raised while loading or validating a [`LocomotionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The tuning file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for this struct.
    #[error("failed to parse locomotion config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but cannot drive a character.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Name of the offending key.
        field: &'static str,
        /// What the value must satisfy.
        reason: &'static str,
    },
}

/// Tuning for a single character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    // ------------------------------------------------------------------
    // Movement
    // ------------------------------------------------------------------
    /// Body mass applied when the controller attaches.
    pub player_weight: f32,
    /// Baseline drive force.
    pub move_speed: f32,
    /// Look-relative speed cap while walking.
    pub max_walk_speed: f32,
    /// Look-relative speed cap while sprinting.
    pub max_sprint_speed: f32,
    /// Look-relative speed cap while airborne.
    pub max_air_speed: f32,
    /// Drive multiplier while sprinting.
    pub sprint_mult: f32,
    /// Drive multiplier while airborne.
    pub air_multiplier: f32,
    /// Rate at which the walk/sprint ramp moves between 1 and 2, per second.
    pub accel_amt: f32,
    /// Body drag on the ground.
    pub ground_drag: f32,
    /// Body drag in the air.
    pub air_drag: f32,
    /// Extra downward force in normal movement.
    pub standard_gravity_mult: f32,
    /// Damping applied against velocity while moving diagonally.
    pub counter_movement: f32,

    // ------------------------------------------------------------------
    // Crouch
    // ------------------------------------------------------------------
    /// Extra downward force while crouching.
    pub crouch_gravity_mult: f32,
    /// Vertical scale handed to the render transform while crouching.
    pub crouch_scale: f32,

    // ------------------------------------------------------------------
    // Jump
    // ------------------------------------------------------------------
    /// Ground jump impulse.
    pub jump_force: f32,
    /// Share of the ground jump spent along the facing.
    pub fwd_mult: f32,
    /// Share of the ground jump spent upward.
    pub upward_mult: f32,
    /// Seconds between jumps.
    pub jump_cooldown: f32,

    // ------------------------------------------------------------------
    // Probes
    // ------------------------------------------------------------------
    /// Radius of the ground-check sphere at the feet.
    pub ground_dist: f32,
    /// Reach of every whisker ray.
    pub whisker_range: f32,
    /// Height of the ground-check sphere relative to the body position.
    pub feet_offset: f32,
    /// Height of the side and front whiskers.
    pub centre_offset: f32,
    /// Height of the low forward whisker.
    pub low_whisker_offset: f32,
    /// Height of the high forward whisker.
    pub high_whisker_offset: f32,
    /// Extra downward force while walking up a slope.
    pub slope_gravity_mult: f32,
    /// Layers that count as ground.
    pub ground_layer: LayerMask,
    /// Layers that support wall-running, climbing and vaulting.
    pub wall_layer: LayerMask,

    // ------------------------------------------------------------------
    // Wall running
    // ------------------------------------------------------------------
    /// Forward speed cap during a wall-run.
    pub max_wall_run_speed: f32,
    /// Forward drive during a wall-run.
    pub wall_run_force: f32,
    /// Extra downward force during a wall-run without forward input.
    pub wall_run_gravity_mult: f32,
    /// Push away from the wall on a wall-jump.
    pub sideways_jump_multiplier: f32,
    /// Upward share of a wall-jump.
    pub upward_jump_multiplier: f32,
    /// Forward share of a wall-jump.
    pub forward_jump_multiplier: f32,

    // ------------------------------------------------------------------
    // Climbing
    // ------------------------------------------------------------------
    /// Upward force while climbing.
    pub climb_force: f32,
    /// Seconds a climb lasts before it stops on its own.
    pub climb_duration: f32,
    /// Seconds after a climb before another may start.
    pub climb_cooldown: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            player_weight: 1.0,
            move_speed: 4500.0,
            max_walk_speed: 10.0,
            max_sprint_speed: 16.0,
            max_air_speed: 6.0,
            sprint_mult: 1.5,
            air_multiplier: 0.5,
            accel_amt: 2.0,
            ground_drag: 5.0,
            air_drag: 0.5,
            standard_gravity_mult: 500.0,
            counter_movement: 600.0,

            crouch_gravity_mult: 1500.0,
            crouch_scale: 0.5,

            jump_force: 8.0,
            fwd_mult: 0.3,
            upward_mult: 1.0,
            jump_cooldown: 0.25,

            ground_dist: 0.3,
            whisker_range: 1.0,
            feet_offset: -1.0,
            centre_offset: 0.0,
            low_whisker_offset: -0.75,
            high_whisker_offset: 0.25,
            slope_gravity_mult: 250.0,
            ground_layer: LayerMask::GROUND,
            wall_layer: LayerMask::WALL,

            max_wall_run_speed: 12.0,
            wall_run_force: 750.0,
            wall_run_gravity_mult: 100.0,
            sideways_jump_multiplier: 0.6,
            upward_jump_multiplier: 0.7,
            forward_jump_multiplier: 0.6,

            climb_force: 250.0,
            climb_duration: 1.0,
            climb_cooldown: 0.75,
        }
    }
}

impl LocomotionConfig {
    /// Parses and validates a TOML document. Missing keys keep their defaults.
    ///
    /// # Examples
    /// ```
    /// use strider::config::LocomotionConfig;
    /// let cfg = LocomotionConfig::from_toml_str("jump_force = 12.0").unwrap();
    /// assert_eq!(cfg.jump_force, 12.0);
    /// assert_eq!(cfg.max_walk_speed, LocomotionConfig::default().max_walk_speed);
    /// ```
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] when a value fails [`Self::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
    /// errors of [`Self::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let text = std::fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks that every quantity is usable by the controller.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("player_weight", self.player_weight),
            ("move_speed", self.move_speed),
            ("sprint_mult", self.sprint_mult),
            ("air_multiplier", self.air_multiplier),
            ("ground_drag", self.ground_drag),
            ("air_drag", self.air_drag),
            ("standard_gravity_mult", self.standard_gravity_mult),
            ("counter_movement", self.counter_movement),
            ("crouch_gravity_mult", self.crouch_gravity_mult),
            ("jump_force", self.jump_force),
            ("fwd_mult", self.fwd_mult),
            ("upward_mult", self.upward_mult),
            ("jump_cooldown", self.jump_cooldown),
            ("ground_dist", self.ground_dist),
            ("slope_gravity_mult", self.slope_gravity_mult),
            ("wall_run_force", self.wall_run_force),
            ("wall_run_gravity_mult", self.wall_run_gravity_mult),
            ("sideways_jump_multiplier", self.sideways_jump_multiplier),
            ("upward_jump_multiplier", self.upward_jump_multiplier),
            ("forward_jump_multiplier", self.forward_jump_multiplier),
            ("climb_force", self.climb_force),
            ("climb_duration", self.climb_duration),
            ("climb_cooldown", self.climb_cooldown),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
            if value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be negative",
                });
            }
        }

        let positive = [
            ("player_weight", self.player_weight),
            ("max_walk_speed", self.max_walk_speed),
            ("max_sprint_speed", self.max_sprint_speed),
            ("max_air_speed", self.max_air_speed),
            ("max_wall_run_speed", self.max_wall_run_speed),
            ("accel_amt", self.accel_amt),
            ("whisker_range", self.whisker_range),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        let offsets = [
            ("feet_offset", self.feet_offset),
            ("centre_offset", self.centre_offset),
            ("low_whisker_offset", self.low_whisker_offset),
            ("high_whisker_offset", self.high_whisker_offset),
        ];
        for (field, value) in offsets {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }
        if self.low_whisker_offset >= self.high_whisker_offset {
            return Err(ConfigError::Invalid {
                field: "low_whisker_offset",
                reason: "must sit below high_whisker_offset",
            });
        }

        if !(self.crouch_scale > 0.0 && self.crouch_scale <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "crouch_scale",
                reason: "must lie in (0, 1]",
            });
        }
        if self.ground_layer.is_empty() {
            return Err(ConfigError::Invalid {
                field: "ground_layer",
                reason: "must select at least one layer",
            });
        }
        if self.wall_layer.is_empty() {
            return Err(ConfigError::Invalid {
                field: "wall_layer",
                reason: "must select at least one layer",
            });
        }
        Ok(())
    }
}

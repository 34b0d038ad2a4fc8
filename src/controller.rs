//! Per-character locomotion controller.
//!
//! [`LocomotionController`] owns the state and drives the two phases of an
//! engine frame: [`frame`](LocomotionController::frame) probes the
//! surroundings and resolves intent, then [`tick`](LocomotionController::tick)
//! applies forces on the fixed physics step and advances the timers. The
//! host must not call the two concurrently for the same character.

use log::{debug, warn};

use crate::actions::climb;
use crate::audio::{AudioCue, CueSet, SilentCue};
use crate::config::{ConfigError, LocomotionConfig};
use crate::context::StepContext;
use crate::forces;
use crate::input::{InputSource, Intent};
use crate::look::Facing;
use crate::physics::{RigidBody, SpatialQuery};
use crate::probe::SurfaceProbe;
use crate::resolver;
use crate::state::{LocomotionState, Mode};

/// Locomotion for one character: tuning, state, audio cues and the latest
/// intent and facing.
///
/// The host owns the body and the world; the controller only borrows them
/// for the duration of a [`frame`](Self::frame) or [`tick`](Self::tick).
#[derive(Debug, Clone)]
pub struct LocomotionController<A = SilentCue> {
    config: LocomotionConfig,
    probe: SurfaceProbe,
    state: LocomotionState,
    cues: CueSet<A>,
    intent: Intent,
    facing: Facing,
    last_mode: Mode,
}

impl LocomotionController<SilentCue> {
    /// Controller that issues no audio commands.
    #[must_use]
    pub fn silent(config: LocomotionConfig) -> Self {
        Self::new(config, CueSet::default())
    }
}

impl<A: AudioCue> LocomotionController<A> {
    /// Builds a controller from tuning that is already known to be valid.
    #[must_use]
    pub fn new(config: LocomotionConfig, cues: CueSet<A>) -> Self {
        let probe = SurfaceProbe::from_config(&config);
        let state = LocomotionState::new();
        let last_mode = state.mode();
        Self {
            config,
            probe,
            state,
            cues,
            intent: Intent::default(),
            facing: Facing::default(),
            last_mode,
        }
    }

    /// Validates `config` before building the controller.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when the tuning is unusable.
    pub fn try_new(config: LocomotionConfig, cues: CueSet<A>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, cues))
    }

    /// Hands the configured mass, gravity and drag to a freshly spawned body.
    pub fn attach<B: RigidBody + ?Sized>(&self, body: &mut B) {
        body.set_mass(self.config.player_weight);
        body.set_gravity_enabled(self.state.gravity_enabled());
        body.set_drag(self.config.air_drag);
    }

    /// Frame phase: probe the surroundings and resolve `intent`.
    ///
    /// Axes are clamped to `[-1, 1]` first, so out-of-range input drives
    /// the same as full deflection. A non-finite or negative `dt` skips
    /// the frame.
    pub fn frame<B, Q>(&mut self, dt: f32, intent: Intent, facing: Facing, world: &Q, body: &mut B)
    where
        B: RigidBody + ?Sized,
        Q: SpatialQuery + ?Sized,
    {
        if !dt.is_finite() || dt < 0.0 {
            warn!("skipping locomotion frame with invalid dt {dt}");
            return;
        }
        let clamped = intent.sanitised();
        self.intent = clamped;
        self.facing = facing;

        let contacts = self.probe.scan(world, body.position(), facing, &clamped);
        let mut ctx = StepContext::new(&self.config, facing, dt, body, &mut self.cues);
        resolver::resolve(&mut self.state, &clamped, contacts, &mut ctx);
        self.note_mode();
    }

    /// Samples `source` once and runs [`Self::frame`].
    pub fn frame_from_source<S, B, Q>(
        &mut self,
        dt: f32,
        source: &S,
        facing: Facing,
        world: &Q,
        body: &mut B,
    ) where
        S: InputSource + ?Sized,
        B: RigidBody + ?Sized,
        Q: SpatialQuery + ?Sized,
    {
        self.frame(dt, Intent::sample(source), facing, world, body);
    }

    /// Fixed tick: apply forces for the last resolved frame, then advance
    /// cooldowns and the climb duration by `dt`.
    ///
    /// A non-finite or non-positive `dt` skips the tick.
    pub fn tick<B: RigidBody + ?Sized>(&mut self, dt: f32, body: &mut B) {
        if !dt.is_finite() || dt <= 0.0 {
            warn!("skipping locomotion tick with invalid dt {dt}");
            return;
        }
        let mut ctx = StepContext::new(&self.config, self.facing, dt, body, &mut self.cues);
        forces::compose(&mut self.state, &self.intent, &mut ctx);

        self.state.jump_cooldown.advance(dt);
        self.state.climb_cooldown.advance(dt);
        climb::expire(&mut self.state, &mut ctx);
        self.note_mode();
    }

    fn note_mode(&mut self) {
        let mode = self.state.mode();
        if mode != self.last_mode {
            debug!("locomotion mode {:?} -> {:?}", self.last_mode, mode);
            self.last_mode = mode;
        }
    }

    /// Current locomotion state.
    #[must_use]
    pub const fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Tuning the controller was built with.
    #[must_use]
    pub const fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Audio cue sinks, for hosts that inspect or drain them.
    #[must_use]
    pub const fn cues(&self) -> &CueSet<A> {
        &self.cues
    }

    /// Intent from the latest frame.
    #[must_use]
    pub const fn intent(&self) -> &Intent {
        &self.intent
    }

    /// Facing from the latest frame.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }
}

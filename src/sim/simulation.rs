//! Headless frame/tick loop.
//!
//! [`Simulation`] plays the host engine's role: every step it runs the
//! controller's frame phase, its fixed tick, then integrates the body and
//! resolves collisions. Frame and tick share one `dt`.

use glam::Vec3;
use log::info;
use serde::Serialize;

use crate::audio::{CueSet, RecordingCue};
use crate::config::{ConfigError, LocomotionConfig};
use crate::controller::LocomotionController;
use crate::input::Intent;
use crate::look::Facing;
use crate::physics::RigidBody;
use crate::sim::body::SimBody;
use crate::sim::world::BoxWorld;
use crate::state::Mode;

/// Snapshot recorded after each step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Simulated seconds at the end of the step.
    pub time: f32,
    /// Body centre after collision resolution.
    pub position: Vec3,
    /// Body velocity after collision resolution.
    pub velocity: Vec3,
    /// Resolved locomotion mode.
    pub mode: Mode,
    /// Walk/sprint ramp.
    pub current_accel: f32,
    /// Ground contact from the frame's scan.
    pub grounded: bool,
    /// A wall-run is active.
    pub wall_running: bool,
    /// A climb is active.
    pub climbing: bool,
    /// The body's own gravity is on.
    pub body_gravity: bool,
    /// Impulses the body received during this step.
    pub impulses: usize,
}

impl Sample {
    /// Horizontal speed of the body.
    #[must_use]
    pub fn planar_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}

/// One character on a box course, stepped without an engine.
#[derive(Debug, Clone)]
pub struct Simulation {
    controller: LocomotionController<RecordingCue>,
    body: SimBody,
    world: BoxWorld,
    time: f32,
    samples: Vec<Sample>,
}

impl Simulation {
    /// Spawns a character at `spawn` inside `world`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when `config` fails validation.
    pub fn new(
        config: LocomotionConfig,
        world: BoxWorld,
        spawn: Vec3,
    ) -> Result<Self, ConfigError> {
        let controller = LocomotionController::try_new(config, CueSet::default())?;
        let mut body = SimBody::character(spawn);
        controller.attach(&mut body);
        Ok(Self {
            controller,
            body,
            world,
            time: 0.0,
            samples: Vec::new(),
        })
    }

    /// Advances one frame and one fixed tick of `dt` seconds and returns the
    /// sample it recorded.
    pub fn step(&mut self, dt: f32, intent: Intent, facing: Facing) -> Sample {
        let impulses_before = self.body.impulses().len();

        self.controller.frame(dt, intent, facing, &self.world, &mut self.body);
        self.controller.tick(dt, &mut self.body);
        self.body.integrate(dt);
        self.world.resolve(&mut self.body);
        self.time += dt;

        let state = self.controller.state();
        let sample = Sample {
            time: self.time,
            position: self.body.position(),
            velocity: self.body.velocity(),
            mode: state.mode(),
            current_accel: state.current_accel(),
            grounded: state.grounded(),
            wall_running: state.wall_running(),
            climbing: state.climbing(),
            body_gravity: self.body.gravity_enabled(),
            impulses: self.body.impulses().len() - impulses_before,
        };
        self.samples.push(sample);
        sample
    }

    /// Runs `seconds` of simulated time at `hz` steps per second.
    ///
    /// `script` maps the elapsed time to the intent and facing for each step.
    pub fn run<F>(&mut self, seconds: f32, hz: f32, mut script: F) -> &[Sample]
    where
        F: FnMut(f32) -> (Intent, Facing),
    {
        let dt = 1.0 / hz;
        let steps = (seconds * hz).round() as usize;
        let start = self.samples.len();
        for _ in 0..steps {
            let (intent, facing) = script(self.time);
            self.step(dt, intent, facing);
        }
        info!(
            "simulated {steps} steps ({:.2}s) ending at {:?}",
            self.time,
            self.body.position()
        );
        self.samples.get(start..).unwrap_or_default()
    }

    /// Every sample recorded so far.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Controller driving the character.
    #[must_use]
    pub const fn controller(&self) -> &LocomotionController<RecordingCue> {
        &self.controller
    }

    /// Body after the latest step.
    #[must_use]
    pub const fn body(&self) -> &SimBody {
        &self.body
    }

    /// Course geometry.
    #[must_use]
    pub const fn world(&self) -> &BoxWorld {
        &self.world
    }

    /// Simulated seconds so far.
    #[must_use]
    pub const fn time(&self) -> f32 {
        self.time
    }
}

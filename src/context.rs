//! Borrowed collaborators shared by one frame or tick.

use crate::audio::CueSet;
use crate::config::LocomotionConfig;
use crate::look::Facing;

/// Everything an update step may read or command besides the state itself.
pub struct StepContext<'a, B: ?Sized, A> {
    /// Validated tuning.
    pub config: &'a LocomotionConfig,
    /// Facing for this frame.
    pub facing: Facing,
    /// Length of the frame or tick in seconds.
    pub dt: f32,
    /// Body receiving forces and velocity resets.
    pub body: &'a mut B,
    /// Audio cue sinks.
    pub cues: &'a mut CueSet<A>,
}

impl<'a, B: ?Sized, A> StepContext<'a, B, A> {
    /// Bundles the borrows for one step.
    pub const fn new(
        config: &'a LocomotionConfig,
        facing: Facing,
        dt: f32,
        body: &'a mut B,
        cues: &'a mut CueSet<A>,
    ) -> Self {
        Self {
            config,
            facing,
            dt,
            body,
            cues,
        }
    }
}

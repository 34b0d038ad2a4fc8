//! Fire-and-forget audio cues.
//!
//! Playback is an external concern. The controller only issues play, stop
//! and pitch commands and never checks whether they succeeded.

use serde::Serialize;

use crate::constants::{SPRINT_STEP_PITCH, WALK_STEP_PITCH};

/// A single playable sound source.
pub trait AudioCue {
    /// Starts playback from the beginning.
    fn play(&mut self);
    /// Stops playback; stopping a silent cue does nothing.
    fn stop(&mut self);
    /// Playback rate multiplier.
    fn set_pitch(&mut self, pitch: f32);
    /// Whether the cue is currently audible.
    fn is_playing(&self) -> bool;
}

/// Cue that ignores every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&mut self) {}
    fn stop(&mut self) {}
    fn set_pitch(&mut self, _pitch: f32) {}
    fn is_playing(&self) -> bool {
        false
    }
}

/// Cue that remembers the commands it received.
///
/// Used by the reference simulation and tests to observe which sounds the
/// controller triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RecordingCue {
    playing: bool,
    pitch: f32,
    plays: u32,
    stops: u32,
}

impl RecordingCue {
    /// Last pitch set.
    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Number of `play` commands that started playback.
    #[must_use]
    pub const fn plays(&self) -> u32 {
        self.plays
    }

    /// Number of `stop` commands that interrupted playback.
    #[must_use]
    pub const fn stops(&self) -> u32 {
        self.stops
    }
}

impl AudioCue for RecordingCue {
    fn play(&mut self) {
        self.playing = true;
        self.plays += 1;
    }

    fn stop(&mut self) {
        if self.playing {
            self.stops += 1;
        }
        self.playing = false;
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// The three sources the controller drives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CueSet<A> {
    /// Looping footsteps; pitch distinguishes walking from sprinting.
    pub step: A,
    /// One-shot jump sound.
    pub jump: A,
    /// Looping climb sound.
    pub climb: A,
}

impl<A: AudioCue> CueSet<A> {
    /// Loops footsteps at walking pitch.
    pub fn walk_steps(&mut self) {
        self.loop_steps(WALK_STEP_PITCH);
    }

    /// Loops footsteps at sprinting pitch.
    pub fn sprint_steps(&mut self) {
        self.loop_steps(SPRINT_STEP_PITCH);
    }

    fn loop_steps(&mut self, pitch: f32) {
        self.step.set_pitch(pitch);
        if !self.step.is_playing() {
            self.step.play();
        }
    }

    /// Silences footsteps.
    pub fn stop_steps(&mut self) {
        self.step.stop();
    }

    /// Plays the jump sound.
    pub fn jump(&mut self) {
        self.jump.play();
    }

    /// Loops the climb sound unless it is already playing.
    pub fn loop_climb(&mut self) {
        if !self.climb.is_playing() {
            self.climb.play();
        }
    }

    /// Silences the climb sound.
    pub fn stop_climb(&mut self) {
        self.climb.stop();
    }
}

//! Per-character locomotion state.
//!
//! [`LocomotionState`] is owned by the controller and mutated only by the
//! frame phase followed by the tick phase. Wall-running and climbing are
//! sessions stored in a single [`Action`] slot, so the two can never be
//! active together; the remaining flags are orthogonal modifiers.

use glam::Vec3;
use serde::Serialize;

use crate::constants::{SPRINT_ACCEL, WALK_ACCEL};
use crate::physics::RigidBody;
use crate::probe::SurfaceContacts;
use crate::timer::Countdown;

/// Which side of the character a wall was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WallSide {
    /// Wall on the facing left.
    Left,
    /// Wall on the facing right.
    Right,
}

impl WallSide {
    /// Sign of the facing `right` axis pointing away from the wall.
    #[must_use]
    pub const fn away_sign(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }

    /// Sign of the facing `right` axis pointing into the wall.
    #[must_use]
    pub const fn toward_sign(self) -> f32 {
        -self.away_sign()
    }
}

/// An active wall-run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallRunSession {
    /// Side the wall is on.
    pub side: WallSide,
    /// Forward input is held, so the run also climbs.
    pub running_up: bool,
    velocity_reset: bool,
}

impl WallRunSession {
    /// Fresh session against a wall on `side`.
    #[must_use]
    pub const fn new(side: WallSide) -> Self {
        Self {
            side,
            running_up: false,
            velocity_reset: false,
        }
    }

    /// Zeroes the vertical and sideways velocity the first time it is called
    /// for this session. Returns `true` when the velocity was changed.
    pub fn reset_velocity_once<B>(&mut self, body: &mut B, right: Vec3) -> bool
    where
        B: RigidBody + ?Sized,
    {
        if self.velocity_reset {
            return false;
        }
        let velocity = body.velocity();
        let sideways = right * velocity.dot(right);
        let mut kept = velocity - sideways;
        kept.y = 0.0;
        body.set_velocity(kept);
        self.velocity_reset = true;
        true
    }
}

/// An active climb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClimbSession {
    velocity_reset: bool,
    duration: Countdown,
}

impl ClimbSession {
    /// Starts a climb that ends on its own after `duration` seconds.
    #[must_use]
    pub const fn new(duration: f32) -> Self {
        let mut timer = Countdown::idle();
        timer.restart(duration);
        Self {
            velocity_reset: false,
            duration: timer,
        }
    }

    /// Zeroes every velocity component the first time it is called for this
    /// session. Returns `true` when the velocity was changed.
    pub fn reset_velocity_once<B: RigidBody + ?Sized>(&mut self, body: &mut B) -> bool {
        if self.velocity_reset {
            return false;
        }
        body.set_velocity(Vec3::ZERO);
        self.velocity_reset = true;
        true
    }

    /// Advances the duration timer; `true` once the climb has run its course.
    pub const fn expire(&mut self, dt: f32) -> bool {
        self.duration.advance(dt)
    }

    /// Seconds before the climb ends on its own.
    #[must_use]
    pub const fn time_left(&self) -> Option<f32> {
        self.duration.remaining()
    }
}

/// The exclusive action the character is performing, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub enum Action {
    /// Free movement on the ground or in the air.
    #[default]
    None,
    /// Running along a wall.
    WallRun(WallRunSession),
    /// Climbing the wall ahead.
    Climb(ClimbSession),
}

/// Locomotion mode resolved from the action slot and the ground contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    /// Grounded without sprint.
    Walking,
    /// Grounded with sprint held.
    Sprinting,
    /// No ground contact and no action.
    Airborne,
    /// A wall-run session is active.
    WallRunning,
    /// A climb session is active.
    Climbing,
}

/// Speed cap and drive multiplier selected for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DriveTarget {
    /// Look-relative speed above which drive stops on that axis.
    pub max_speed: f32,
    /// Multiplier on the configured drive force.
    pub speed_mult: f32,
}

/// Everything the controller remembers between frames for one character.
///
/// Read through the accessors; only the frame and tick phases write it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocomotionState {
    pub(crate) contacts: SurfaceContacts,
    pub(crate) crouching: bool,
    pub(crate) sprinting: bool,
    pub(crate) jumping: bool,
    pub(crate) wants_climb: bool,
    pub(crate) can_jump: bool,
    pub(crate) can_sprint: bool,
    pub(crate) action: Action,
    pub(crate) current_accel: f32,
    pub(crate) drive: Option<DriveTarget>,
    pub(crate) current_drag: f32,
    pub(crate) gravity_multiplier: f32,
    pub(crate) height_scale: f32,
    pub(crate) jump_cooldown: Countdown,
    pub(crate) climb_cooldown: Countdown,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            contacts: SurfaceContacts::default(),
            crouching: false,
            sprinting: false,
            jumping: false,
            wants_climb: false,
            can_jump: false,
            can_sprint: false,
            action: Action::None,
            current_accel: WALK_ACCEL,
            drive: None,
            current_drag: 0.0,
            gravity_multiplier: 0.0,
            height_scale: 1.0,
            jump_cooldown: Countdown::idle(),
            climb_cooldown: Countdown::idle(),
        }
    }
}

impl LocomotionState {
    /// Airborne state with walk acceleration and idle timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the tagged mode once, in priority order: climbing, then
    /// wall-running, then the grounded modes, then airborne.
    ///
    /// # Examples
    /// ```
    /// use strider::state::{LocomotionState, Mode};
    /// assert_eq!(LocomotionState::new().mode(), Mode::Airborne);
    /// ```
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self.action {
            Action::Climb(_) => Mode::Climbing,
            Action::WallRun(_) => Mode::WallRunning,
            Action::None if self.contacts.grounded && self.sprinting => Mode::Sprinting,
            Action::None if self.contacts.grounded => Mode::Walking,
            Action::None => Mode::Airborne,
        }
    }

    /// Surface contacts from the latest scan.
    #[must_use]
    pub const fn contacts(&self) -> &SurfaceContacts {
        &self.contacts
    }

    /// Feet are on ground-layer geometry.
    #[must_use]
    pub const fn grounded(&self) -> bool {
        self.contacts.grounded
    }

    /// A rise ahead is low enough to walk up.
    #[must_use]
    pub const fn on_slope(&self) -> bool {
        self.contacts.on_slope
    }

    /// Crouch is held.
    #[must_use]
    pub const fn crouching(&self) -> bool {
        self.crouching
    }

    /// Sprint was honoured this frame.
    #[must_use]
    pub const fn sprinting(&self) -> bool {
        self.sprinting
    }

    /// Jump is held.
    #[must_use]
    pub const fn jumping(&self) -> bool {
        self.jumping
    }

    /// Forward input is held against a wall ahead.
    #[must_use]
    pub const fn wants_climb(&self) -> bool {
        self.wants_climb
    }

    /// Ground or a wall-run allows a jump.
    #[must_use]
    pub const fn can_jump(&self) -> bool {
        self.can_jump
    }

    /// Grounded, so sprint would be honoured.
    #[must_use]
    pub const fn can_sprint(&self) -> bool {
        self.can_sprint
    }

    /// Climbing is allowed while no wall-run is active and the climb
    /// cooldown has elapsed.
    #[must_use]
    pub const fn can_climb(&self) -> bool {
        !self.wall_running() && !self.climb_cooldown.is_pending()
    }

    /// A jump happened within the current cooldown window.
    #[must_use]
    pub const fn already_jumped(&self) -> bool {
        self.jump_cooldown.is_pending()
    }

    /// The exclusive action slot.
    #[must_use]
    pub const fn action(&self) -> &Action {
        &self.action
    }

    /// A wall-run is active.
    #[must_use]
    pub const fn wall_running(&self) -> bool {
        matches!(self.action, Action::WallRun(_))
    }

    /// A climb is active.
    #[must_use]
    pub const fn climbing(&self) -> bool {
        matches!(self.action, Action::Climb(_))
    }

    /// Side of the active wall-run, if any.
    #[must_use]
    pub const fn wall_side(&self) -> Option<WallSide> {
        match self.action {
            Action::WallRun(session) => Some(session.side),
            _ => None,
        }
    }

    /// Body gravity must be off exactly while an action is active.
    #[must_use]
    pub const fn gravity_enabled(&self) -> bool {
        matches!(self.action, Action::None)
    }

    /// Walk/sprint ramp in `[1, 2]`.
    #[must_use]
    pub const fn current_accel(&self) -> f32 {
        self.current_accel
    }

    /// Cap and multiplier chosen this frame; `None` while airborne.
    #[must_use]
    pub const fn drive(&self) -> Option<DriveTarget> {
        self.drive
    }

    /// Drag last handed to the body.
    #[must_use]
    pub const fn current_drag(&self) -> f32 {
        self.current_drag
    }

    /// Multiplier on the extra downward force.
    #[must_use]
    pub const fn gravity_multiplier(&self) -> f32 {
        self.gravity_multiplier
    }

    /// Collider height scale; reduced while crouching.
    #[must_use]
    pub const fn height_scale(&self) -> f32 {
        self.height_scale
    }

    /// Blocks further jumps while pending.
    #[must_use]
    pub const fn jump_cooldown(&self) -> &Countdown {
        &self.jump_cooldown
    }

    /// Blocks a new climb while pending.
    #[must_use]
    pub const fn climb_cooldown(&self) -> &Countdown {
        &self.climb_cooldown
    }

    /// Moves the walk/sprint ramp toward 2 (sprint) or 1 (walk) by
    /// `rate * dt`, never leaving `[1, 2]`.
    pub(crate) const fn ramp_accel(&mut self, toward_sprint: bool, rate: f32, dt: f32) {
        let step = rate * dt;
        self.current_accel = if toward_sprint {
            (self.current_accel + step).min(SPRINT_ACCEL)
        } else {
            (self.current_accel - step).max(WALK_ACCEL)
        };
    }
}

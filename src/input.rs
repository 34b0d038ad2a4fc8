//! Player intent sampled from an input source.
//!
//! [`Intent`] is transient: it is rebuilt every frame from an
//! [`InputSource`] and never persisted.

use serde::{Deserialize, Serialize};

/// Continuous input axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Strafe: negative is left, positive is right.
    Horizontal,
    /// Negative is back, positive is forward.
    Vertical,
}

/// Discrete held inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Jump, wall-jump and the trigger for held-jump repeats.
    Jump,
    /// Sprint modifier; only honoured on the ground.
    Sprint,
    /// Crouch modifier; also ends a wall-run.
    Crouch,
}

/// Source of raw player input.
pub trait InputSource {
    /// Raw reading of `axis`; callers clamp it.
    fn axis(&self, axis: Axis) -> f32;
    /// Whether `button` is held this frame.
    fn button_held(&self, button: Button) -> bool;
}

/// Directional and button intent for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Strafe axis in `[-1, 1]` once sanitised.
    pub lateral: f32,
    /// Forward axis in `[-1, 1]` once sanitised.
    pub forward: f32,
    /// Jump button held.
    pub jump: bool,
    /// Sprint button held.
    pub sprint: bool,
    /// Crouch button held.
    pub crouch: bool,
}

const fn sanitise_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

impl Intent {
    /// Reads every axis and button from `source` once.
    ///
    /// Axes are clamped to `[-1, 1]`; non-finite readings count as centred.
    ///
    /// # Examples
    /// ```
    /// use strider::input::Intent;
    /// let held = Intent::default().with_forward(3.0).with_jump();
    /// let sampled = Intent::sample(&held);
    /// assert_eq!(sampled.forward, 1.0);
    /// assert!(sampled.jump);
    /// ```
    #[must_use]
    pub fn sample<S: InputSource + ?Sized>(source: &S) -> Self {
        Self {
            lateral: source.axis(Axis::Horizontal),
            forward: source.axis(Axis::Vertical),
            jump: source.button_held(Button::Jump),
            sprint: source.button_held(Button::Sprint),
            crouch: source.button_held(Button::Crouch),
        }
        .sanitised()
    }

    /// Clamps both axes to `[-1, 1]`, treating non-finite values as centred.
    ///
    /// Hosts that write an [`Intent`] directly get the same guarantee as
    /// [`Self::sample`], since the controller sanitises every frame.
    ///
    /// # Examples
    /// ```
    /// use strider::input::Intent;
    /// let clamped = Intent::default().with_forward(4.0).with_lateral(f32::NAN).sanitised();
    /// assert_eq!((clamped.lateral, clamped.forward), (0.0, 1.0));
    /// ```
    #[must_use]
    pub const fn sanitised(self) -> Self {
        Self {
            lateral: sanitise_axis(self.lateral),
            forward: sanitise_axis(self.forward),
            ..self
        }
    }

    /// Sets the strafe axis.
    #[must_use]
    pub const fn with_lateral(mut self, lateral: f32) -> Self {
        self.lateral = lateral;
        self
    }

    /// Sets the forward axis.
    #[must_use]
    pub const fn with_forward(mut self, forward: f32) -> Self {
        self.forward = forward;
        self
    }

    /// Holds jump.
    #[must_use]
    pub const fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    /// Holds sprint.
    #[must_use]
    pub const fn with_sprint(mut self) -> Self {
        self.sprint = true;
        self
    }

    /// Holds crouch.
    #[must_use]
    pub const fn with_crouch(mut self) -> Self {
        self.crouch = true;
        self
    }

    /// Either axis is deflected.
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        self.lateral.abs() > 0.0 || self.forward.abs() > 0.0
    }

    /// Both axes are deflected.
    #[must_use]
    pub const fn is_diagonal(&self) -> bool {
        self.lateral.abs() > 0.0 && self.forward.abs() > 0.0
    }
}

/// A recorded intent replays as an input source.
impl InputSource for Intent {
    fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.lateral,
            Axis::Vertical => self.forward,
        }
    }

    fn button_held(&self, button: Button) -> bool {
        match button {
            Button::Jump => self.jump,
            Button::Sprint => self.sprint,
            Button::Crouch => self.crouch,
        }
    }
}

//! Physics-driven first-person locomotion.
//!
//! The controller turns sampled player intent and surface probes into forces
//! on a rigid body it does not own. Each engine frame runs two phases:
//! [`LocomotionController::frame`] probes the level and resolves intent,
//! then [`LocomotionController::tick`] composes forces on the fixed physics
//! step. The physics engine, input, and audio are reached only through the
//! capability traits in [`physics`], [`input`] and [`audio`].
//!
//! [`sim`] provides an engine-free body and box world for tests and the demo
//! binary, and [`plugin`] wires the controller into a Bevy app.
pub mod actions;
pub mod audio;
pub mod config;
pub mod constants;
pub mod context;
pub mod controller;
pub mod forces;
pub mod input;
pub mod logging;
pub mod look;
pub mod physics;
pub mod plugin;
pub mod probe;
pub mod resolver;
pub mod sim;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod timer;

pub use config::{ConfigError, LocomotionConfig};
pub use controller::LocomotionController;
pub use logging::init as init_logging;
pub use plugin::LocomotionPlugin;
pub use state::{LocomotionState, Mode};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use strider::prelude::*;
    //! ```

    pub use crate::audio::{AudioCue, CueSet, SilentCue};
    pub use crate::config::LocomotionConfig;
    pub use crate::controller::LocomotionController;
    pub use crate::input::{InputSource, Intent};
    pub use crate::look::Facing;
    pub use crate::physics::{ForceMode, LayerMask, RigidBody, SpatialQuery};
    pub use crate::state::{LocomotionState, Mode};
}

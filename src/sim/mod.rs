//! Engine-free reference simulation.
//!
//! Provides a rigid body, box geometry and a stepping loop so the controller
//! can be exercised headless by the demo binary, the ECS plugin and tests.

pub mod body;
pub mod course;
pub mod simulation;
pub mod world;

pub use body::{applied_acceleration, SimBody};
pub use course::Course;
pub use simulation::{Sample, Simulation};
pub use world::{Aabb, BoxWorld, Solid};

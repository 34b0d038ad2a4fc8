//! Test-only body that records the commands it receives.

use glam::Vec3;

use crate::physics::{ForceMode, RigidBody};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordingBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub forces: Vec<(Vec3, ForceMode)>,
    pub gravity_enabled: bool,
    pub drag: Option<f32>,
    pub mass: Option<f32>,
}

impl Default for RecordingBody {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            forces: Vec::new(),
            gravity_enabled: true,
            drag: None,
            mass: None,
        }
    }
}

impl RecordingBody {
    pub fn moving(velocity: Vec3) -> Self {
        Self {
            velocity,
            ..Self::default()
        }
    }

    /// Sum of the forces issued with `mode`.
    pub fn total(&self, mode: ForceMode) -> Vec3 {
        self.forces
            .iter()
            .filter(|(_, m)| *m == mode)
            .map(|(f, _)| *f)
            .sum()
    }

    pub fn impulses(&self) -> Vec<Vec3> {
        self.forces
            .iter()
            .filter(|(_, m)| *m == ForceMode::Impulse)
            .map(|(f, _)| *f)
            .collect()
    }
}

impl RigidBody for RecordingBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn apply_force(&mut self, force: Vec3, mode: ForceMode) {
        self.forces.push((force, mode));
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }

    fn set_drag(&mut self, drag: f32) {
        self.drag = Some(drag);
    }

    fn set_mass(&mut self, mass: f32) {
        self.mass = Some(mass);
    }
}

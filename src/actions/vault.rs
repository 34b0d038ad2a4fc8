//! Automatic lift over low ledges.
//!
//! The probe raises `should_auto_vault` for ledges on the right, the left or
//! ahead, but the assist is the same upward impulse for every side. A nudge
//! toward the ledge was likely intended; until that is settled the impulse
//! stays vertical.

use glam::Vec3;
use log::debug;

use crate::audio::AudioCue;
use crate::config::LocomotionConfig;
use crate::constants::VAULT_IMPULSE_DIVISOR;
use crate::context::StepContext;
use crate::physics::{ForceMode, RigidBody};
use crate::state::LocomotionState;

/// Upward lift of one vault tick.
#[must_use]
pub fn impulse(config: &LocomotionConfig) -> Vec3 {
    Vec3::Y * (config.jump_force / VAULT_IMPULSE_DIVISOR)
}

/// Applies the vault impulse on every tick the ledge is flagged.
///
/// Returns `true` when an impulse was issued.
pub fn update<B, A>(state: &LocomotionState, ctx: &mut StepContext<'_, B, A>) -> bool
where
    B: RigidBody + ?Sized,
    A: AudioCue,
{
    if !state.contacts.should_auto_vault {
        return false;
    }
    let lift = impulse(ctx.config);
    ctx.body.apply_force(lift, ForceMode::Impulse);
    debug!("auto-vault impulse {lift:?}");
    true
}

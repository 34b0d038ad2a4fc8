//! One-shot and timed force injections.
//!
//! Jumps and vaults are impulses; wall-runs and climbs are sessions held in
//! the state's exclusive [`Action`](crate::state::Action) slot. Entering one
//! session always ends the other first.

pub mod climb;
pub mod jump;
pub mod vault;
pub mod wall_run;

// BuildSleuth - app/mod.rs
//
// Application layer: orchestration and state management.
// Dependencies: core, platform, util.

pub mod load;
pub mod state;

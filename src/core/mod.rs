// BuildSleuth - core/mod.rs
//
// Core business logic layer.
// Dependencies: util layer and serialisation crates only.
// Must NOT depend on: platform, app, or the filesystem.

pub mod chart;
pub mod export;
pub mod filter;
pub mod model;
pub mod parser;

// BuildSleuth - platform/mod.rs
//
// Platform abstraction layer: filesystem access and config directories.
// Dependencies: util, core (validation only), directories, memmap2, toml.
// Must NOT depend on: app.

pub mod config;
pub mod fs;

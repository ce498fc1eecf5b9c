//! Application layer - config, logging, fleet registry, roster loading

pub mod config;
pub mod fleet;
pub mod logging;
pub mod roster;

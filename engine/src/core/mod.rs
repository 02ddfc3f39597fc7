//! Application core: CLI, configuration, constants

pub mod cli;
pub mod config;
pub mod constants;

//! CLI library components for the IMO Bench loader.

pub mod commands;
pub mod logging;
pub mod output;

//! fedctl: join and unjoin clusters to a federation control plane.

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod options;
pub mod util;

pub mod args;

use crate::backend::ClusterBackend;
use crate::commands::{ConfigCommand, JoinCommand, UnjoinCommand};
use crate::config::Config;
use anyhow::Result;
use args::{ConfigArgs, JoinArgs, UnjoinArgs};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fedctl")]
#[command(about = "Join and unjoin clusters to a federation control plane")]
#[command(version)]
pub struct Cli {
    /// Show verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a cluster with the federation control plane
    Join(JoinArgs),
    /// Remove a cluster from the federation control plane
    Unjoin(UnjoinArgs),
    /// Show or generate the fedctl configuration file
    Config(ConfigArgs),
}

/// Command dispatcher that routes CLI commands to their implementations
pub struct CommandDispatcher {
    config: Config,
    backend: Box<dyn ClusterBackend>,
}

impl CommandDispatcher {
    pub fn new(config: Config, backend: Box<dyn ClusterBackend>) -> Self {
        Self { config, backend }
    }

    pub fn dispatch(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Join(args) => JoinCommand::new().execute(args, self.backend.as_ref()),
            Commands::Unjoin(args) => UnjoinCommand::new().execute(args, self.backend.as_ref()),
            Commands::Config(args) => ConfigCommand::new().execute(args, &self.config),
        }
    }
}

use clap::Args;

use crate::options::{CommonSubcommandOptions, GlobalSubcommandOptions};

/// Arguments for the join command
#[derive(Debug, Clone, Args)]
pub struct JoinArgs {
    #[command(flatten)]
    pub global: GlobalSubcommandOptions,

    #[command(flatten)]
    pub common: CommonSubcommandOptions,

    /// Name of the cluster to join
    #[arg(value_name = "NAME")]
    pub args: Vec<String>,
}

/// Arguments for the unjoin command
#[derive(Debug, Clone, Args)]
pub struct UnjoinArgs {
    #[command(flatten)]
    pub global: GlobalSubcommandOptions,

    #[command(flatten)]
    pub common: CommonSubcommandOptions,

    /// Name of the cluster to remove
    #[arg(value_name = "NAME")]
    pub args: Vec<String>,
}

/// Arguments for the config command
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub global: GlobalSubcommandOptions,

    /// Show current configuration path and status
    #[arg(long)]
    pub show: bool,

    /// Generate sample configuration
    #[arg(long)]
    pub init: bool,
}

use crate::cli::args::ConfigArgs;
use crate::config::{Config, LOCAL_CONFIG_FILE};
use crate::options::GlobalSubcommandOptions;
use anyhow::Result;
use std::path::PathBuf;

/// Config command implementation
pub struct ConfigCommand;

impl ConfigCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: ConfigArgs, config: &Config) -> Result<()> {
        if args.init {
            let sample_config = Config::create_sample_config()?;
            println!("# Sample fedctl configuration");
            println!(
                "# Copy this to ~/.config/fedctl/config.yaml or {}",
                LOCAL_CONFIG_FILE
            );
            println!();
            println!("{}", sample_config);
            return Ok(());
        }

        if args.show {
            self.show(&args.global, config);
            return Ok(());
        }

        // If no flags provided, show help
        println!("fedctl config management");
        println!();
        println!("Options:");
        println!("  --show  Show current configuration status");
        println!("  --init  Generate sample configuration");
        println!();
        println!("Examples:");
        println!("  fedctl config --show");
        println!("  fedctl config --init > ~/.config/fedctl/config.yaml");
        println!("  fedctl config --init > {}", LOCAL_CONFIG_FILE);

        Ok(())
    }

    fn show(&self, global: &GlobalSubcommandOptions, config: &Config) {
        println!("fedctl configuration status:");
        println!();

        let local_config_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config_path.exists() {
            println!("  [found]   Local config: {}", LOCAL_CONFIG_FILE);
        } else {
            println!("  [missing] Local config: {}", LOCAL_CONFIG_FILE);
        }

        match Config::user_config_path() {
            Some(path) if path.exists() => println!("  [found]   User config: {}", path.display()),
            Some(path) => println!("  [missing] User config: {}", path.display()),
            None => println!("  [missing] User config: unable to determine config directory"),
        }

        println!();
        println!("Behavior:");
        println!("  verbose:   {}", config.behavior.verbose);
        println!(
            "  log level: {}",
            config.behavior.log_level.as_deref().unwrap_or("(default)")
        );

        println!();
        println!("Global options:");
        println!(
            "  kubeconfig:           {}",
            or_default(&global.kubeconfig, "(default lookup)")
        );
        println!(
            "  host-cluster-context: {}",
            or_default(&global.host_cluster_context, "(current context)")
        );
        println!("  federation-namespace: {}", global.federation_namespace);
        println!("  dry-run:              {}", global.dry_run);
    }
}

impl Default for ConfigCommand {
    fn default() -> Self {
        Self::new()
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_args(show: bool, init: bool) -> ConfigArgs {
        ConfigArgs {
            global: GlobalSubcommandOptions::default(),
            show,
            init,
        }
    }

    #[test]
    fn test_or_default() {
        assert_eq!(or_default("", "(current context)"), "(current context)");
        assert_eq!(or_default("host", "(current context)"), "host");
    }

    #[test]
    fn test_execute_modes_succeed() {
        let command = ConfigCommand::new();
        let config = Config::default();

        assert!(command.execute(config_args(false, true), &config).is_ok());
        assert!(command.execute(config_args(true, false), &config).is_ok());
        assert!(command.execute(config_args(false, false), &config).is_ok());
    }
}

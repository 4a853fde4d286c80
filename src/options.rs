//! Option structs shared by the `fedctl` subcommands.
//!
//! [`GlobalSubcommandOptions`] is flattened into every subcommand;
//! [`CommonSubcommandOptions`] only into the cluster-lifecycle ones (join,
//! unjoin). Both register their flags on a `clap::Command` through
//! [`clap::Args`], either via `#[command(flatten)]` or the explicit `bind`.

use clap::{ArgMatches, Args, Command, FromArgMatches};
use thiserror::Error;
use tracing::debug;

use crate::util::{DEFAULT_FEDERATION_SYSTEM_NAMESPACE, MULTICLUSTER_PUBLIC_NAMESPACE};

/// Errors raised while resolving subcommand options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A required positional argument was not supplied
    #[error("{0} is required")]
    MissingArgument(&'static str),
}

/// Options accepted by every subcommand
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct GlobalSubcommandOptions {
    /// Host cluster context
    #[arg(long = "host-cluster-context", default_value = "", hide_default_value = true)]
    pub host_cluster_context: String,

    /// Namespace in the host cluster where the federation system components are installed.
    /// This namespace will also be the target of propagation if the controller manager is
    /// configured with --limited-scope and clusters are joined with --limited-scope.
    #[arg(long = "federation-namespace", default_value = DEFAULT_FEDERATION_SYSTEM_NAMESPACE)]
    pub federation_namespace: String,

    /// Path to the kubeconfig file to use for CLI requests
    #[arg(long = "kubeconfig", default_value = "", hide_default_value = true)]
    pub kubeconfig: String,

    /// Run the command in dry-run mode, without making any server requests
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Default for GlobalSubcommandOptions {
    fn default() -> Self {
        Self {
            host_cluster_context: String::new(),
            federation_namespace: DEFAULT_FEDERATION_SYSTEM_NAMESPACE.to_string(),
            kubeconfig: String::new(),
            dry_run: false,
        }
    }
}

impl GlobalSubcommandOptions {
    /// Register the global flags on `cmd`
    pub fn bind(cmd: Command) -> Command {
        <Self as Args>::augment_args(cmd)
    }

    /// Read the global flags back out of parsed matches
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        <Self as FromArgMatches>::from_arg_matches(matches)
    }
}

/// Options shared by the cluster-lifecycle subcommands
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct CommonSubcommandOptions {
    /// Only ever set by [`CommonSubcommandOptions::set_name`]
    #[arg(skip)]
    pub cluster_name: String,

    /// Name of the cluster's context in the local kubeconfig. Defaults to cluster name if unspecified.
    #[arg(long = "cluster-context", default_value = "", hide_default_value = true)]
    pub cluster_context: String,

    /// Namespace in the host cluster where clusters are registered
    #[arg(long = "registry-namespace", default_value = MULTICLUSTER_PUBLIC_NAMESPACE)]
    pub cluster_namespace: String,

    /// If set, overrides the use of host-cluster-context name in resource names created in
    /// the target cluster. This option must be used when the context name has characters
    /// invalid for kubernetes resources like "/" and ":".
    #[arg(long = "host-cluster-name", default_value = "", hide_default_value = true)]
    pub host_cluster_name: String,
}

impl Default for CommonSubcommandOptions {
    fn default() -> Self {
        Self {
            cluster_name: String::new(),
            cluster_context: String::new(),
            cluster_namespace: MULTICLUSTER_PUBLIC_NAMESPACE.to_string(),
            host_cluster_name: String::new(),
        }
    }
}

impl CommonSubcommandOptions {
    /// Register the common flags on `cmd`
    pub fn bind(cmd: Command) -> Command {
        <Self as Args>::augment_args(cmd)
    }

    /// Read the common flags back out of parsed matches.
    ///
    /// `cluster_name` is left empty; resolve it with [`Self::set_name`].
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        <Self as FromArgMatches>::from_arg_matches(matches)
    }

    /// Take the cluster name from the first positional argument.
    ///
    /// Extra arguments are ignored. The name itself is not validated here.
    pub fn set_name<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), OptionsError> {
        let name = args.first().ok_or(OptionsError::MissingArgument("NAME"))?;

        self.cluster_name = name.as_ref().to_string();
        debug!(cluster = %self.cluster_name, "resolved cluster name");
        Ok(())
    }

    /// Apply defaults that depend on the resolved cluster name.
    ///
    /// Must run after [`Self::set_name`].
    pub fn finalize(&mut self) {
        if self.cluster_context.is_empty() {
            debug!(
                cluster = %self.cluster_name,
                "no --cluster-context given, using cluster name"
            );
            self.cluster_context = self.cluster_name.clone();
        }
    }
}

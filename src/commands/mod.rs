pub mod config;
pub mod join;
pub mod unjoin;

pub use config::ConfigCommand;
pub use join::JoinCommand;
pub use unjoin::UnjoinCommand;

use crate::backend::ClusterPlan;
use crate::options::{CommonSubcommandOptions, GlobalSubcommandOptions, OptionsError};
use anyhow::Result;

/// Shared behaviour of the cluster-lifecycle commands
pub trait Command {
    type Args;

    /// Resolve positional arguments and deferred defaults into a plan
    fn plan(&self, args: Self::Args) -> Result<ClusterPlan>;
}

/// Resolve the cluster name and apply the defaults that depend on it
pub(crate) fn resolve_common(
    common: &mut CommonSubcommandOptions,
    args: &[String],
) -> Result<(), OptionsError> {
    common.set_name(args)?;
    common.finalize();
    Ok(())
}

/// Name to use for resources that identify the host cluster.
///
/// Context names may contain characters like `/` and `:` that are invalid
/// in resource names, so `--host-cluster-name` wins when given.
pub(crate) fn host_cluster_name(
    global: &GlobalSubcommandOptions,
    common: &CommonSubcommandOptions,
) -> String {
    if common.host_cluster_name.is_empty() {
        global.host_cluster_context.clone()
    } else {
        common.host_cluster_name.clone()
    }
}

/// Resolve the lifecycle options and the positional NAME into a plan
pub(crate) fn build_plan(
    global: GlobalSubcommandOptions,
    mut common: CommonSubcommandOptions,
    args: &[String],
) -> Result<ClusterPlan, OptionsError> {
    resolve_common(&mut common, args)?;
    let host_cluster_name = host_cluster_name(&global, &common);

    Ok(ClusterPlan {
        cluster_name: common.cluster_name,
        cluster_context: common.cluster_context,
        registry_namespace: common.cluster_namespace,
        federation_namespace: global.federation_namespace,
        host_cluster_context: global.host_cluster_context,
        host_cluster_name,
        kubeconfig: global.kubeconfig,
        dry_run: global.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_common_sets_name_and_context() {
        let mut common = CommonSubcommandOptions::default();

        resolve_common(&mut common, &["member-1".to_string()]).unwrap();
        assert_eq!(common.cluster_name, "member-1");
        assert_eq!(common.cluster_context, "member-1");
    }

    #[test]
    fn test_resolve_common_without_name_skips_finalize() {
        let mut common = CommonSubcommandOptions::default();

        let err = resolve_common(&mut common, &[]).unwrap_err();
        assert_eq!(err, OptionsError::MissingArgument("NAME"));
        assert_eq!(common.cluster_context, "");
    }

    #[test]
    fn test_host_cluster_name_prefers_override() {
        let global = GlobalSubcommandOptions {
            host_cluster_context: "arn:aws:eks:us-east-1:1234:cluster/host".to_string(),
            ..Default::default()
        };
        let mut common = CommonSubcommandOptions::default();
        assert_eq!(
            host_cluster_name(&global, &common),
            "arn:aws:eks:us-east-1:1234:cluster/host"
        );

        common.host_cluster_name = "host".to_string();
        assert_eq!(host_cluster_name(&global, &common), "host");
    }

    #[test]
    fn test_build_plan_carries_every_option() {
        let global = GlobalSubcommandOptions {
            host_cluster_context: "host".to_string(),
            federation_namespace: "fed".to_string(),
            kubeconfig: "/tmp/kc".to_string(),
            dry_run: true,
        };
        let common = CommonSubcommandOptions {
            cluster_namespace: "registry".to_string(),
            host_cluster_name: "host-name".to_string(),
            ..Default::default()
        };

        let plan = build_plan(global, common, &["member-1".to_string()]).unwrap();
        assert_eq!(
            plan,
            ClusterPlan {
                cluster_name: "member-1".to_string(),
                cluster_context: "member-1".to_string(),
                registry_namespace: "registry".to_string(),
                federation_namespace: "fed".to_string(),
                host_cluster_context: "host".to_string(),
                host_cluster_name: "host-name".to_string(),
                kubeconfig: "/tmp/kc".to_string(),
                dry_run: true,
            }
        );
    }

    #[test]
    fn test_build_plan_requires_name() {
        let err = build_plan(
            GlobalSubcommandOptions::default(),
            CommonSubcommandOptions::default(),
            &[],
        )
        .unwrap_err();
        assert_eq!(err, OptionsError::MissingArgument("NAME"));
    }
}

use crate::backend::{render_plan, ClusterBackend, ClusterPlan};
use crate::cli::args::UnjoinArgs;
use crate::commands::{build_plan, Command};
use anyhow::Result;
use tracing::info;

/// Command that removes a member cluster from the federation
pub struct UnjoinCommand;

impl UnjoinCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: UnjoinArgs, backend: &dyn ClusterBackend) -> Result<()> {
        let plan = self.plan(args)?;

        if plan.dry_run {
            info!(cluster = %plan.cluster_name, "dry run, not unjoining cluster");
            println!("{}", render_plan("unjoin (dry run)", &plan)?);
            return Ok(());
        }

        info!(cluster = %plan.cluster_name, "unjoining cluster");
        backend.unjoin(&plan)
    }
}

impl Default for UnjoinCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for UnjoinCommand {
    type Args = UnjoinArgs;

    fn plan(&self, args: UnjoinArgs) -> Result<ClusterPlan> {
        Ok(build_plan(args.global, args.common, &args.args)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockClusterBackend;
    use crate::options::{CommonSubcommandOptions, GlobalSubcommandOptions};

    fn unjoin_args(names: &[&str]) -> UnjoinArgs {
        UnjoinArgs {
            global: GlobalSubcommandOptions::default(),
            common: CommonSubcommandOptions::default(),
            args: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    #[test]
    fn test_plan_uses_cluster_name_as_context() {
        let plan = UnjoinCommand::new().plan(unjoin_args(&["member-2"])).unwrap();

        assert_eq!(plan.cluster_name, "member-2");
        assert_eq!(plan.cluster_context, "member-2");
        assert_eq!(plan.host_cluster_name, "");
    }

    #[test]
    fn test_missing_name_never_reaches_backend() {
        let mut backend = MockClusterBackend::new();
        backend.expect_unjoin().times(0);

        let result = UnjoinCommand::new().execute(unjoin_args(&[]), &backend);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_calls_backend() {
        let mut backend = MockClusterBackend::new();
        backend
            .expect_unjoin()
            .withf(|plan| plan.cluster_name == "member-2")
            .times(1)
            .returning(|_| Ok(()));

        UnjoinCommand::new()
            .execute(unjoin_args(&["member-2"]), &backend)
            .unwrap();
    }

    #[test]
    fn test_execute_dry_run_skips_backend() {
        let mut backend = MockClusterBackend::new();
        backend.expect_unjoin().times(0);

        let mut args = unjoin_args(&["member-2"]);
        args.global.dry_run = true;

        UnjoinCommand::new().execute(args, &backend).unwrap();
    }
}

use crate::backend::{render_plan, ClusterBackend, ClusterPlan};
use crate::cli::args::JoinArgs;
use crate::commands::{build_plan, Command};
use anyhow::Result;
use tracing::info;

/// Command that registers a member cluster with the federation
pub struct JoinCommand;

impl JoinCommand {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the arguments and hand the plan to `backend`.
    ///
    /// In dry-run mode the plan is printed and the backend is never called.
    pub fn execute(&self, args: JoinArgs, backend: &dyn ClusterBackend) -> Result<()> {
        let plan = self.plan(args)?;

        if plan.dry_run {
            info!(cluster = %plan.cluster_name, "dry run, not joining cluster");
            println!("{}", render_plan("join (dry run)", &plan)?);
            return Ok(());
        }

        info!(
            cluster = %plan.cluster_name,
            host = %plan.host_cluster_name,
            "joining cluster"
        );
        backend.join(&plan)
    }
}

impl Default for JoinCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for JoinCommand {
    type Args = JoinArgs;

    fn plan(&self, args: JoinArgs) -> Result<ClusterPlan> {
        Ok(build_plan(args.global, args.common, &args.args)?)
    }
}

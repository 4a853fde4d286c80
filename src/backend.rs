use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Fully resolved identity of a member cluster and the federation it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterPlan {
    pub cluster_name: String,
    pub cluster_context: String,
    pub registry_namespace: String,
    pub federation_namespace: String,
    pub host_cluster_context: String,
    /// Name used for resources created in the member cluster
    pub host_cluster_name: String,
    pub kubeconfig: String,
    pub dry_run: bool,
}

/// Performs the cluster-side work of the lifecycle subcommands.
///
/// Callers never invoke a backend for a dry-run plan.
#[cfg_attr(test, mockall::automock)]
pub trait ClusterBackend {
    fn join(&self, plan: &ClusterPlan) -> Result<()>;

    fn unjoin(&self, plan: &ClusterPlan) -> Result<()>;
}

/// Backend that reports resolved plans on stdout instead of contacting a cluster
#[derive(Debug, Clone, Default)]
pub struct PlanPrinter;

impl PlanPrinter {
    pub fn new() -> Self {
        Self
    }
}

impl ClusterBackend for PlanPrinter {
    fn join(&self, plan: &ClusterPlan) -> Result<()> {
        println!("{}", render_plan("join", plan)?);
        Ok(())
    }

    fn unjoin(&self, plan: &ClusterPlan) -> Result<()> {
        println!("{}", render_plan("unjoin", plan)?);
        Ok(())
    }
}

/// Render a plan as a commented YAML document
pub fn render_plan(action: &str, plan: &ClusterPlan) -> Result<String> {
    let body = serde_yaml::to_string(plan)
        .with_context(|| format!("Failed to serialize {} plan", action))?;
    Ok(format!("# fedctl {}\n{}", action, body))
}

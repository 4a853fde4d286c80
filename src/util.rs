/// Namespace in the host cluster where the federation control plane runs
pub const DEFAULT_FEDERATION_SYSTEM_NAMESPACE: &str = "federation-system";

/// Namespace in the host cluster where member clusters are registered
pub const MULTICLUSTER_PUBLIC_NAMESPACE: &str = "kube-multicluster-public";

//! Names and success codes of the provisioning steps

use std::fmt;

/// One call in the provisioning sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `GET /v2/clouds`
    CheckCloudConnection,
    /// `POST /v2/projects`
    CreateProject,
    /// `POST /v2/clusters`
    CreateCluster,
    /// `GET /v2/clusters`
    GetClusters,
    /// `GET /v2/clusters/{id}`
    GetClusterStatus,
    /// `POST /v2/clusters/{id}/allowlist`
    EnableClusterAccess,
    /// `POST /v2/clusters/{id}/users`
    CreateDatabaseUser,
    /// `DELETE /v2/clusters/{id}`
    DeleteCluster,
}

impl Step {
    /// Human readable name used in progress and error lines
    pub fn label(self) -> &'static str {
        match self {
            Step::CheckCloudConnection => "Check Cloud Connection",
            Step::CreateProject => "Create Project",
            Step::CreateCluster => "Create Cluster",
            Step::GetClusters => "Get Clusters",
            Step::GetClusterStatus => "Get Cluster Status",
            Step::EnableClusterAccess => "Enable Cluster Access",
            Step::CreateDatabaseUser => "Create Database User",
            Step::DeleteCluster => "Delete Cluster",
        }
    }

    /// Status codes that count as success for this step
    pub fn expected_statuses(self) -> &'static [u16] {
        match self {
            Step::CheckCloudConnection | Step::GetClusters | Step::GetClusterStatus => &[200],
            Step::CreateProject | Step::CreateDatabaseUser => &[201],
            Step::CreateCluster | Step::EnableClusterAccess | Step::DeleteCluster => &[202],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Control-plane paths
pub mod paths {
    pub const CLOUDS: &str = "/v2/clouds";
    pub const PROJECTS: &str = "/v2/projects";
    pub const CLUSTERS: &str = "/v2/clusters";

    pub fn cluster(cluster_id: &str) -> String {
        format!("{}/{}", CLUSTERS, cluster_id)
    }

    pub fn allowlist(cluster_id: &str) -> String {
        format!("{}/{}/allowlist", CLUSTERS, cluster_id)
    }

    pub fn users(cluster_id: &str) -> String {
        format!("{}/{}/users", CLUSTERS, cluster_id)
    }
}

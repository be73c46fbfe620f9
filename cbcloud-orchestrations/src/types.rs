//! Input and output types for cbcloud orchestrations

use cbcloud_models::{AllowListRule, ClusterTopology, CreateDatabaseUserRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Seconds between two readiness checks unless configured otherwise
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
/// Readiness checks performed before giving up unless configured otherwise
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 30;

/// Fixed-interval readiness poll settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PollPolicy {
    /// Delay between two checks
    pub interval: Duration,
    /// Maximum number of checks, including the first
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            max_attempts: DEFAULT_POLL_MAX_ATTEMPTS,
        }
    }
}

// ============================================================================
// Provision Cluster Orchestration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProvisionInput {
    /// Name of the project created to host the cluster
    pub project_name: String,
    /// Name of the cluster, also used to find it again after creation
    pub cluster_name: String,
    /// Cloud to deploy into (default: first connected cloud)
    pub cloud_id: Option<String>,
    /// Server groups, sizing and version of the cluster
    pub topology: ClusterTopology,
    /// Ingress rule added once the cluster is ready
    pub allow_list: AllowListRule,
    /// Database user created for applications
    pub database_user: CreateDatabaseUserRequest,
    /// Readiness poll settings
    pub poll: PollPolicy,
    /// Request deletion of the cluster once everything succeeded
    pub delete_after: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProvisionOutput {
    pub cloud_id: String,
    pub cloud_provider: String,
    pub project_id: String,
    pub cluster_id: String,
    /// Number of status checks until the cluster reported ready
    pub readiness_checks: u32,
    /// Data-plane hostname of the cluster
    pub access_url: String,
    /// Whether deletion was requested at the end of the run
    pub deletion_requested: bool,
}

// ============================================================================
// Teardown Cluster Orchestration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeardownInput {
    pub cluster_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeardownOutput {
    pub cluster_id: String,
    /// Status reported just before deletion was requested
    pub last_status: Option<String>,
    pub deletion_requested: bool,
}

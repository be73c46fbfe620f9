//! Input and output types for cbcloud activities
//!
//! Accessor fields are `Option`s: a successful response that lacks the
//! field yields `None` and the orchestration decides how to fail.

use cbcloud_models::{AllowListRule, ClusterTopology, CreateDatabaseUserRequest};
use serde::{Deserialize, Serialize};

// ============================================================================
// Get Cloud Activity
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GetCloudInput {
    /// Pick this cloud instead of the first one listed
    pub cloud_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetCloudOutput {
    pub cloud_id: Option<String>,
    pub provider: Option<String>,
}

// ============================================================================
// Create Project Activity
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProjectInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProjectOutput {
    pub project_id: Option<String>,
}

// ============================================================================
// Create Cluster Activity
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateClusterInput {
    pub name: String,
    pub cloud_id: String,
    pub project_id: String,
    pub topology: ClusterTopology,
}

// ============================================================================
// Resolve Cluster Activity
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolveClusterInput {
    /// Name the cluster was created with
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolveClusterOutput {
    pub cluster_id: Option<String>,
}

// ============================================================================
// Check Cluster Ready Activity
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckClusterReadyInput {
    pub cluster_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckClusterReadyOutput {
    /// Status reported by the control plane (e.g. "deploying", "ready")
    pub status: Option<String>,
    pub is_ready: bool,
}

// ============================================================================
// Enable Cluster Access Activity
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnableClusterAccessInput {
    pub cluster_id: String,
    pub rule: AllowListRule,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnableClusterAccessOutput {
    pub cidr_block: String,
}

// ============================================================================
// Create Database User Activity
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDatabaseUserInput {
    pub cluster_id: String,
    pub user: CreateDatabaseUserRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDatabaseUserOutput {
    pub username: String,
}

// ============================================================================
// Delete Cluster Activity
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteClusterInput {
    pub cluster_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteClusterOutput {
    pub deletion_requested: bool,
}

use serde::{Deserialize, Serialize};

/// Envelope returned by the list endpoints (`/v2/clouds`, `/v2/clusters`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Error body returned by the control plane on a failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub error_type: String,
    pub message: String,
}

// ============================================================================
// Clouds and projects
// ============================================================================

/// A cloud account connected to the organisation (AWS, Azure, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cloud {
    pub id: Option<String>,
    pub provider: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProjectRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

// ============================================================================
// Cluster topology
// ============================================================================

/// Server version requested when none is configured
pub const DEFAULT_CLUSTER_VERSION: &str = "latest";
/// Nodes in the default server group
pub const DEFAULT_NODE_COUNT: u32 = 3;
/// AWS instance type for the default server group
pub const DEFAULT_AWS_INSTANCE_SIZE: &str = "m5.xlarge";
/// EBS volume per node for the default server group
pub const DEFAULT_AWS_EBS_SIZE_GIB: u32 = 128;

/// Couchbase services a server group can run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClusterService {
    Data,
    Index,
    Query,
    Search,
    Eventing,
    Analytics,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwsServerSpec {
    pub ebs_size_gib: u32,
    pub instance_size: String,
}

/// A group of identical nodes running the same set of services
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerGroup {
    pub services: Vec<ClusterService>,
    pub size: u32,
    pub aws: AwsServerSpec,
}

/// Shape of the cluster to create
///
/// The default is three `m5.xlarge` nodes with 128 GiB of EBS each,
/// running the data, index and query services on the latest server version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterTopology {
    pub version: String,
    pub servers: Vec<ServerGroup>,
}

impl Default for ServerGroup {
    fn default() -> Self {
        Self {
            services: vec![ClusterService::Data, ClusterService::Index, ClusterService::Query],
            size: DEFAULT_NODE_COUNT,
            aws: AwsServerSpec {
                ebs_size_gib: DEFAULT_AWS_EBS_SIZE_GIB,
                instance_size: DEFAULT_AWS_INSTANCE_SIZE.to_string(),
            },
        }
    }
}

impl Default for ClusterTopology {
    fn default() -> Self {
        Self {
            version: DEFAULT_CLUSTER_VERSION.to_string(),
            servers: vec![ServerGroup::default()],
        }
    }
}

// ============================================================================
// Clusters
// ============================================================================

/// Status value reported once a cluster can serve traffic
pub const CLUSTER_STATUS_READY: &str = "ready";

/// Domain suffix of the data-plane endpoint for a cluster
pub const DATA_PLANE_DOMAIN: &str = "dp.cloud.couchbase.com";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterRequest {
    pub name: String,
    pub cloud_id: String,
    pub project_id: String,
    pub version: String,
    pub servers: Vec<ServerGroup>,
}

impl CreateClusterRequest {
    pub fn new(
        name: impl Into<String>,
        cloud_id: impl Into<String>,
        project_id: impl Into<String>,
        topology: &ClusterTopology,
    ) -> Self {
        Self {
            name: name.into(),
            cloud_id: cloud_id.into(),
            project_id: project_id.into(),
            version: topology.version.clone(),
            servers: topology.servers.clone(),
        }
    }
}

/// Entry of the cluster list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterSummary {
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Single cluster as returned by `GET /v2/clusters/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ClusterDetails {
    pub fn is_ready(&self) -> bool {
        self.status.as_deref() == Some(CLUSTER_STATUS_READY)
    }
}

/// Data-plane hostname clients connect to once the cluster is ready
pub fn access_url(cluster_id: &str) -> String {
    format!("{}.{}", cluster_id, DATA_PLANE_DOMAIN)
}

// ============================================================================
// Network access
// ============================================================================

/// CIDR that admits every IPv4 address
pub const OPEN_TO_WORLD_CIDR: &str = "0.0.0.0/0";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Permanent,
    Temporary,
}

/// Ingress rule for a cluster's allow list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllowListRule {
    pub cidr_block: String,
    pub rule_type: RuleType,
    pub comment: String,
    /// Lifetime of a temporary rule, e.g. "2h"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl AllowListRule {
    pub fn permanent(cidr_block: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            cidr_block: cidr_block.into(),
            rule_type: RuleType::Permanent,
            comment: comment.into(),
            duration: None,
        }
    }

    pub fn temporary(
        cidr_block: impl Into<String>,
        comment: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            cidr_block: cidr_block.into(),
            rule_type: RuleType::Temporary,
            comment: comment.into(),
            duration: Some(duration.into()),
        }
    }

    /// Permanent rule admitting any source address. Insecure; use only for demos.
    pub fn open_to_world() -> Self {
        Self::permanent(OPEN_TO_WORLD_CIDR, "cluster access to all")
    }

    pub fn is_open_to_world(&self) -> bool {
        self.cidr_block == OPEN_TO_WORLD_CIDR
    }
}

impl Default for AllowListRule {
    fn default() -> Self {
        Self::open_to_world()
    }
}

// ============================================================================
// Database users
// ============================================================================

/// Access level granted on every bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BucketAccess {
    DataReader,
    DataWriter,
}

#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatabaseUserRequest {
    pub username: String,
    pub password: String,
    pub all_buckets_access: BucketAccess,
}

impl std::fmt::Debug for CreateDatabaseUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateDatabaseUserRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("all_buckets_access", &self.all_buckets_access)
            .finish()
    }
}

//! Error type shared by the client, activities and orchestrations

use crate::client::ClientError;
use crate::steps::Step;
use thiserror::Error;

/// Where to connect a cloud account when none is found
pub const CONNECT_CLOUD_DOCS: &str =
    "https://docs.couchbase.com/cloud/get-started/deploy-first-cluster.html#connect-a-cloud";

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("{step} failed: status code {status}, error type: {error_type}, message: {message}")]
    Http {
        step: Step,
        status: u16,
        error_type: String,
        message: String,
    },

    #[error("{step}: could not decode response body{}: {source}", status_suffix(.status))]
    Decode {
        step: Step,
        /// Set when the body belonged to a failed response
        status: Option<u16>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{step}: could not encode request body: {source}")]
    Encode {
        step: Step,
        #[source]
        source: serde_json::Error,
    },

    #[error("{step}: request could not be sent: {source}")]
    Request {
        step: Step,
        #[source]
        source: ClientError,
    },

    #[error("{step}: response did not contain `{field}`")]
    MissingField { step: Step, field: &'static str },

    #[error("no cloud is connected. Ensure that the cloud is connected, see {}", CONNECT_CLOUD_DOCS)]
    NoCloudConnected,

    #[error("cloud '{cloud_id}' is not connected to this organisation")]
    CloudNotFound { cloud_id: String },

    #[error("no cluster named '{name}' was found after creation")]
    ClusterNotFound { name: String },

    #[error("{count} clusters are named '{name}', refusing to guess which one was created")]
    AmbiguousCluster { name: String, count: usize },

    #[error("cluster {cluster_id} was not ready after {attempts} checks")]
    ReadinessTimeout { cluster_id: String, attempts: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(status) => format!(" (status code {})", status),
        None => String::new(),
    }
}

impl ProvisionError {
    /// The step that produced this error, if it is tied to one
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Http { step, .. }
            | Self::Decode { step, .. }
            | Self::Encode { step, .. }
            | Self::Request { step, .. }
            | Self::MissingField { step, .. } => Some(*step),
            Self::NoCloudConnected | Self::CloudNotFound { .. } => Some(Step::CheckCloudConnection),
            Self::ClusterNotFound { .. } | Self::AmbiguousCluster { .. } => Some(Step::GetClusters),
            Self::ReadinessTimeout { .. } => Some(Step::GetClusterStatus),
            Self::InvalidConfig(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_names_step() {
        let err = ProvisionError::Http {
            step: Step::CreateProject,
            status: 409,
            error_type: "EntityAlreadyExists".to_string(),
            message: "project exists".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Create Project failed: status code 409, error type: EntityAlreadyExists, message: project exists"
        );
        assert_eq!(err.step(), Some(Step::CreateProject));
    }

    #[test]
    fn test_decode_error_of_successful_response_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ProvisionError::Decode {
            step: Step::GetClusters,
            status: None,
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("Get Clusters: could not decode response body: "));
        assert!(!message.contains("status code"));
    }

    #[test]
    fn test_no_cloud_carries_remediation_hint() {
        assert!(ProvisionError::NoCloudConnected.to_string().contains(CONNECT_CLOUD_DOCS));
    }
}

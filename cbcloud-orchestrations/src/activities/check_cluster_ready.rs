//! Check whether a cluster has finished deploying

use crate::activity_types::{CheckClusterReadyInput, CheckClusterReadyOutput};
use crate::client::{ControlPlane, HttpMethod};
use crate::error::Result;
use crate::response::{decode, send_without_body};
use crate::steps::{paths, Step};
use cbcloud_models::ClusterDetails;

/// Single status check; polling is left to the orchestration
pub async fn activity(
    client: &dyn ControlPlane,
    input: CheckClusterReadyInput,
) -> Result<CheckClusterReadyOutput> {
    let step = Step::GetClusterStatus;
    let path = paths::cluster(&input.cluster_id);
    let response = send_without_body(client, step, HttpMethod::Get, &path).await?;
    let cluster: ClusterDetails = decode(step, &response)?;

    tracing::debug!(
        cluster_id = %input.cluster_id,
        status = cluster.status.as_deref().unwrap_or("<missing>"),
        "Cluster status"
    );

    Ok(CheckClusterReadyOutput {
        is_ready: cluster.is_ready(),
        status: cluster.status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProvisionError;
    use crate::test_support::ScriptedControlPlane;

    fn input() -> CheckClusterReadyInput {
        CheckClusterReadyInput {
            cluster_id: "clus-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ready_status() {
        let client = ScriptedControlPlane::new([(200, r#"{"id":"clus-1","status":"ready"}"#)]);

        let output = activity(&client, input()).await.unwrap();

        assert!(output.is_ready);
        assert_eq!(output.status.as_deref(), Some("ready"));
        assert_eq!(client.requests()[0].path, "/v2/clusters/clus-1");
    }

    #[tokio::test]
    async fn test_deploying_status() {
        let client = ScriptedControlPlane::new([(200, r#"{"status":"deploying"}"#)]);

        let output = activity(&client, input()).await.unwrap();

        assert!(!output.is_ready);
    }

    #[tokio::test]
    async fn test_missing_status_is_absent() {
        let client = ScriptedControlPlane::new([(200, r#"{"id":"clus-1"}"#)]);

        let output = activity(&client, input()).await.unwrap();

        assert_eq!(output.status, None);
        assert!(!output.is_ready);
    }

    #[tokio::test]
    async fn test_not_found() {
        let client = ScriptedControlPlane::new([(
            404,
            r#"{"errorType":"EntityNotFound","message":"cluster not found"}"#,
        )]);

        let err = activity(&client, input()).await.unwrap_err();

        assert!(matches!(err, ProvisionError::Http { status: 404, .. }));
    }
}

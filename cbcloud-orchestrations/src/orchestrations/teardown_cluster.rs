//! Teardown cluster orchestration

use crate::activities::{check_cluster_ready, delete_cluster};
use crate::activity_types::{CheckClusterReadyInput, DeleteClusterInput};
use crate::client::ControlPlane;
use crate::error::Result;
use crate::types::{TeardownInput, TeardownOutput};

/// Looks the cluster up once, so a wrong id fails with the status error, then requests deletion
pub async fn run(client: &dyn ControlPlane, input: TeardownInput) -> Result<TeardownOutput> {
    tracing::info!("Tearing down cluster: {}", input.cluster_id);

    let status = check_cluster_ready::activity(
        client,
        CheckClusterReadyInput {
            cluster_id: input.cluster_id.clone(),
        },
    )
    .await?;

    tracing::info!(
        "Cluster {} is in status '{}'",
        input.cluster_id,
        status.status.as_deref().unwrap_or("unknown")
    );

    let deleted = delete_cluster::activity(
        client,
        DeleteClusterInput {
            cluster_id: input.cluster_id.clone(),
        },
    )
    .await?;

    Ok(TeardownOutput {
        cluster_id: input.cluster_id,
        last_status: status.status,
        deletion_requested: deleted.deletion_requested,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpMethod;
    use crate::error::ProvisionError;
    use crate::test_support::ScriptedControlPlane;

    #[tokio::test]
    async fn test_teardown_checks_then_deletes() {
        let client = ScriptedControlPlane::new([(200, r#"{"status":"ready"}"#), (202, "")]);

        let output = run(
            &client,
            TeardownInput {
                cluster_id: "clus-1".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(output.deletion_requested);
        assert_eq!(output.last_status.as_deref(), Some("ready"));
        let methods: Vec<HttpMethod> = client.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Delete]);
    }

    #[tokio::test]
    async fn test_unknown_cluster_is_not_deleted() {
        let client = ScriptedControlPlane::new([(
            404,
            r#"{"errorType":"EntityNotFound","message":"no such cluster"}"#,
        )]);

        let err = run(
            &client,
            TeardownInput {
                cluster_id: "nope".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ProvisionError::Http { status: 404, .. }));
        assert_eq!(client.requests().len(), 1);
    }
}

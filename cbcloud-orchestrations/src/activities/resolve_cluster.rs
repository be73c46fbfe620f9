//! Find the id of the cluster that was just requested
//!
//! Creation does not return an id, so the cluster list is searched for the
//! name used at creation time. More than one cluster with that name is an
//! error rather than a guess.

use crate::activity_types::{ResolveClusterInput, ResolveClusterOutput};
use crate::client::{ControlPlane, HttpMethod};
use crate::error::{ProvisionError, Result};
use crate::response::{decode, send_without_body};
use crate::steps::{paths, Step};
use cbcloud_models::{ClusterSummary, ListResponse};

pub async fn activity(
    client: &dyn ControlPlane,
    input: ResolveClusterInput,
) -> Result<ResolveClusterOutput> {
    tracing::info!("Looking up cluster id for: {}", input.name);

    let step = Step::GetClusters;
    let response = send_without_body(client, step, HttpMethod::Get, paths::CLUSTERS).await?;
    let clusters: ListResponse<ClusterSummary> = decode(step, &response)?;

    let mut matches: Vec<ClusterSummary> = clusters
        .data
        .into_iter()
        .filter(|cluster| cluster.name.as_deref() == Some(input.name.as_str()))
        .collect();

    match matches.len() {
        0 => {
            tracing::warn!("No cluster named '{}' in the cluster list", input.name);
            Ok(ResolveClusterOutput { cluster_id: None })
        }
        1 => Ok(ResolveClusterOutput {
            cluster_id: matches.remove(0).id,
        }),
        count => Err(ProvisionError::AmbiguousCluster {
            name: input.name,
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedControlPlane;

    fn input(name: &str) -> ResolveClusterInput {
        ResolveClusterInput {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_cluster_is_matched_by_name() {
        let client = ScriptedControlPlane::new([(
            200,
            r#"{"data":[{"id":"old-1","name":"legacy"},{"id":"clus-1","name":"demo"}]}"#,
        )]);

        let output = activity(&client, input("demo")).await.unwrap();

        assert_eq!(output.cluster_id.as_deref(), Some("clus-1"));
    }

    #[tokio::test]
    async fn test_empty_list_yields_nothing() {
        let client = ScriptedControlPlane::new([(200, r#"{"data":[]}"#)]);

        let output = activity(&client, input("demo")).await.unwrap();

        assert_eq!(output.cluster_id, None);
    }

    #[tokio::test]
    async fn test_duplicate_names_are_ambiguous() {
        let client = ScriptedControlPlane::new([(
            200,
            r#"{"data":[{"id":"a","name":"demo"},{"id":"b","name":"demo"}]}"#,
        )]);

        let err = activity(&client, input("demo")).await.unwrap_err();

        assert!(matches!(err, ProvisionError::AmbiguousCluster { count: 2, .. }));
    }
}

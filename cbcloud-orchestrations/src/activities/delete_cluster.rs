//! Request deletion of a cluster

use crate::activity_types::{DeleteClusterInput, DeleteClusterOutput};
use crate::client::{ControlPlane, HttpMethod};
use crate::error::Result;
use crate::response::send_without_body;
use crate::steps::{paths, Step};

pub async fn activity(
    client: &dyn ControlPlane,
    input: DeleteClusterInput,
) -> Result<DeleteClusterOutput> {
    tracing::info!("Deleting cluster: {}", input.cluster_id);

    let path = paths::cluster(&input.cluster_id);
    send_without_body(client, Step::DeleteCluster, HttpMethod::Delete, &path).await?;

    tracing::info!("Cluster deletion initiated");

    Ok(DeleteClusterOutput {
        deletion_requested: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedControlPlane;

    #[tokio::test]
    async fn test_delete_is_accepted() {
        let client = ScriptedControlPlane::new([(202, "")]);

        let output = activity(
            &client,
            DeleteClusterInput {
                cluster_id: "clus-1".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(output.deletion_requested);
        let request = &client.requests()[0];
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/v2/clusters/clus-1");
        assert_eq!(request.body, None);
    }
}

//! Request creation of the cluster

use crate::activity_types::CreateClusterInput;
use crate::client::{ControlPlane, HttpMethod};
use crate::error::Result;
use crate::response::send;
use crate::steps::{paths, Step};
use cbcloud_models::CreateClusterRequest;

/// Creation is asynchronous on the control plane side: a 202 only means the
/// request was accepted, and the response carries no cluster id.
pub async fn activity(
    client: &dyn ControlPlane,
    input: CreateClusterInput,
) -> Result<()> {
    let nodes: u32 = input.topology.servers.iter().map(|group| group.size).sum();
    tracing::info!(
        cloud_id = %input.cloud_id,
        project_id = %input.project_id,
        version = %input.topology.version,
        nodes,
        "Creating cluster: {}",
        input.name
    );

    let request = CreateClusterRequest::new(
        input.name,
        input.cloud_id,
        input.project_id,
        &input.topology,
    );
    send(client, Step::CreateCluster, HttpMethod::Post, paths::CLUSTERS, Some(&request)).await?;
    Ok(())
}

//! Add a network ingress rule to the cluster's allow list

use crate::activity_types::{EnableClusterAccessInput, EnableClusterAccessOutput};
use crate::client::{ControlPlane, HttpMethod};
use crate::error::Result;
use crate::response::send;
use crate::steps::{paths, Step};

pub async fn activity(
    client: &dyn ControlPlane,
    input: EnableClusterAccessInput,
) -> Result<EnableClusterAccessOutput> {
    if input.rule.is_open_to_world() {
        tracing::warn!(
            cluster_id = %input.cluster_id,
            "Allow list rule {} admits every address; restrict it with CBC_ALLOWLIST_CIDR",
            input.rule.cidr_block
        );
    } else {
        tracing::info!(cluster_id = %input.cluster_id, "Allowing access from {}", input.rule.cidr_block);
    }

    let path = paths::allowlist(&input.cluster_id);
    send(client, Step::EnableClusterAccess, HttpMethod::Post, &path, Some(&input.rule)).await?;

    Ok(EnableClusterAccessOutput {
        cidr_block: input.rule.cidr_block,
    })
}

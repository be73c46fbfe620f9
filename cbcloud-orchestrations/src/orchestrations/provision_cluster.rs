//! Provision cluster orchestration
//!
//! Discover cloud → create project → create cluster → resolve cluster id →
//! wait for ready → open network access → create database user
//! (→ delete cluster when requested). Every failure ends the run; nothing
//! created by earlier steps is rolled back.

use crate::activities::{
    check_cluster_ready, create_cluster, create_database_user, create_project, delete_cluster,
    enable_cluster_access, get_cloud, resolve_cluster,
};
use crate::activity_types::{
    CheckClusterReadyInput, CreateClusterInput, CreateDatabaseUserInput, CreateProjectInput,
    DeleteClusterInput, EnableClusterAccessInput, GetCloudInput, ResolveClusterInput,
};
use crate::client::ControlPlane;
use crate::error::{ProvisionError, Result};
use crate::steps::Step;
use crate::types::{PollPolicy, ProvisionInput, ProvisionOutput};

pub async fn run(client: &dyn ControlPlane, input: ProvisionInput) -> Result<ProvisionOutput> {
    validate(&input)?;

    tracing::info!(
        "Provisioning cluster '{}' in new project '{}'",
        input.cluster_name,
        input.project_name
    );

    // Step 1: Discover cloud
    let cloud = get_cloud::activity(
        client,
        GetCloudInput {
            cloud_id: input.cloud_id.clone(),
        },
    )
    .await?;

    let cloud_id = match cloud.cloud_id {
        Some(id) => id,
        None => {
            return Err(match input.cloud_id {
                Some(cloud_id) => ProvisionError::CloudNotFound { cloud_id },
                None => ProvisionError::NoCloudConnected,
            })
        }
    };
    let cloud_provider = cloud.provider.ok_or(ProvisionError::MissingField {
        step: Step::CheckCloudConnection,
        field: "provider",
    })?;

    tracing::info!("Cloud ID: {}", cloud_id);
    tracing::info!("Cloud Provider: {}", cloud_provider);
    if !cloud_provider.eq_ignore_ascii_case("aws") {
        tracing::warn!(
            "Cluster topology specifies AWS sizing but the cloud provider is '{}'",
            cloud_provider
        );
    }

    // Step 2: Create project
    let project = create_project::activity(
        client,
        CreateProjectInput {
            name: input.project_name.clone(),
        },
    )
    .await?;
    let project_id = project.project_id.ok_or(ProvisionError::MissingField {
        step: Step::CreateProject,
        field: "id",
    })?;
    tracing::info!("Project Created with ID: {}", project_id);

    // Step 3: Create cluster
    create_cluster::activity(
        client,
        CreateClusterInput {
            name: input.cluster_name.clone(),
            cloud_id: cloud_id.clone(),
            project_id: project_id.clone(),
            topology: input.topology.clone(),
        },
    )
    .await?;

    // Step 4: Resolve the new cluster's id
    let resolved = resolve_cluster::activity(
        client,
        ResolveClusterInput {
            name: input.cluster_name.clone(),
        },
    )
    .await?;
    let cluster_id = resolved.cluster_id.ok_or_else(|| ProvisionError::ClusterNotFound {
        name: input.cluster_name.clone(),
    })?;
    tracing::info!("Cluster Created with ID: {}", cluster_id);

    // Step 5: Wait for the cluster to become ready
    let readiness_checks = wait_for_cluster_ready(client, &cluster_id, &input.poll).await?;

    // Step 6: Open network access
    enable_cluster_access::activity(
        client,
        EnableClusterAccessInput {
            cluster_id: cluster_id.clone(),
            rule: input.allow_list.clone(),
        },
    )
    .await?;

    // Step 7: Create database user
    create_database_user::activity(
        client,
        CreateDatabaseUserInput {
            cluster_id: cluster_id.clone(),
            user: input.database_user.clone(),
        },
    )
    .await?;

    let access_url = cbcloud_models::access_url(&cluster_id);
    tracing::info!("Database access URL: {}", access_url);

    // Step 8: Optional teardown
    let deletion_requested = if input.delete_after {
        delete_cluster::activity(
            client,
            DeleteClusterInput {
                cluster_id: cluster_id.clone(),
            },
        )
        .await?
        .deletion_requested
    } else {
        false
    };

    Ok(ProvisionOutput {
        cloud_id,
        cloud_provider,
        project_id,
        cluster_id,
        readiness_checks,
        access_url,
        deletion_requested,
    })
}

/// Polls the cluster status until it reports ready
///
/// Returns the number of checks it took. Any failed status request ends the
/// wait immediately; running out of checks is a [`ProvisionError::ReadinessTimeout`].
pub async fn wait_for_cluster_ready(
    client: &dyn ControlPlane,
    cluster_id: &str,
    poll: &PollPolicy,
) -> Result<u32> {
    tracing::info!(
        "Waiting for cluster {} to be ready (up to {} checks, {}s apart)",
        cluster_id,
        poll.max_attempts,
        poll.interval.as_secs()
    );

    for attempt in 1..=poll.max_attempts {
        let output = check_cluster_ready::activity(
            client,
            CheckClusterReadyInput {
                cluster_id: cluster_id.to_string(),
            },
        )
        .await?;

        if output.is_ready {
            tracing::info!("Cluster is ready (attempt {}/{})", attempt, poll.max_attempts);
            return Ok(attempt);
        }

        let status = output.status.ok_or(ProvisionError::MissingField {
            step: Step::GetClusterStatus,
            field: "status",
        })?;

        if attempt < poll.max_attempts {
            tracing::info!(
                "Cluster in status '{}', not ready yet (attempt {}/{}), checking again in {}s...",
                status,
                attempt,
                poll.max_attempts,
                poll.interval.as_secs()
            );
            tokio::time::sleep(poll.interval).await;
        } else {
            tracing::warn!("Cluster still in status '{}' after {} checks", status, attempt);
        }
    }

    Err(ProvisionError::ReadinessTimeout {
        cluster_id: cluster_id.to_string(),
        attempts: poll.max_attempts,
    })
}

fn validate(input: &ProvisionInput) -> Result<()> {
    if input.project_name.trim().is_empty() {
        return Err(ProvisionError::InvalidConfig("project name is empty".to_string()));
    }
    if input.cluster_name.trim().is_empty() {
        return Err(ProvisionError::InvalidConfig("cluster name is empty".to_string()));
    }
    if input.database_user.username.trim().is_empty() {
        return Err(ProvisionError::InvalidConfig("database username is empty".to_string()));
    }
    if input.poll.max_attempts == 0 {
        return Err(ProvisionError::InvalidConfig(
            "readiness poll needs at least one attempt".to_string(),
        ));
    }
    if input.topology.servers.is_empty() {
        return Err(ProvisionError::InvalidConfig(
            "cluster topology has no server groups".to_string(),
        ));
    }
    Ok(())
}

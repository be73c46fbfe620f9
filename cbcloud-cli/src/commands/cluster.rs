use anyhow::{Context, Result};
use cbcloud_orchestrations::activities::check_cluster_ready;
use cbcloud_orchestrations::client::SignedClient;
use cbcloud_orchestrations::orchestrations::teardown_cluster;
use cbcloud_orchestrations::{CheckClusterReadyInput, TeardownInput};

use crate::config::Config;

pub async fn run_status(config: Config, cluster_id: String, output: String) -> Result<()> {
    let client = SignedClient::new(config.client_config());

    let status = check_cluster_ready::activity(
        &client,
        CheckClusterReadyInput {
            cluster_id: cluster_id.clone(),
        },
    )
    .await
    .with_context(|| format!("Failed to get status of cluster '{}'", cluster_id))?;

    if output == "json" {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("Cluster: {}", cluster_id);
        println!("  Status: {}", status.status.as_deref().unwrap_or("-"));
        println!("  Ready:  {}", status.is_ready);
        if status.is_ready {
            println!("  Access: {}", cbcloud_models::access_url(&cluster_id));
        }
    }

    Ok(())
}

pub async fn run_delete(config: Config, cluster_id: String) -> Result<()> {
    let client = SignedClient::new(config.client_config());

    let result = teardown_cluster::run(&client, TeardownInput { cluster_id })
        .await
        .context("Cluster deletion not successful")?;

    if result.deletion_requested {
        println!("Cluster deletion initiated for {}", result.cluster_id);
    }

    Ok(())
}

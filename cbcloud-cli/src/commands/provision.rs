use anyhow::{Context, Result};
use cbcloud_orchestrations::client::SignedClient;
use cbcloud_orchestrations::orchestrations::provision_cluster;
use cbcloud_orchestrations::ProvisionOutput;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::Config;

pub async fn run_provision(config: Config, delete_after: bool, output: String) -> Result<()> {
    let input = config.provision_input(delete_after)?;
    let client = SignedClient::new(config.client_config());

    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("provision", %run_id, cluster = %input.cluster_name);

    tracing::info!(parent: &span, base_url = %client.base_url(), "Starting provisioning run");

    let result = provision_cluster::run(&client, input)
        .instrument(span)
        .await
        .context("Provisioning failed")?;

    if output == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }

    Ok(())
}

fn print_summary(result: &ProvisionOutput) {
    println!("Cloud ID:          {}", result.cloud_id);
    println!("Cloud Provider:    {}", result.cloud_provider);
    println!("Project ID:        {}", result.project_id);
    println!("Cluster ID:        {}", result.cluster_id);
    println!("Readiness checks:  {}", result.readiness_checks);
    if result.deletion_requested {
        println!("Cluster deletion initiated");
    }
    println!();
    println!("Database access URL: {}", result.access_url);
}

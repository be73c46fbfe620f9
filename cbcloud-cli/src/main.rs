use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;

use cli::{Args, Mode};
use config::Config;

/// Initialize tracing on stderr so stdout only carries command results
fn initialize_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "warn,\
         cbcloud_cli=info,\
         cbcloud_orchestrations=info"
            .into()
    });

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    initialize_tracing();

    // Read once; nothing below looks at the environment again
    let config = Config::load()?;
    tracing::debug!(?config, "Configuration loaded");

    match args.mode {
        Mode::Provision { delete_after, output } => {
            commands::provision::run_provision(config, delete_after, output).await
        }
        Mode::Status { cluster_id, output } => {
            commands::cluster::run_status(config, cluster_id, output).await
        }
        Mode::Delete { cluster_id } => commands::cluster::run_delete(config, cluster_id).await,
    }
}

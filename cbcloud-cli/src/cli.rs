use clap::{Parser, Subcommand};

/// cbcloud - provision Couchbase Cloud clusters from the command line
///
/// Credentials and names are read from the environment (or a `.env` file):
/// CBC_ACCESS_KEY, CBC_SECRET_KEY, CBC_URL, CBC_PROJECT, CBC_CLUSTER,
/// CBC_DB_USERNAME, CBC_DB_PASSWORD.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Create a project and cluster, wait for it, then open access and add a database user
    Provision {
        /// Delete the cluster again once provisioning succeeded
        #[arg(long)]
        delete_after: bool,

        /// Output format (table or json)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Show the status of a cluster
    Status {
        /// Cluster ID
        cluster_id: String,

        /// Output format (table or json)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Delete a cluster
    Delete {
        /// Cluster ID
        cluster_id: String,
    },
}

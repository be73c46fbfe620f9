//! cbcloud Orchestrations - provisioning workflows for Couchbase Cloud clusters
//!
//! This crate provides the signed control-plane client, one activity per
//! API call, and the orchestrations that sequence them into a full
//! provisioning run.
//!
//! # Usage
//!
//! ```rust,no_run
//! use cbcloud_orchestrations::client::{ClientConfig, SignedClient};
//! use cbcloud_orchestrations::orchestrations::provision_cluster;
//! use cbcloud_orchestrations::ProvisionInput;
//!
//! # async fn example(input: ProvisionInput) -> anyhow::Result<()> {
//! let client = SignedClient::new(ClientConfig::new(
//!     "access-key",
//!     "secret-key",
//!     "https://cloudapi.cloud.couchbase.com",
//! ));
//! let output = provision_cluster::run(&client, input).await?;
//! println!("Database access URL: {}", output.access_url);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod response;
pub mod steps;
pub mod types;

pub mod activity_types;
pub mod activities;
pub mod orchestrations;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

// Re-export key types for convenience
pub use activity_types::*;
pub use error::{ProvisionError, Result};
pub use types::*;

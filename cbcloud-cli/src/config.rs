use anyhow::{Context, Result};
use cbcloud_models::{AllowListRule, BucketAccess, ClusterTopology, CreateDatabaseUserRequest, OPEN_TO_WORLD_CIDR};
use cbcloud_orchestrations::client::ClientConfig;
use cbcloud_orchestrations::{
    PollPolicy, ProvisionInput, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_POLL_MAX_ATTEMPTS,
};
use std::fmt;
use std::time::Duration;

/// Comment attached to the allow-list rule created by `provision`
const ALLOWLIST_COMMENT: &str = "added by cbcloud provision";

/// Settings read once from the environment at startup
#[derive(Clone)]
pub struct Config {
    pub access_key: String,
    pub secret_key: String,
    pub base_url: String,
    pub project_name: Option<String>,
    pub cluster_name: Option<String>,
    pub db_username: Option<String>,
    pub db_password: Option<String>,
    pub cloud_id: Option<String>,
    pub allowlist_cidr: String,
    pub allowlist_duration: Option<String>,
    pub poll_interval_secs: u64,
    pub poll_max_attempts: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup; empty values count as unset
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            access_key: var("CBC_ACCESS_KEY").context("CBC_ACCESS_KEY must be set")?,
            secret_key: var("CBC_SECRET_KEY").context("CBC_SECRET_KEY must be set")?,
            base_url: var("CBC_URL").context("CBC_URL must be set")?,
            project_name: var("CBC_PROJECT"),
            cluster_name: var("CBC_CLUSTER"),
            db_username: var("CBC_DB_USERNAME"),
            db_password: var("CBC_DB_PASSWORD"),
            cloud_id: var("CBC_CLOUD_ID"),
            allowlist_cidr: var("CBC_ALLOWLIST_CIDR")
                .unwrap_or_else(|| OPEN_TO_WORLD_CIDR.to_string()),
            allowlist_duration: var("CBC_ALLOWLIST_DURATION"),
            poll_interval_secs: var("CBC_POLL_INTERVAL_SECS")
                .map(|v| v.trim().parse::<u64>())
                .transpose()
                .context("CBC_POLL_INTERVAL_SECS must be a number of seconds")?
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
            poll_max_attempts: var("CBC_POLL_MAX_ATTEMPTS")
                .map(|v| v.trim().parse::<u32>())
                .transpose()
                .context("CBC_POLL_MAX_ATTEMPTS must be a positive number")?
                .unwrap_or(DEFAULT_POLL_MAX_ATTEMPTS),
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.access_key, &self.secret_key, &self.base_url)
    }

    pub fn allow_list_rule(&self) -> AllowListRule {
        match &self.allowlist_duration {
            Some(duration) => AllowListRule::temporary(&self.allowlist_cidr, ALLOWLIST_COMMENT, duration),
            None => AllowListRule::permanent(&self.allowlist_cidr, ALLOWLIST_COMMENT),
        }
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_secs(self.poll_interval_secs),
            max_attempts: self.poll_max_attempts,
        }
    }

    /// Input of the provisioning run; fails when a provisioning-only variable is missing
    pub fn provision_input(&self, delete_after: bool) -> Result<ProvisionInput> {
        if self.poll_max_attempts == 0 {
            anyhow::bail!("CBC_POLL_MAX_ATTEMPTS must be at least 1");
        }

        Ok(ProvisionInput {
            project_name: self.project_name.clone().context("CBC_PROJECT must be set")?,
            cluster_name: self.cluster_name.clone().context("CBC_CLUSTER must be set")?,
            cloud_id: self.cloud_id.clone(),
            topology: ClusterTopology::default(),
            allow_list: self.allow_list_rule(),
            database_user: CreateDatabaseUserRequest {
                username: self.db_username.clone().context("CBC_DB_USERNAME must be set")?,
                password: self.db_password.clone().context("CBC_DB_PASSWORD must be set")?,
                all_buckets_access: BucketAccess::DataWriter,
            },
            poll: self.poll_policy(),
            delete_after,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("project_name", &self.project_name)
            .field("cluster_name", &self.cluster_name)
            .field("db_username", &self.db_username)
            .field("db_password", &self.db_password.as_ref().map(|_| "<redacted>"))
            .field("cloud_id", &self.cloud_id)
            .field("allowlist_cidr", &self.allowlist_cidr)
            .field("allowlist_duration", &self.allowlist_duration)
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("poll_max_attempts", &self.poll_max_attempts)
            .finish()
    }
}

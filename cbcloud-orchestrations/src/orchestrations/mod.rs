pub mod provision_cluster;
pub mod teardown_cluster;

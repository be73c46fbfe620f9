//! One activity per control-plane call of the provisioning sequence

pub mod check_cluster_ready;
pub mod create_cluster;
pub mod create_database_user;
pub mod create_project;
pub mod delete_cluster;
pub mod enable_cluster_access;
pub mod get_cloud;
pub mod resolve_cluster;

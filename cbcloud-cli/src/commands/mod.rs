pub mod cluster;
pub mod provision;

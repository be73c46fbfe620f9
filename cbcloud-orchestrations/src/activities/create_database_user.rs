//! Create the database user applications connect with

use crate::activity_types::{CreateDatabaseUserInput, CreateDatabaseUserOutput};
use crate::client::{ControlPlane, HttpMethod};
use crate::error::Result;
use crate::response::send;
use crate::steps::{paths, Step};

pub async fn activity(
    client: &dyn ControlPlane,
    input: CreateDatabaseUserInput,
) -> Result<CreateDatabaseUserOutput> {
    tracing::info!(
        cluster_id = %input.cluster_id,
        access = ?input.user.all_buckets_access,
        "Creating database user: {}",
        input.user.username
    );

    let path = paths::users(&input.cluster_id);
    send(client, Step::CreateDatabaseUser, HttpMethod::Post, &path, Some(&input.user)).await?;

    Ok(CreateDatabaseUserOutput {
        username: input.user.username,
    })
}

//! Find the cloud account clusters are deployed into

use crate::activity_types::{GetCloudInput, GetCloudOutput};
use crate::client::{ControlPlane, HttpMethod};
use crate::error::Result;
use crate::response::{decode, send_without_body};
use crate::steps::{paths, Step};
use cbcloud_models::{Cloud, ListResponse};

pub async fn activity(client: &dyn ControlPlane, input: GetCloudInput) -> Result<GetCloudOutput> {
    tracing::info!("Checking cloud connection");

    let step = Step::CheckCloudConnection;
    let response = send_without_body(client, step, HttpMethod::Get, paths::CLOUDS).await?;
    let clouds: ListResponse<Cloud> = decode(step, &response)?;

    tracing::debug!(clouds = clouds.data.len(), "Connected clouds listed");

    let cloud = match input.cloud_id.as_deref() {
        Some(wanted) => clouds
            .data
            .into_iter()
            .find(|cloud| cloud.id.as_deref() == Some(wanted)),
        None => clouds.data.into_iter().next(),
    };

    Ok(match cloud {
        Some(cloud) => GetCloudOutput {
            cloud_id: cloud.id,
            provider: cloud.provider,
        },
        None => GetCloudOutput {
            cloud_id: None,
            provider: None,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProvisionError;
    use crate::test_support::ScriptedControlPlane;

    #[tokio::test]
    async fn test_first_cloud_is_selected() {
        let client = ScriptedControlPlane::new([(
            200,
            r#"{"data":[{"id":"cloud-1","provider":"aws"},{"id":"cloud-2","provider":"azure"}]}"#,
        )]);

        let output = activity(&client, GetCloudInput::default()).await.unwrap();

        assert_eq!(output.cloud_id.as_deref(), Some("cloud-1"));
        assert_eq!(output.provider.as_deref(), Some("aws"));
        assert_eq!(client.requests()[0].path, "/v2/clouds");
    }

    #[tokio::test]
    async fn test_configured_cloud_is_selected() {
        let client = ScriptedControlPlane::new([(
            200,
            r#"{"data":[{"id":"cloud-1","provider":"aws"},{"id":"cloud-2","provider":"azure"}]}"#,
        )]);
        let input = GetCloudInput {
            cloud_id: Some("cloud-2".to_string()),
        };

        let output = activity(&client, input).await.unwrap();

        assert_eq!(output.cloud_id.as_deref(), Some("cloud-2"));
        assert_eq!(output.provider.as_deref(), Some("azure"));
    }

    #[tokio::test]
    async fn test_empty_cloud_list_yields_nothing() {
        let client = ScriptedControlPlane::new([(200, r#"{"data":[]}"#)]);

        let output = activity(&client, GetCloudInput::default()).await.unwrap();

        assert_eq!(output.cloud_id, None);
        assert_eq!(output.provider, None);
    }

    #[tokio::test]
    async fn test_unauthorized_is_an_error() {
        let client = ScriptedControlPlane::new([(
            401,
            r#"{"errorType":"Unauthorized","message":"bad signature"}"#,
        )]);

        let err = activity(&client, GetCloudInput::default()).await.unwrap_err();

        assert!(matches!(err, ProvisionError::Http { status: 401, .. }));
    }
}

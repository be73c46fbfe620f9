//! Create the project that hosts the cluster

use crate::activity_types::{CreateProjectInput, CreateProjectOutput};
use crate::client::{ControlPlane, HttpMethod};
use crate::error::Result;
use crate::response::{decode, send};
use crate::steps::{paths, Step};
use cbcloud_models::{CreateProjectRequest, Project};

pub async fn activity(
    client: &dyn ControlPlane,
    input: CreateProjectInput,
) -> Result<CreateProjectOutput> {
    tracing::info!("Creating project: {}", input.name);

    let step = Step::CreateProject;
    let request = CreateProjectRequest { name: input.name };
    let response = send(client, step, HttpMethod::Post, paths::PROJECTS, Some(&request)).await?;
    let project: Project = decode(step, &response)?;

    Ok(CreateProjectOutput {
        project_id: project.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedControlPlane;
    use serde_json::json;

    #[tokio::test]
    async fn test_project_id_is_returned() {
        let client = ScriptedControlPlane::new([(201, r#"{"id":"p1"}"#)]);

        let output = activity(&client, CreateProjectInput { name: "demo".to_string() })
            .await
            .unwrap();

        assert_eq!(output.project_id.as_deref(), Some("p1"));
        let request = &client.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({ "name": "demo" })));
    }

    #[tokio::test]
    async fn test_missing_id_is_absent() {
        let client = ScriptedControlPlane::new([(201, r#"{"name":"demo"}"#)]);

        let output = activity(&client, CreateProjectInput { name: "demo".to_string() })
            .await
            .unwrap();

        assert_eq!(output.project_id, None);
    }

    #[tokio::test]
    async fn test_ok_instead_of_created_is_failure() {
        let client = ScriptedControlPlane::new([(
            200,
            r#"{"errorType":"Unexpected","message":"not created"}"#,
        )]);

        let result = activity(&client, CreateProjectInput { name: "demo".to_string() }).await;

        assert!(result.is_err());
    }
}

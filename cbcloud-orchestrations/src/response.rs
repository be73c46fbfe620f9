//! Sending a step's request and interpreting its status code

use crate::client::{ControlPlane, HttpMethod, RawResponse};
use crate::error::{ProvisionError, Result};
use crate::steps::Step;
use cbcloud_models::ApiErrorBody;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Whether `status` is in the allow-set of the operation
pub fn is_expected_status(status: u16, expected: &[u16]) -> bool {
    expected.contains(&status)
}

/// Turns a response into success or a diagnostic error
///
/// Failed responses are expected to carry `errorType` and `message`. A
/// failed response whose body does not have that shape is a decode error.
pub fn check_response(step: Step, response: &RawResponse, expected: &[u16]) -> Result<()> {
    if is_expected_status(response.status, expected) {
        tracing::info!("{} Successful", step);
        return Ok(());
    }

    tracing::warn!(status = response.status, "{} Failed", step);
    let error: ApiErrorBody = response
        .json()
        .map_err(|source| ProvisionError::Decode {
            step,
            status: Some(response.status),
            source,
        })?;

    Err(ProvisionError::Http {
        step,
        status: response.status,
        error_type: error.error_type,
        message: error.message,
    })
}

/// Decodes the body of a successful response
pub fn decode<T: DeserializeOwned>(step: Step, response: &RawResponse) -> Result<T> {
    response
        .json()
        .map_err(|source| ProvisionError::Decode {
            step,
            status: None,
            source,
        })
}

/// Sends one request for `step` and checks it against the step's success codes
pub async fn send<B: Serialize>(
    client: &dyn ControlPlane,
    step: Step,
    method: HttpMethod,
    path: &str,
    body: Option<&B>,
) -> Result<RawResponse> {
    let body = body
        .map(serde_json::to_value)
        .transpose()
        .map_err(|source| ProvisionError::Encode { step, source })?;

    let response = client
        .request(method, path, body.as_ref())
        .await
        .map_err(|source| ProvisionError::Request { step, source })?;

    check_response(step, &response, step.expected_statuses())?;
    Ok(response)
}

/// [`send`] for GET and DELETE requests
pub async fn send_without_body(
    client: &dyn ControlPlane,
    step: Step,
    method: HttpMethod,
    path: &str,
) -> Result<RawResponse> {
    send::<()>(client, step, method, path, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_status_membership() {
        for status in [200u16, 201, 202, 204, 400, 401, 404, 409, 500] {
            assert_eq!(is_expected_status(status, &[200]), status == 200);
            assert_eq!(is_expected_status(status, &[201, 202]), status == 201 || status == 202);
        }
        assert!(!is_expected_status(200, &[]));
    }

    #[test]
    fn test_success_status_passes() {
        let response = RawResponse::new(202, "");
        assert!(check_response(Step::CreateCluster, &response, &[202]).is_ok());
    }

    #[test]
    fn test_failure_reports_error_type_and_message() {
        let response = RawResponse::new(
            422,
            r#"{"errorType":"InvalidRequest","message":"name is taken"}"#,
        );
        let err = check_response(Step::CreateProject, &response, &[201]).unwrap_err();
        match err {
            ProvisionError::Http {
                step,
                status,
                error_type,
                message,
            } => {
                assert_eq!(step, Step::CreateProject);
                assert_eq!(status, 422);
                assert_eq!(error_type, "InvalidRequest");
                assert_eq!(message, "name is taken");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_failure_with_unparseable_body_is_decode_error() {
        let response = RawResponse::new(502, "<html>Bad Gateway</html>");
        let err = check_response(Step::GetClusters, &response, &[200]).unwrap_err();
        assert!(matches!(
            err,
            ProvisionError::Decode {
                step: Step::GetClusters,
                status: Some(502),
                ..
            }
        ));
        assert!(err.to_string().contains("status code 502"));
    }

    #[test]
    fn test_success_code_of_another_step_is_failure() {
        let response = RawResponse::new(200, r#"{"errorType":"Unexpected","message":"ok?"}"#);
        let err = check_response(Step::CreateProject, &response, Step::CreateProject.expected_statuses());
        assert!(matches!(err, Err(ProvisionError::Http { status: 200, .. })));
    }
}

//! Custom-resource response reporting
//!
//! CloudFormation hands each request a pre-signed S3 URL; the handler must
//! PUT the response JSON there before the stack operation can proceed.

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::info;

use crate::event::CustomResourceEvent;

/// Terminal status of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Response payload, PascalCase per the custom-resource protocol
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceResponse {
    pub status: ResponseStatus,

    /// Required by the protocol when the status is FAILED
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
}

impl CustomResourceResponse {
    pub fn success(event: &CustomResourceEvent) -> Self {
        Self::new(event, ResponseStatus::Success, None)
    }

    pub fn failed(event: &CustomResourceEvent, reason: impl Into<String>) -> Self {
        Self::new(event, ResponseStatus::Failed, Some(reason.into()))
    }

    fn new(event: &CustomResourceEvent, status: ResponseStatus, reason: Option<String>) -> Self {
        // The physical id must stay stable across updates, otherwise
        // CloudFormation schedules a replacement and deletes the "old"
        // resource.
        let physical_resource_id = event
            .physical_resource_id
            .clone()
            .unwrap_or_else(|| format!("{}-migration", event.logical_resource_id));

        Self {
            status,
            reason,
            physical_resource_id,
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// PUT the response to the pre-signed callback URL.
///
/// The pre-signed URL's signature covers an empty `Content-Type`, so the
/// request must carry exactly that.
pub async fn send(
    client: &reqwest::Client,
    response_url: &str,
    response: &CustomResourceResponse,
) -> Result<(), lambda_runtime::Error> {
    let body = serde_json::to_string(response)?;

    let reply = client
        .put(response_url)
        .header(CONTENT_TYPE, "")
        .body(body)
        .send()
        .await?
        .error_for_status()?;

    info!(status = %reply.status(), "reported custom-resource response");
    Ok(())
}

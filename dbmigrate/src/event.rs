//! Custom-resource request wire types

use serde::Deserialize;

/// Lifecycle action requested by CloudFormation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

/// Custom-resource request, as delivered through the Lambda invocation.
///
/// CloudFormation sends PascalCase field names; unknown fields such as
/// `ServiceToken` or `OldResourceProperties` are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceEvent {
    pub request_type: RequestType,
    pub request_id: String,

    /// Pre-signed URL the response payload must be PUT to
    #[serde(rename = "ResponseURL")]
    pub response_url: String,

    pub stack_id: String,
    pub logical_resource_id: String,

    /// Present on Update and Delete, absent on Create
    #[serde(default)]
    pub physical_resource_id: Option<String>,

    #[serde(default)]
    pub resource_type: Option<String>,

    #[serde(default)]
    pub resource_properties: Option<serde_json::Value>,
}

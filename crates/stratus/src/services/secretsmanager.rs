//! AWS Secrets Manager
//!
//! Secret storage and versioning. `CreateSecret` and `PutSecretValue` are made
//! idempotent with a generated `ClientRequestToken` when the caller sets none.

#![allow(missing_docs)]

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stratus_core::{Blob, Optional, Paginator, Timestamp};

use super::request_builders;
use crate::client::Dispatch;
use crate::error::{Error, Result};
use crate::operation::{ResponseMetadata, operation};
use crate::paginate::paginated;
use crate::protocol::{Protocol, ServiceSpec};

/// Secrets Manager endpoint and protocol.
pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "secretsmanager",
    endpoint_prefix: "secretsmanager",
    signing_name: "secretsmanager",
    protocol: Protocol::AwsJson1_1,
    target: "secretsmanager",
    global_region: None,
};

fn fill_client_request_token(token: &mut Optional<String>) {
    if token.is_unset() {
        *token = Optional::Present(uuid::Uuid::new_v4().to_string());
    }
}

// ---- shared shapes ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub key: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub value: Optional<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Optional::Present(key.into()),
            value: Optional::Present(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Filter {
    /// `description`, `name`, `tag-key`, `tag-value`, `primary-region`,
    /// `owning-service` or `all`.
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub key: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub values: Optional<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RotationRules {
    pub automatically_after_days: Optional<i64>,
    pub duration: Optional<String>,
    pub schedule_expression: Optional<String>,
}

/// One entry of [`ListSecretsResponse::secret_list`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecretListEntry {
    #[serde(rename = "ARN")]
    pub arn: Optional<String>,
    pub name: Optional<String>,
    pub description: Optional<String>,
    pub kms_key_id: Optional<String>,
    pub rotation_enabled: Optional<bool>,
    pub rotation_rules: Optional<RotationRules>,
    pub last_rotated_date: Optional<Timestamp>,
    pub last_changed_date: Optional<Timestamp>,
    pub last_accessed_date: Optional<Timestamp>,
    pub deleted_date: Optional<Timestamp>,
    pub tags: Optional<Vec<Tag>>,
    pub secret_versions_to_stages: Optional<HashMap<String, Vec<String>>>,
    pub owning_service: Optional<String>,
    pub created_date: Optional<Timestamp>,
    pub primary_region: Optional<String>,
}

// ---- requests ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct CreateSecretRequest {
    pub name: String,
    /// Idempotency token. Generated when unset.
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub client_request_token: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub description: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub kms_key_id: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub secret_binary: Optional<Blob>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub secret_string: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub tags: Optional<Vec<Tag>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub force_overwrite_replica_secret: Optional<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetSecretValueRequest {
    /// Name or ARN.
    pub secret_id: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub version_id: Optional<String>,
    /// Defaults to `AWSCURRENT` on the service side.
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub version_stage: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct PutSecretValueRequest {
    pub secret_id: String,
    /// Idempotency token. Generated when unset.
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub client_request_token: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub secret_binary: Optional<Blob>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub secret_string: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub version_stages: Optional<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecretRequest {
    pub secret_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct ListSecretsRequest {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub include_planned_deletion: Optional<bool>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_results: Optional<i32>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_token: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub filters: Optional<Vec<Filter>>,
    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub sort_order: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DeleteSecretRequest {
    pub secret_id: String,
    /// 7 to 30 days. Cannot be combined with `force_delete_without_recovery`.
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub recovery_window_in_days: Optional<i64>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub force_delete_without_recovery: Optional<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct RestoreSecretRequest {
    pub secret_id: String,
}

request_builders!(
    CreateSecretRequest => CreateSecretRequestBuilder,
    GetSecretValueRequest => GetSecretValueRequestBuilder,
    PutSecretValueRequest => PutSecretValueRequestBuilder,
    DescribeSecretRequest => DescribeSecretRequestBuilder,
    ListSecretsRequest => ListSecretsRequestBuilder,
    DeleteSecretRequest => DeleteSecretRequestBuilder,
    RestoreSecretRequest => RestoreSecretRequestBuilder,
);

// ---- responses ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateSecretResponse {
    #[serde(rename = "ARN")]
    pub arn: Optional<String>,
    pub name: Optional<String>,
    pub version_id: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetSecretValueResponse {
    #[serde(rename = "ARN")]
    pub arn: Optional<String>,
    pub name: Optional<String>,
    pub version_id: Optional<String>,
    pub secret_binary: Optional<Blob>,
    pub secret_string: Optional<String>,
    pub version_stages: Optional<Vec<String>>,
    pub created_date: Optional<Timestamp>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutSecretValueResponse {
    #[serde(rename = "ARN")]
    pub arn: Optional<String>,
    pub name: Optional<String>,
    pub version_id: Optional<String>,
    pub version_stages: Optional<Vec<String>>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeSecretResponse {
    #[serde(rename = "ARN")]
    pub arn: Optional<String>,
    pub name: Optional<String>,
    pub description: Optional<String>,
    pub kms_key_id: Optional<String>,
    pub rotation_enabled: Optional<bool>,
    #[serde(rename = "RotationLambdaARN")]
    pub rotation_lambda_arn: Optional<String>,
    pub rotation_rules: Optional<RotationRules>,
    pub last_rotated_date: Optional<Timestamp>,
    pub last_changed_date: Optional<Timestamp>,
    pub last_accessed_date: Optional<Timestamp>,
    pub deleted_date: Optional<Timestamp>,
    pub next_rotation_date: Optional<Timestamp>,
    pub tags: Optional<Vec<Tag>>,
    pub version_ids_to_stages: Optional<HashMap<String, Vec<String>>>,
    pub owning_service: Optional<String>,
    pub created_date: Optional<Timestamp>,
    pub primary_region: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListSecretsResponse {
    pub secret_list: Optional<Vec<SecretListEntry>>,
    pub next_token: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteSecretResponse {
    #[serde(rename = "ARN")]
    pub arn: Optional<String>,
    pub name: Optional<String>,
    pub deletion_date: Optional<Timestamp>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RestoreSecretResponse {
    #[serde(rename = "ARN")]
    pub arn: Optional<String>,
    pub name: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

operation!(SERVICE, CreateSecret: CreateSecretRequest => CreateSecretResponse, prepare(this) {
    fill_client_request_token(&mut this.client_request_token);
});
operation!(SERVICE, GetSecretValue: GetSecretValueRequest => GetSecretValueResponse);
operation!(SERVICE, PutSecretValue: PutSecretValueRequest => PutSecretValueResponse, prepare(this) {
    fill_client_request_token(&mut this.client_request_token);
});
operation!(SERVICE, DescribeSecret: DescribeSecretRequest => DescribeSecretResponse);
operation!(SERVICE, ListSecrets: ListSecretsRequest => ListSecretsResponse);
operation!(SERVICE, DeleteSecret: DeleteSecretRequest => DeleteSecretResponse);
operation!(SERVICE, RestoreSecret: RestoreSecretRequest => RestoreSecretResponse);

paginated!(ListSecretsRequest, next_token => next_token);

// ---- exceptions ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResourceNotFoundException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResourceExistsException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// The secret is scheduled for deletion or otherwise in the wrong state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvalidRequestException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvalidParameterException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// KMS could not decrypt the secret.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecryptionFailure {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// Secrets Manager API resource.
#[derive(Debug, Clone)]
pub struct SecretsManager {
    dispatch: Dispatch,
}

impl SecretsManager {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Create a secret. Fills `ClientRequestToken` when unset.
    pub async fn create_secret(&self, request: CreateSecretRequest) -> Result<CreateSecretResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_secret_value(&self, request: GetSecretValueRequest) -> Result<GetSecretValueResponse> {
        self.dispatch.send(request).await
    }

    /// Store a new version. Fills `ClientRequestToken` when unset.
    pub async fn put_secret_value(&self, request: PutSecretValueRequest) -> Result<PutSecretValueResponse> {
        self.dispatch.send(request).await
    }

    pub async fn describe_secret(&self, request: DescribeSecretRequest) -> Result<DescribeSecretResponse> {
        self.dispatch.send(request).await
    }

    pub async fn list_secrets(&self, request: ListSecretsRequest) -> Result<ListSecretsResponse> {
        self.dispatch.send(request).await
    }

    pub fn list_secrets_pages(&self, request: ListSecretsRequest) -> Paginator<ListSecretsResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn delete_secret(&self, request: DeleteSecretRequest) -> Result<DeleteSecretResponse> {
        self.dispatch.send(request).await
    }

    pub async fn restore_secret(&self, request: RestoreSecretRequest) -> Result<RestoreSecretResponse> {
        self.dispatch.send(request).await
    }
}

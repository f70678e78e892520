//! Amazon Elastic Container Registry
//!
//! Repositories, images and registry login tokens. Unlike most JSON services,
//! ECR field names are camelCase on the wire.

#![allow(missing_docs)]

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use stratus_core::{Optional, Paginator, Timestamp};

use super::request_builders;
use crate::client::Dispatch;
use crate::error::{Error, Result};
use crate::operation::{ResponseMetadata, operation};
use crate::paginate::paginated;
use crate::protocol::{Protocol, ServiceSpec};

/// ECR endpoint and protocol.
pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "ecr",
    endpoint_prefix: "api.ecr",
    signing_name: "ecr",
    protocol: Protocol::AwsJson1_1,
    target: "AmazonEC2ContainerRegistry_V20150921",
    global_region: None,
};

// ---- shared shapes ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Identifies an image by digest, tag, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageIdentifier {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub image_digest: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub image_tag: Optional<String>,
}

impl ImageIdentifier {
    /// Identify an image by tag.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            image_tag: Optional::Present(tag.into()),
            ..Default::default()
        }
    }

    /// Identify an image by digest.
    pub fn digest(digest: impl Into<String>) -> Self {
        Self {
            image_digest: Optional::Present(digest.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageScanningConfiguration {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub scan_on_push: Optional<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncryptionConfiguration {
    /// `AES256` or `KMS`.
    pub encryption_type: String,
    #[serde(rename = "kmsKey", skip_serializing_if = "Optional::is_unset")]
    pub kms_key: Optional<String>,
}

/// A repository.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Repository {
    pub repository_arn: Optional<String>,
    pub registry_id: Optional<String>,
    pub repository_name: Optional<String>,
    pub repository_uri: Optional<String>,
    pub created_at: Optional<Timestamp>,
    /// `MUTABLE` or `IMMUTABLE`.
    pub image_tag_mutability: Optional<String>,
    pub image_scanning_configuration: Optional<ImageScanningConfiguration>,
    pub encryption_configuration: Optional<EncryptionConfiguration>,
}

/// Metadata of an image in a repository.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageDetail {
    pub registry_id: Optional<String>,
    pub repository_name: Optional<String>,
    pub image_digest: Optional<String>,
    pub image_tags: Optional<Vec<String>>,
    pub image_size_in_bytes: Optional<i64>,
    pub image_pushed_at: Optional<Timestamp>,
    pub image_manifest_media_type: Optional<String>,
    pub artifact_media_type: Optional<String>,
    pub last_recorded_pull_time: Optional<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageFailure {
    pub image_id: Optional<ImageIdentifier>,
    pub failure_code: Optional<String>,
    pub failure_reason: Optional<String>,
}

/// A registry login token.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationData {
    /// Base64 of `user:password`.
    pub authorization_token: Optional<String>,
    pub expires_at: Optional<Timestamp>,
    /// Registry URL to log in to, e.g. `https://123456789012.dkr.ecr.us-east-1.amazonaws.com`.
    pub proxy_endpoint: Optional<String>,
}

impl AuthorizationData {
    /// Decode the token into its `(user, password)` pair.
    ///
    /// Returns `None` when the token is missing or is not base64 of `user:password`.
    pub fn decode_credentials(&self) -> Option<(String, String)> {
        let token = self.authorization_token.get()?;
        let decoded = STANDARD.decode(token.trim()).ok()?;
        let text = String::from_utf8(decoded).ok()?;
        let (user, password) = text.split_once(':')?;
        Some((user.to_string(), password.to_string()))
    }
}

// ---- requests ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "camelCase")]
pub struct DescribeRepositoriesRequest {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub registry_id: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub repository_names: Optional<Vec<String>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_token: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_results: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub registry_id: Optional<String>,
    pub repository_name: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub tags: Optional<Vec<Tag>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub image_tag_mutability: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub image_scanning_configuration: Optional<ImageScanningConfiguration>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub encryption_configuration: Optional<EncryptionConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "camelCase")]
pub struct DeleteRepositoryRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub registry_id: Optional<String>,
    pub repository_name: String,
    /// Delete even if the repository still holds images.
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub force: Optional<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListImagesFilter {
    /// `TAGGED`, `UNTAGGED` or `ANY`.
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub tag_status: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "camelCase")]
pub struct ListImagesRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub registry_id: Optional<String>,
    pub repository_name: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_token: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_results: Optional<i32>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub filter: Optional<ListImagesFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "camelCase")]
pub struct DescribeImagesRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub registry_id: Optional<String>,
    pub repository_name: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub image_ids: Optional<Vec<ImageIdentifier>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_token: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_results: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteImageRequest {
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub registry_id: Optional<String>,
    pub repository_name: String,
    pub image_ids: Vec<ImageIdentifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "camelCase")]
pub struct GetAuthorizationTokenRequest {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub registry_ids: Optional<Vec<String>>,
}

request_builders!(
    DescribeRepositoriesRequest => DescribeRepositoriesRequestBuilder,
    CreateRepositoryRequest => CreateRepositoryRequestBuilder,
    DeleteRepositoryRequest => DeleteRepositoryRequestBuilder,
    ListImagesRequest => ListImagesRequestBuilder,
    DescribeImagesRequest => DescribeImagesRequestBuilder,
    BatchDeleteImageRequest => BatchDeleteImageRequestBuilder,
    GetAuthorizationTokenRequest => GetAuthorizationTokenRequestBuilder,
);

// ---- responses ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeRepositoriesResponse {
    pub repositories: Optional<Vec<Repository>>,
    pub next_token: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRepositoryResponse {
    pub repository: Optional<Repository>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteRepositoryResponse {
    pub repository: Optional<Repository>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListImagesResponse {
    pub image_ids: Optional<Vec<ImageIdentifier>>,
    pub next_token: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeImagesResponse {
    pub image_details: Optional<Vec<ImageDetail>>,
    pub next_token: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchDeleteImageResponse {
    pub image_ids: Optional<Vec<ImageIdentifier>>,
    pub failures: Optional<Vec<ImageFailure>>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAuthorizationTokenResponse {
    pub authorization_data: Optional<Vec<AuthorizationData>>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

operation!(SERVICE, DescribeRepositories: DescribeRepositoriesRequest => DescribeRepositoriesResponse);
operation!(SERVICE, CreateRepository: CreateRepositoryRequest => CreateRepositoryResponse);
operation!(SERVICE, DeleteRepository: DeleteRepositoryRequest => DeleteRepositoryResponse);
operation!(SERVICE, ListImages: ListImagesRequest => ListImagesResponse);
operation!(SERVICE, DescribeImages: DescribeImagesRequest => DescribeImagesResponse);
operation!(SERVICE, BatchDeleteImage: BatchDeleteImageRequest => BatchDeleteImageResponse);
operation!(SERVICE, GetAuthorizationToken: GetAuthorizationTokenRequest => GetAuthorizationTokenResponse);

paginated!(DescribeRepositoriesRequest, next_token => next_token);
paginated!(ListImagesRequest, next_token => next_token);
paginated!(DescribeImagesRequest, next_token => next_token);

// ---- exceptions ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RepositoryNotFoundException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RepositoryAlreadyExistsException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// The repository still holds images and `force` was not set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RepositoryNotEmptyException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageNotFoundException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvalidParameterException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// ECR API resource.
#[derive(Debug, Clone)]
pub struct Ecr {
    dispatch: Dispatch,
}

impl Ecr {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    pub async fn describe_repositories(
        &self,
        request: DescribeRepositoriesRequest,
    ) -> Result<DescribeRepositoriesResponse> {
        self.dispatch.send(request).await
    }

    pub fn describe_repositories_pages(
        &self,
        request: DescribeRepositoriesRequest,
    ) -> Paginator<DescribeRepositoriesResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn create_repository(&self, request: CreateRepositoryRequest) -> Result<CreateRepositoryResponse> {
        self.dispatch.send(request).await
    }

    pub async fn delete_repository(&self, request: DeleteRepositoryRequest) -> Result<DeleteRepositoryResponse> {
        self.dispatch.send(request).await
    }

    pub async fn list_images(&self, request: ListImagesRequest) -> Result<ListImagesResponse> {
        self.dispatch.send(request).await
    }

    pub fn list_images_pages(&self, request: ListImagesRequest) -> Paginator<ListImagesResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn describe_images(&self, request: DescribeImagesRequest) -> Result<DescribeImagesResponse> {
        self.dispatch.send(request).await
    }

    pub fn describe_images_pages(
        &self,
        request: DescribeImagesRequest,
    ) -> Paginator<DescribeImagesResponse, Error> {
        self.dispatch.paginate(request)
    }

    /// Delete up to 100 images. Per-image failures come back in `failures`
    /// rather than as an error.
    pub async fn batch_delete_image(&self, request: BatchDeleteImageRequest) -> Result<BatchDeleteImageResponse> {
        self.dispatch.send(request).await
    }

    /// Fetch a 12-hour registry login token.
    pub async fn get_authorization_token(
        &self,
        request: GetAuthorizationTokenRequest,
    ) -> Result<GetAuthorizationTokenResponse> {
        self.dispatch.send(request).await
    }
}

//! Amazon Simple Queue Service
//!
//! Queue management and message send/receive over the `awsJson1_0` protocol.

#![allow(missing_docs)]

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stratus_core::{Blob, Optional, Paginator};

use super::request_builders;
use crate::client::Dispatch;
use crate::error::{Error, Result};
use crate::operation::{ResponseMetadata, operation};
use crate::paginate::paginated;
use crate::protocol::{Protocol, ServiceSpec};

/// SQS endpoint and protocol.
pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "sqs",
    endpoint_prefix: "sqs",
    signing_name: "sqs",
    protocol: Protocol::AwsJson1_0,
    target: "AmazonSQS",
    global_region: None,
};

/// A typed message attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessageAttributeValue {
    /// `String`, `Number` or `Binary`, optionally with a custom suffix.
    pub data_type: String,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub string_value: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub binary_value: Optional<Blob>,
}

impl MessageAttributeValue {
    /// A `String` attribute.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            data_type: "String".to_string(),
            string_value: Optional::Present(value.into()),
            ..Default::default()
        }
    }

    /// A `Number` attribute.
    pub fn number(value: impl ToString) -> Self {
        Self {
            data_type: "Number".to_string(),
            string_value: Optional::Present(value.to_string()),
            ..Default::default()
        }
    }
}

/// A received message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Message {
    pub message_id: Optional<String>,
    pub receipt_handle: Optional<String>,
    #[serde(rename = "MD5OfBody")]
    pub md5_of_body: Optional<String>,
    pub body: Optional<String>,
    pub attributes: Optional<HashMap<String, String>>,
    #[serde(rename = "MD5OfMessageAttributes")]
    pub md5_of_message_attributes: Optional<String>,
    pub message_attributes: Optional<HashMap<String, MessageAttributeValue>>,
}

// ---- requests ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct CreateQueueRequest {
    pub queue_name: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub attributes: Optional<HashMap<String, String>>,
    #[builder(default)]
    #[serde(rename = "tags", skip_serializing_if = "Optional::is_unset")]
    pub tags: Optional<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetQueueUrlRequest {
    pub queue_name: String,
    #[builder(default)]
    #[serde(rename = "QueueOwnerAWSAccountId", skip_serializing_if = "Optional::is_unset")]
    pub queue_owner_aws_account_id: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct ListQueuesRequest {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub queue_name_prefix: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_token: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_results: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DeleteQueueRequest {
    pub queue_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct PurgeQueueRequest {
    pub queue_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetQueueAttributesRequest {
    pub queue_url: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub attribute_names: Optional<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct SetQueueAttributesRequest {
    pub queue_url: String,
    pub attributes: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct SendMessageRequest {
    pub queue_url: String,
    pub message_body: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub delay_seconds: Optional<i32>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub message_attributes: Optional<HashMap<String, MessageAttributeValue>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub message_deduplication_id: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub message_group_id: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct ReceiveMessageRequest {
    pub queue_url: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub attribute_names: Optional<Vec<String>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub message_attribute_names: Optional<Vec<String>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_number_of_messages: Optional<i32>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub visibility_timeout: Optional<i32>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub wait_time_seconds: Optional<i32>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub receive_request_attempt_id: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DeleteMessageRequest {
    pub queue_url: String,
    pub receipt_handle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct ChangeMessageVisibilityRequest {
    pub queue_url: String,
    pub receipt_handle: String,
    pub visibility_timeout: i32,
}

request_builders!(
    CreateQueueRequest => CreateQueueRequestBuilder,
    GetQueueUrlRequest => GetQueueUrlRequestBuilder,
    ListQueuesRequest => ListQueuesRequestBuilder,
    DeleteQueueRequest => DeleteQueueRequestBuilder,
    PurgeQueueRequest => PurgeQueueRequestBuilder,
    GetQueueAttributesRequest => GetQueueAttributesRequestBuilder,
    SetQueueAttributesRequest => SetQueueAttributesRequestBuilder,
    SendMessageRequest => SendMessageRequestBuilder,
    ReceiveMessageRequest => ReceiveMessageRequestBuilder,
    DeleteMessageRequest => DeleteMessageRequestBuilder,
    ChangeMessageVisibilityRequest => ChangeMessageVisibilityRequestBuilder,
);

// ---- responses ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateQueueResponse {
    pub queue_url: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetQueueUrlResponse {
    pub queue_url: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListQueuesResponse {
    pub queue_urls: Optional<Vec<String>>,
    pub next_token: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeleteQueueResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PurgeQueueResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetQueueAttributesResponse {
    pub attributes: Optional<HashMap<String, String>>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SetQueueAttributesResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SendMessageResponse {
    #[serde(rename = "MD5OfMessageBody")]
    pub md5_of_message_body: Optional<String>,
    #[serde(rename = "MD5OfMessageAttributes")]
    pub md5_of_message_attributes: Optional<String>,
    pub message_id: Optional<String>,
    pub sequence_number: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReceiveMessageResponse {
    pub messages: Optional<Vec<Message>>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeleteMessageResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChangeMessageVisibilityResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

operation!(SERVICE, CreateQueue: CreateQueueRequest => CreateQueueResponse);
operation!(SERVICE, GetQueueUrl: GetQueueUrlRequest => GetQueueUrlResponse);
operation!(SERVICE, ListQueues: ListQueuesRequest => ListQueuesResponse);
operation!(SERVICE, DeleteQueue: DeleteQueueRequest => DeleteQueueResponse);
operation!(SERVICE, PurgeQueue: PurgeQueueRequest => PurgeQueueResponse);
operation!(SERVICE, GetQueueAttributes: GetQueueAttributesRequest => GetQueueAttributesResponse);
operation!(SERVICE, SetQueueAttributes: SetQueueAttributesRequest => SetQueueAttributesResponse);
operation!(SERVICE, SendMessage: SendMessageRequest => SendMessageResponse);
operation!(SERVICE, ReceiveMessage: ReceiveMessageRequest => ReceiveMessageResponse);
operation!(SERVICE, DeleteMessage: DeleteMessageRequest => DeleteMessageResponse);
operation!(SERVICE, ChangeMessageVisibility: ChangeMessageVisibilityRequest => ChangeMessageVisibilityResponse);

paginated!(ListQueuesRequest, next_token => next_token);

// ---- exceptions ----

/// The queue does not exist.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueueDoesNotExist {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// A queue with this name was deleted less than 60 seconds ago, or exists
/// with different attributes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueueNameExists {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// The receipt handle is not valid for the queue.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReceiptHandleIsInvalid {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// The queue was purged in the last 60 seconds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PurgeQueueInProgress {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// An inflight or attribute limit was reached.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverLimit {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// SQS API resource.
#[derive(Debug, Clone)]
pub struct Sqs {
    dispatch: Dispatch,
}

impl Sqs {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Create a queue, or return the URL of an identical existing one.
    pub async fn create_queue(&self, request: CreateQueueRequest) -> Result<CreateQueueResponse> {
        self.dispatch.send(request).await
    }

    /// Look up a queue URL by name.
    pub async fn get_queue_url(&self, request: GetQueueUrlRequest) -> Result<GetQueueUrlResponse> {
        self.dispatch.send(request).await
    }

    /// List queue URLs, one page.
    pub async fn list_queues(&self, request: ListQueuesRequest) -> Result<ListQueuesResponse> {
        self.dispatch.send(request).await
    }

    /// Every page of [`list_queues`](Self::list_queues).
    pub fn list_queues_pages(&self, request: ListQueuesRequest) -> Paginator<ListQueuesResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn delete_queue(&self, request: DeleteQueueRequest) -> Result<DeleteQueueResponse> {
        self.dispatch.send(request).await
    }

    pub async fn purge_queue(&self, request: PurgeQueueRequest) -> Result<PurgeQueueResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_queue_attributes(
        &self,
        request: GetQueueAttributesRequest,
    ) -> Result<GetQueueAttributesResponse> {
        self.dispatch.send(request).await
    }

    pub async fn set_queue_attributes(
        &self,
        request: SetQueueAttributesRequest,
    ) -> Result<SetQueueAttributesResponse> {
        self.dispatch.send(request).await
    }

    /// Send one message.
    pub async fn send_message(&self, request: SendMessageRequest) -> Result<SendMessageResponse> {
        self.dispatch.send(request).await
    }

    /// Receive up to `MaxNumberOfMessages` messages, long-polling for
    /// `WaitTimeSeconds` when set.
    pub async fn receive_message(&self, request: ReceiveMessageRequest) -> Result<ReceiveMessageResponse> {
        self.dispatch.send(request).await
    }

    pub async fn delete_message(&self, request: DeleteMessageRequest) -> Result<DeleteMessageResponse> {
        self.dispatch.send(request).await
    }

    pub async fn change_message_visibility(
        &self,
        request: ChangeMessageVisibilityRequest,
    ) -> Result<ChangeMessageVisibilityResponse> {
        self.dispatch.send(request).await
    }
}

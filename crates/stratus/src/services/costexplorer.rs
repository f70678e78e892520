//! AWS Cost Explorer
//!
//! Cost and usage reports, forecasts, dimension values and cost allocation tags.
//! The service has a single global endpoint in `us-east-1`.

#![allow(missing_docs)]

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stratus_core::{Optional, Paginator};

use super::request_builders;
use crate::client::Dispatch;
use crate::error::{Error, Result};
use crate::operation::{ResponseMetadata, operation};
use crate::paginate::paginated;
use crate::protocol::{Protocol, ServiceSpec};

/// Cost Explorer endpoint and protocol.
pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "costexplorer",
    endpoint_prefix: "ce",
    signing_name: "ce",
    protocol: Protocol::AwsJson1_1,
    target: "AWSInsightsIndexService",
    global_region: Some("us-east-1"),
};

// ---- shared shapes ----

/// Half-open `[start, end)` range of `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateInterval {
    pub start: String,
    pub end: String,
}

impl DateInterval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DimensionValues {
    /// `SERVICE`, `LINKED_ACCOUNT`, `REGION`, `USAGE_TYPE`, ...
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub key: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub values: Optional<Vec<String>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub match_options: Optional<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagValues {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub key: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub values: Optional<Vec<String>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub match_options: Optional<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CostCategoryValues {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub key: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub values: Optional<Vec<String>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub match_options: Optional<Vec<String>>,
}

/// Filter expression. Exactly one member should be set per node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Expression {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub or: Optional<Vec<Expression>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub and: Optional<Vec<Expression>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub not: Optional<Box<Expression>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub dimensions: Optional<DimensionValues>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub tags: Optional<TagValues>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub cost_categories: Optional<CostCategoryValues>,
}

impl Expression {
    /// `Dimensions` node matching any of `values`.
    pub fn dimension<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dimensions: Optional::Present(DimensionValues {
                key: Optional::Present(key.into()),
                values: Optional::Present(values.into_iter().map(Into::into).collect()),
                match_options: Optional::Unset,
            }),
            ..Default::default()
        }
    }

    /// `Tags` node matching any of `values`.
    pub fn tag<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: Optional::Present(TagValues {
                key: Optional::Present(key.into()),
                values: Optional::Present(values.into_iter().map(Into::into).collect()),
                match_options: Optional::Unset,
            }),
            ..Default::default()
        }
    }

    pub fn and(expressions: Vec<Expression>) -> Self {
        Self {
            and: Optional::Present(expressions),
            ..Default::default()
        }
    }

    pub fn or(expressions: Vec<Expression>) -> Self {
        Self {
            or: Optional::Present(expressions),
            ..Default::default()
        }
    }

    pub fn negate(expression: Expression) -> Self {
        Self {
            not: Optional::Present(Box::new(expression)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupDefinition {
    /// `DIMENSION`, `TAG` or `COST_CATEGORY`.
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub r#type: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub key: Optional<String>,
}

impl GroupDefinition {
    pub fn dimension(key: impl Into<String>) -> Self {
        Self {
            r#type: Optional::Present("DIMENSION".to_string()),
            key: Optional::Present(key.into()),
        }
    }

    pub fn tag(key: impl Into<String>) -> Self {
        Self {
            r#type: Optional::Present("TAG".to_string()),
            key: Optional::Present(key.into()),
        }
    }
}

/// Amounts are decimal strings as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetricValue {
    pub amount: Optional<String>,
    pub unit: Optional<String>,
}

impl MetricValue {
    /// Parsed `Amount`, if present and numeric.
    pub fn amount_f64(&self) -> Option<f64> {
        self.amount.get().and_then(|amount| amount.parse().ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Group {
    pub keys: Optional<Vec<String>>,
    pub metrics: Optional<HashMap<String, MetricValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultByTime {
    pub time_period: Optional<DateInterval>,
    pub total: Optional<HashMap<String, MetricValue>>,
    pub groups: Optional<Vec<Group>>,
    pub estimated: Optional<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DimensionValuesWithAttributes {
    pub value: Optional<String>,
    pub attributes: Optional<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ForecastResult {
    pub time_period: Optional<DateInterval>,
    pub mean_value: Optional<String>,
    pub prediction_interval_lower_bound: Optional<String>,
    pub prediction_interval_upper_bound: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SortDefinition {
    pub key: String,
    /// `ASCENDING` or `DESCENDING`.
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub sort_order: Optional<String>,
}

// ---- requests ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetCostAndUsageRequest {
    pub time_period: DateInterval,
    /// `DAILY`, `MONTHLY` or `HOURLY`.
    pub granularity: String,
    /// `UnblendedCost`, `AmortizedCost`, `UsageQuantity`, ...
    pub metrics: Vec<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub filter: Optional<Expression>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub group_by: Optional<Vec<GroupDefinition>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_page_token: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetCostForecastRequest {
    pub time_period: DateInterval,
    pub metric: String,
    pub granularity: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub filter: Optional<Expression>,
    /// 51 to 99.
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub prediction_interval_level: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetDimensionValuesRequest {
    pub time_period: DateInterval,
    pub dimension: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub search_string: Optional<String>,
    /// `COST_AND_USAGE`, `RESERVATIONS` or `SAVINGS_PLANS`.
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub context: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub filter: Optional<Expression>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub sort_by: Optional<Vec<SortDefinition>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_results: Optional<i32>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_page_token: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetTagsRequest {
    pub time_period: DateInterval,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub tag_key: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub search_string: Optional<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub filter: Optional<Expression>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_results: Optional<i32>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub next_page_token: Optional<String>,
}

request_builders!(
    GetCostAndUsageRequest => GetCostAndUsageRequestBuilder,
    GetCostForecastRequest => GetCostForecastRequestBuilder,
    GetDimensionValuesRequest => GetDimensionValuesRequestBuilder,
    GetTagsRequest => GetTagsRequestBuilder,
);

// ---- responses ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetCostAndUsageResponse {
    pub next_page_token: Optional<String>,
    pub group_definitions: Optional<Vec<GroupDefinition>>,
    pub results_by_time: Optional<Vec<ResultByTime>>,
    pub dimension_value_attributes: Optional<Vec<DimensionValuesWithAttributes>>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetCostForecastResponse {
    pub total: Optional<MetricValue>,
    pub forecast_results_by_time: Optional<Vec<ForecastResult>>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDimensionValuesResponse {
    pub dimension_values: Optional<Vec<DimensionValuesWithAttributes>>,
    pub return_size: Optional<i32>,
    pub total_size: Optional<i32>,
    pub next_page_token: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetTagsResponse {
    pub next_page_token: Optional<String>,
    pub tags: Optional<Vec<String>>,
    pub return_size: Optional<i32>,
    pub total_size: Optional<i32>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

operation!(SERVICE, GetCostAndUsage: GetCostAndUsageRequest => GetCostAndUsageResponse);
operation!(SERVICE, GetCostForecast: GetCostForecastRequest => GetCostForecastResponse);
operation!(SERVICE, GetDimensionValues: GetDimensionValuesRequest => GetDimensionValuesResponse);
operation!(SERVICE, GetTags: GetTagsRequest => GetTagsResponse);

paginated!(GetCostAndUsageRequest, next_page_token => next_page_token);
paginated!(GetDimensionValuesRequest, next_page_token => next_page_token);
paginated!(GetTagsRequest, next_page_token => next_page_token);

// ---- exceptions ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataUnavailableException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BillExpirationException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvalidNextTokenException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestChangedException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LimitExceededException {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// Cost Explorer API resource.
#[derive(Debug, Clone)]
pub struct CostExplorer {
    dispatch: Dispatch,
}

impl CostExplorer {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    pub async fn get_cost_and_usage(&self, request: GetCostAndUsageRequest) -> Result<GetCostAndUsageResponse> {
        self.dispatch.send(request).await
    }

    pub fn get_cost_and_usage_pages(
        &self,
        request: GetCostAndUsageRequest,
    ) -> Paginator<GetCostAndUsageResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn get_cost_forecast(&self, request: GetCostForecastRequest) -> Result<GetCostForecastResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_dimension_values(
        &self,
        request: GetDimensionValuesRequest,
    ) -> Result<GetDimensionValuesResponse> {
        self.dispatch.send(request).await
    }

    pub fn get_dimension_values_pages(
        &self,
        request: GetDimensionValuesRequest,
    ) -> Paginator<GetDimensionValuesResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn get_tags(&self, request: GetTagsRequest) -> Result<GetTagsResponse> {
        self.dispatch.send(request).await
    }

    pub fn get_tags_pages(&self, request: GetTagsRequest) -> Paginator<GetTagsResponse, Error> {
        self.dispatch.paginate(request)
    }
}
